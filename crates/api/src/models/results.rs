//! Wire-level result envelopes for mutating operations.
//!
//! These keep the document-store result shapes the API's clients already
//! consume: `insertedId`, `deletedCount`, `matchedCount`/`modifiedCount`.

use serde::Serialize;

/// Result of an insert, carrying the new row's ID.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult<Id> {
    pub inserted_id: Id,
}

/// Result of a delete; `deleted_count` is 0 when nothing matched (absence
/// is not an error).
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub deleted_count: u64,
}

/// Result of an update.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub matched_count: u64,
    pub modified_count: u64,
}

impl UpdateResult {
    /// Build a result from a statement's affected-row count.
    ///
    /// `UPDATE` reports matched rows; this API applies full-field sets, so
    /// matched and modified coincide.
    #[must_use]
    pub const fn from_rows_affected(rows: u64) -> Self {
        Self {
            matched_count: rows,
            modified_count: rows,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_result_camel_case() {
        let json = serde_json::to_string(&InsertResult { inserted_id: 5 }).unwrap();
        assert_eq!(json, r#"{"insertedId":5}"#);
    }

    #[test]
    fn test_insert_result_null_id() {
        let result: InsertResult<Option<i32>> = InsertResult { inserted_id: None };
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"insertedId":null}"#
        );
    }

    #[test]
    fn test_delete_result_shape() {
        let json = serde_json::to_string(&DeleteResult { deleted_count: 0 }).unwrap();
        assert_eq!(json, r#"{"deletedCount":0}"#);
    }

    #[test]
    fn test_update_result_from_rows() {
        let result = UpdateResult::from_rows_affected(1);
        assert_eq!(result.matched_count, 1);
        assert_eq!(result.modified_count, 1);
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"matchedCount":1,"modifiedCount":1}"#
        );
    }
}
