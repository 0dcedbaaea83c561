//! End-to-end tests of the public cart and menu surface.
//!
//! Run with: cargo test -p bistro-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};

use bistro_integration_tests::{api_base_url, client, unique_email};

#[tokio::test]
#[ignore = "Requires a running bistro-api server and PostgreSQL"]
async fn test_cart_entries_are_scoped_by_email() {
    let anonymous = client();
    let owner = unique_email("cart-owner");
    let stranger = unique_email("cart-stranger");

    let response = anonymous
        .post(format!("{}/carts", api_base_url()))
        .json(&json!({
            "email": owner,
            "menuItemId": 1,
            "name": "soup",
            "price": 4.99
        }))
        .send()
        .await
        .expect("Failed to call POST /carts");
    assert_eq!(response.status(), StatusCode::OK);
    let inserted: Value = response.json().await.expect("Failed to parse response");
    let entry_id = inserted["insertedId"]
        .as_i64()
        .expect("insert should return an ID");

    // Visible under the owner's email
    let entries: Value = anonymous
        .get(format!("{}/carts?email={owner}", api_base_url()))
        .send()
        .await
        .expect("Failed to call GET /carts")
        .json()
        .await
        .expect("Failed to parse response");
    let entries = entries.as_array().expect("cart list should be an array");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["name"], "soup");
    assert_eq!(entries[0]["email"], owner);

    // Absent under anyone else's
    let empty: Value = anonymous
        .get(format!("{}/carts?email={stranger}", api_base_url()))
        .send()
        .await
        .expect("Failed to call GET /carts")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(empty.as_array().expect("array").len(), 0);

    // Cleanup through the public delete
    let deleted: Value = anonymous
        .delete(format!("{}/carts/{entry_id}", api_base_url()))
        .send()
        .await
        .expect("Failed to call DELETE /carts")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(deleted["deletedCount"], 1);
}

#[tokio::test]
#[ignore = "Requires a running bistro-api server and PostgreSQL"]
async fn test_delete_absent_cart_entry_reports_zero() {
    let anonymous = client();

    let response = anonymous
        .delete(format!("{}/carts/999999999", api_base_url()))
        .send()
        .await
        .expect("Failed to call DELETE /carts");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["deletedCount"], 0);
}

#[tokio::test]
#[ignore = "Requires a running bistro-api server and PostgreSQL"]
async fn test_menu_reads_are_public() {
    let anonymous = client();

    let response = anonymous
        .get(format!("{}/menu", api_base_url()))
        .send()
        .await
        .expect("Failed to call GET /menu");
    assert_eq!(response.status(), StatusCode::OK);

    // Absent item is JSON null, not an error
    let response = anonymous
        .get(format!("{}/menu/999999999", api_base_url()))
        .send()
        .await
        .expect("Failed to call GET /menu/{id}");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_null());

    let response = anonymous
        .get(format!("{}/review", api_base_url()))
        .send()
        .await
        .expect("Failed to call GET /review");
    assert_eq!(response.status(), StatusCode::OK);
}
