//! Payment route handler.
//!
//! Delegates to the Stripe collaborator: the handler converts the posted
//! price to minor units, creates a payment intent, and returns the client
//! secret the frontend needs to confirm the card payment.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use bistro_core::Price;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Payment intent request body.
#[derive(Debug, Deserialize)]
pub struct PaymentRequest {
    pub price: Price,
}

/// Payment intent response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub client_secret: String,
}

/// Create a payment intent for a cart total.
#[instrument(skip(state), fields(price = %request.price))]
pub async fn create_intent(
    State(state): State<AppState>,
    Json(request): Json<PaymentRequest>,
) -> Result<Json<PaymentResponse>> {
    if !request.price.is_positive() {
        return Err(AppError::BadRequest("price must be positive".to_string()));
    }

    let amount = request
        .price
        .to_minor_units()
        .ok_or_else(|| AppError::BadRequest("price out of range".to_string()))?;

    let intent = state.payments().create_payment_intent(amount, "usd").await?;

    Ok(Json(PaymentResponse {
        client_secret: intent.client_secret,
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_payment_request_accepts_number() {
        let request: PaymentRequest = serde_json::from_str(r#"{"price":12.5}"#).unwrap();
        assert_eq!(request.price, Price::new(Decimal::new(125, 1)));
        assert_eq!(request.price.to_minor_units(), Some(1250));
    }

    #[test]
    fn test_payment_response_camel_case() {
        let response = PaymentResponse {
            client_secret: "pi_1_secret_2".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"clientSecret":"pi_1_secret_2"}"#
        );
    }
}
