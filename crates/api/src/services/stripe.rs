//! Stripe API client for payment-intent creation.
//!
//! The payment provider is a narrow external collaborator: the API creates
//! a payment intent for a cart total and hands the resulting client secret
//! back to the frontend, nothing more.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Deserialize;
use thiserror::Error;

use crate::config::StripeConfig;

/// Stripe API base URL.
const BASE_URL: &str = "https://api.stripe.com/v1";

/// Errors that can occur when interacting with the Stripe API.
#[derive(Debug, Error)]
pub enum StripeError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse a response.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Stripe API client.
#[derive(Clone)]
pub struct StripeClient {
    client: reqwest::Client,
}

impl StripeClient {
    /// Create a new Stripe API client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build or the secret key is
    /// not a valid header value.
    pub fn new(config: &StripeConfig) -> Result<Self, StripeError> {
        let mut headers = HeaderMap::new();

        let auth_value = format!("Bearer {}", config.secret_key.expose_secret());
        let mut auth_header = HeaderValue::from_str(&auth_value)
            .map_err(|e| StripeError::Parse(format!("Invalid secret key format: {e}")))?;
        auth_header.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_header);

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self { client })
    }

    /// Create a payment intent for a card payment.
    ///
    /// `amount` is in the currency's minor units (cents for USD).
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails or Stripe rejects the intent.
    pub async fn create_payment_intent(
        &self,
        amount: i64,
        currency: &str,
    ) -> Result<PaymentIntent, StripeError> {
        let url = format!("{BASE_URL}/payment_intents");

        let params = [
            ("amount", amount.to_string()),
            ("currency", currency.to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let response = self.client.post(&url).form(&params).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StripeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<PaymentIntent>()
            .await
            .map_err(|e| StripeError::Parse(e.to_string()))
    }
}

/// Payment intent resource from the Stripe API.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    /// Secret the frontend uses to confirm the payment.
    pub client_secret: String,
    pub amount: i64,
    pub currency: String,
    pub status: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    #[test]
    fn test_client_builds_with_key() {
        let config = StripeConfig {
            secret_key: SecretString::from("sk_test_4eC39HqLyjWDarjtT1zdp7dc"),
        };
        assert!(StripeClient::new(&config).is_ok());
    }

    #[test]
    fn test_client_rejects_unprintable_key() {
        let config = StripeConfig {
            secret_key: SecretString::from("sk_test_\nnewline"),
        };
        assert!(matches!(
            StripeClient::new(&config),
            Err(StripeError::Parse(_))
        ));
    }

    #[test]
    fn test_payment_intent_deserializes() {
        let json = r#"{
            "id": "pi_123",
            "client_secret": "pi_123_secret_456",
            "amount": 1099,
            "currency": "usd",
            "status": "requires_payment_method"
        }"#;

        let intent: PaymentIntent = serde_json::from_str(json).unwrap();
        assert_eq!(intent.client_secret, "pi_123_secret_456");
        assert_eq!(intent.amount, 1099);
    }
}
