//! Service-layer integrations: session tokens and the payment provider.

pub mod stripe;
pub mod tokens;
