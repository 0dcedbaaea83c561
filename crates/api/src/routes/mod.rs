//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Banner
//! GET  /health                  - Liveness check
//! GET  /health/ready            - Readiness check (database ping)
//!
//! # Session
//! POST /jwt                     - Issue session token, set cookie
//! POST /logout                  - Clear session cookie
//!
//! # Users
//! GET    /users                 - List users (auth + admin)
//! POST   /users                 - Idempotent self-registration
//! GET    /users/admin/{email}   - Check admin status (auth, own email only)
//! PATCH  /users/admin/{id}      - Promote to admin (auth + admin)
//! DELETE /users/{id}            - Delete user (auth + admin)
//!
//! # Menu
//! GET    /menu                  - List catalog (public)
//! GET    /menu/{id}             - Single item, JSON null when absent (public)
//! POST   /menu                  - Create item (auth + admin)
//! PATCH  /menu/{id}             - Update item (auth + admin)
//! DELETE /menu/{id}             - Delete item (auth + admin)
//!
//! # Reviews
//! GET  /review                  - List reviews (public)
//!
//! # Carts
//! GET    /carts?email=          - List entries for an email (public)
//! POST   /carts                 - Add entry (public)
//! DELETE /carts/{id}            - Remove entry (public)
//!
//! # Payments
//! POST /create-payment-intent   - Create a Stripe payment intent
//! ```

pub mod carts;
pub mod menu;
pub mod payments;
pub mod reviews;
pub mod session;
pub mod users;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

/// Create the session routes router.
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/jwt", post(session::login))
        .route("/logout", post(session::logout))
}

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::index).post(users::register))
        .route("/users/{id}", delete(users::remove))
        // One template serves both methods: GET reads it as an email,
        // PATCH as a numeric user ID.
        .route(
            "/users/admin/{email}",
            get(users::check_admin).patch(users::promote),
        )
}

/// Create the menu routes router.
pub fn menu_routes() -> Router<AppState> {
    Router::new()
        .route("/menu", get(menu::index).post(menu::create))
        .route(
            "/menu/{id}",
            get(menu::show).patch(menu::update).delete(menu::remove),
        )
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/carts", get(carts::index).post(carts::add))
        .route("/carts/{id}", delete(carts::remove))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(session_routes())
        .merge(user_routes())
        .merge(menu_routes())
        .merge(cart_routes())
        .route("/review", get(reviews::index))
        .route("/create-payment-intent", post(payments::create_intent))
}
