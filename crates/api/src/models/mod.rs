//! Domain models and wire-level result envelopes.

pub mod cart;
pub mod menu;
pub mod results;
pub mod review;
pub mod user;

pub use cart::{CartEntry, CartEntryInput};
pub use menu::{MenuItem, MenuItemInput};
pub use results::{DeleteResult, InsertResult, UpdateResult};
pub use review::Review;
pub use user::{CurrentUser, User};
