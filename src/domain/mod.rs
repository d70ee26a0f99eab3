//! Domain layer - users, places and transactions.
//!
//! Plain data types plus the few rules that belong to them
//! (password hashing, self-or-admin access).

pub mod password;
pub mod place;
pub mod transaction;
pub mod user;

pub use password::Password;
pub use place::{Place, PlaceInput};
pub use transaction::{NamedRef, Transaction, TransactionDraft, TransactionInput};
pub use user::{CurrentUser, NewUser, UpdateUser, User, UserResponse, UserRole};
