//! Shared response types.

mod list;
mod response;

pub use list::{ListResponse, PlaceList, TransactionList, UserList};
pub use response::{Created, NoContent};
