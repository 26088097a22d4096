//! A singly-linked list of integers that is built, printed, reversed in place
//! and torn down without recursion.

pub mod alloc;
pub mod error;
pub mod list;

pub use error::ListError;
pub use list::List;
