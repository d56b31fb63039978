//! Domain models with validation at construction
//!
//! Create requests are converted into `New*` values before they reach the
//! store. Invalid input returns ValidationError, not panic.

pub mod book;
pub mod member;
pub mod transaction;
pub mod validation;

pub use book::{Book, CreateBookRequest, NewBook, DEFAULT_BOOK_STATUS};
pub use member::{CreateMemberRequest, Member, MemberCode, NewMember};
pub use transaction::{
    CreateTransactionRequest, NewTransaction, OverdueLoan, Transaction,
    DEFAULT_TRANSACTION_STATUS, OVERDUE_GRACE_DAYS,
};
pub use validation::ValidationError;
