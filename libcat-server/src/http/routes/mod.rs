//! API endpoint groups

pub mod books;
pub mod members;
pub mod overdue;
pub mod transactions;
