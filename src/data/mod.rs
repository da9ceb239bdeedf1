//! Data access layer repositories.
//!
//! Plain repositories borrow any [`sea_orm::ConnectionTrait`], so the same calls work on a
//! pooled connection or inside an open transaction. Each method issues one statement and
//! caches nothing between calls. The aggregate repository is read-only and opens its own
//! transaction.

pub mod department;
pub mod department_aggregate;
pub mod employee;
pub mod transaction;
