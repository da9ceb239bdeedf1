//! Service layer for multi-step, transactional operations.
//!
//! Services coordinate repositories and are the only callers allowed to open a transaction
//! spanning more than one repository call.

pub mod department;
pub mod unit_of_work;
