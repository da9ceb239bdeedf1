//! Database fixtures for departments and employees.
//!
//! Fixtures write through the entity layer directly rather than through the crate under test,
//! which keeps this crate free of a circular dependency on `roster`. Clean-up helpers are
//! idempotent delete-if-exists operations mirroring the set-up/tear-down steps of the
//! acceptance suite; they run outside any unit of work.

pub mod department;
pub mod employee;
