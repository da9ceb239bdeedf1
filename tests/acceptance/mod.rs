//! End-to-end scenarios run against the public API, each starting from the clean-up steps
//! the scenario relies on.

mod aggregate;
mod department;
mod rollback;
