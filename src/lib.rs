//! Transactional persistence for departments and their employees.
//!
//! Departments own employees through a foreign key. Plain repositories in [`data`] issue one
//! statement per call against any connection or transaction, the aggregate repository reads a
//! department joined with its employees, and [`service::department::DepartmentService`]
//! composes repository calls into units that commit or roll back as a whole.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
