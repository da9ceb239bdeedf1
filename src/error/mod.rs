//! Error types for the roster persistence layer.
//!
//! Repositories return [`sea_orm::DbErr`] directly. Everything above them uses [`Error`],
//! whose `From<DbErr>` implementation sorts database failures into connectivity problems,
//! referential integrity violations, and everything else. "Not found" is never an error:
//! single-entity reads return `Ok(None)` instead.

pub mod config;

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::error::config::ConfigError;

/// Main error type for the roster crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A write would leave an employee pointing at a department that does not exist, or a
    /// department delete was attempted while employees still reference it.
    #[error("Referential integrity violation: {0}")]
    ReferentialIntegrityViolation(String),
    /// The database could not be reached or no connection could be acquired in time.
    ///
    /// Fatal for the current call, no retry is attempted.
    #[error("Failed to reach the database: {0}")]
    ConnectivityFailure(#[source] DbErr),
    /// A unit of work failed part way through and was rolled back before this was returned.
    ///
    /// None of the unit's writes are visible afterwards.
    #[error("Transaction for {unit} was rolled back: {source}")]
    TransactionAborted {
        unit: String,
        #[source]
        source: Box<Error>,
    },
    /// Failure raised on purpose to exercise rollback.
    #[error("Simulated failure: {0}")]
    SimulatedFailure(String),
    /// Any other database error (query failures, unique constraint violations).
    #[error(transparent)]
    DbErr(DbErr),
}

impl From<DbErr> for Error {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => Error::ConnectivityFailure(err),
            err => match err.sql_err() {
                Some(SqlErr::ForeignKeyConstraintViolation(message)) => {
                    Error::ReferentialIntegrityViolation(message)
                }
                _ => Error::DbErr(err),
            },
        }
    }
}

impl Error {
    /// Returns the error that caused a unit of work to abort, or `self` for any other error.
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::TransactionAborted { source, .. } => source.root_cause(),
            err => err,
        }
    }
}
