use std::{future::Future, pin::Pin};

use sea_orm::{DatabaseConnection, DatabaseTransaction};
use tracing::{debug, error};

use crate::{
    data::transaction::{TrackedTransaction, TransactionOptions},
    error::Error,
};

/// Runs a group of repository calls as one atomic unit.
///
/// Every unit moves `STARTED → COMMITTED` when the operation returns `Ok`, or
/// `STARTED → ROLLED_BACK` when it returns `Err`. A rolled-back unit leaves the store exactly
/// as if it had never run.
///
/// # Example
///
/// ```ignore
/// let unit = UnitOfWork::new(&db, TransactionOptions::default());
///
/// unit.execute("create department ID 4", move |txn| {
///     Box::pin(async move {
///         let department_repo = DepartmentRepository::new(txn);
///         let department = department_repo.save(department).await?;
///
///         Ok(department)
///     })
/// })
/// .await?;
/// ```
pub struct UnitOfWork<'a> {
    db: &'a DatabaseConnection,
    options: TransactionOptions,
}

impl<'a> UnitOfWork<'a> {
    pub fn new(db: &'a DatabaseConnection, options: TransactionOptions) -> Self {
        Self { db, options }
    }

    /// Executes `operation` inside a single transaction.
    ///
    /// # Arguments
    /// - `description` - Human-readable description of the unit for logging (e.g., "delete
    ///   department ID 3")
    /// - `operation` - Async function receiving the open transaction; every write must go
    ///   through it
    ///
    /// # Returns
    /// - `Ok(R)` - Operation succeeded and the transaction committed
    /// - `Err(Error::TransactionAborted)` - Operation or commit failed, the transaction has
    ///   been rolled back and `source` holds the cause
    /// - `Err(_)` - The transaction could not be started, nothing was written
    pub async fn execute<R, F>(&self, description: &str, operation: F) -> Result<R, Error>
    where
        F: for<'t> FnOnce(
            &'t DatabaseTransaction,
        ) -> Pin<Box<dyn Future<Output = Result<R, Error>> + Send + 't>>,
    {
        let txn = TrackedTransaction::begin(self.db, &self.options, description).await?;

        let result = match operation(txn.as_ref()).await {
            Ok(value) => txn.commit().await.map(|_| value).map_err(Error::from),
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    // Dropped transactions are rolled back by the driver when the connection
                    // returns to the pool, the operation's failure is what gets reported.
                    error!(
                        "Failed to roll back transaction for {}: {}",
                        description, rollback_err
                    );
                }
                Err(e)
            }
        };

        match result {
            Ok(value) => {
                debug!("Successfully processed {}", description);
                Ok(value)
            }
            Err(e) => {
                error!("Aborted {}: {}", description, e);
                Err(Error::TransactionAborted {
                    unit: description.to_string(),
                    source: Box::new(e),
                })
            }
        }
    }
}
