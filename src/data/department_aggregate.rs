use sea_orm::{
    ConnectionTrait, DatabaseTransaction, DbErr, EntityTrait, IsolationLevel, TransactionTrait,
};

use crate::{
    data::transaction::{TrackedTransaction, TransactionOptions},
    model::department::DepartmentAggregate,
};

/// Read-only access to departments joined with their employees.
pub struct DepartmentAggregateRepository<'a, C>
where
    C: ConnectionTrait + TransactionTrait<Transaction = DatabaseTransaction>,
{
    db: &'a C,
    options: TransactionOptions,
}

impl<'a, C> DepartmentAggregateRepository<'a, C>
where
    C: ConnectionTrait + TransactionTrait<Transaction = DatabaseTransaction>,
{
    /// Creates a reader whose transactions run at `READ COMMITTED`
    pub fn new(db: &'a C) -> Self {
        Self::with_isolation_level(db, IsolationLevel::ReadCommitted)
    }

    pub fn with_isolation_level(db: &'a C, isolation_level: IsolationLevel) -> Self {
        Self {
            db,
            options: TransactionOptions::read_only(isolation_level),
        }
    }

    /// Loads the department and its employees with a single join inside a read-only
    /// transaction, so the employee list reflects the same committed state as the department.
    ///
    /// Returns `Ok(None)` when the department does not exist.
    pub async fn find_one(&self, department_id: i64) -> Result<Option<DepartmentAggregate>, DbErr> {
        let description = format!("aggregate read of department ID {}", department_id);
        let txn = TrackedTransaction::begin(self.db, &self.options, &description).await?;

        let rows = entity::prelude::Department::find_by_id(department_id)
            .find_with_related(entity::prelude::Employee)
            .all(txn.as_ref())
            .await?;

        txn.commit().await?;

        Ok(rows
            .into_iter()
            .next()
            .map(|(department, employees)| DepartmentAggregate::new(department, employees)))
    }
}
