//! Department orchestration.
//!
//! [`DepartmentService`] is the only place that spans several repository calls with one
//! transaction. Every multi-step operation runs through a [`UnitOfWork`], so callers see
//! either all of its writes or none of them.

#[cfg(test)]
mod tests;

use sea_orm::{DatabaseConnection, IsolationLevel};

use crate::{
    data::{
        department::DepartmentRepository, department_aggregate::DepartmentAggregateRepository,
        employee::EmployeeRepository, transaction::TransactionOptions,
    },
    error::Error,
    model::{
        db::{DepartmentModel, EmployeeModel},
        department::DepartmentAggregate,
    },
    service::unit_of_work::UnitOfWork,
};

/// Name given to newly created departments.
pub static SALES_NAME: &str = "Sales";
/// Name a department is given by [`DepartmentService::update_department`].
pub static SALES_NAME_2: &str = "Sales2";
pub static BONNIE_NAME: &str = "Bonnie";
pub static CLYDE_NAME: &str = "Clyde";

/// Service composing department and employee repository calls into atomic units.
pub struct DepartmentService<'a> {
    db: &'a DatabaseConnection,
    isolation_level: IsolationLevel,
}

impl<'a> DepartmentService<'a> {
    /// Creates a new instance of [`DepartmentService`] using `READ COMMITTED` transactions.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self::with_isolation_level(db, IsolationLevel::ReadCommitted)
    }

    pub fn with_isolation_level(
        db: &'a DatabaseConnection,
        isolation_level: IsolationLevel,
    ) -> Self {
        Self {
            db,
            isolation_level,
        }
    }

    fn unit_of_work(&self) -> UnitOfWork<'a> {
        UnitOfWork::new(
            self.db,
            TransactionOptions::read_write(self.isolation_level.clone()),
        )
    }

    /// Creates a department named [`SALES_NAME`].
    ///
    /// Creating over an existing ID overwrites its name instead of failing, the same upsert
    /// the repository performs. This is a single statement and runs without an explicit unit.
    pub async fn create_department(&self, department_id: i64) -> Result<DepartmentModel, Error> {
        let department_repo = DepartmentRepository::new(self.db);

        let department = department_repo
            .save(DepartmentModel {
                id: department_id,
                name: SALES_NAME.to_string(),
            })
            .await?;

        Ok(department)
    }

    /// Renames the department to [`SALES_NAME_2`].
    ///
    /// Read-modify-write with no optimistic locking, a concurrent writer may be overwritten.
    ///
    /// # Returns
    /// - `Ok(Some(DepartmentModel))` - Department renamed
    /// - `Ok(None)` - Department does not exist, nothing was written
    pub async fn update_department(
        &self,
        department_id: i64,
    ) -> Result<Option<DepartmentModel>, Error> {
        self.unit_of_work()
            .execute(
                &format!("update of department ID {}", department_id),
                move |txn| {
                    Box::pin(async move {
                        let department_repo = DepartmentRepository::new(txn);

                        let Some(mut department) = department_repo.find_one(department_id).await?
                        else {
                            return Ok(None);
                        };

                        department.name = SALES_NAME_2.to_string();
                        let department = department_repo.save(department).await?;

                        Ok(Some(department))
                    })
                },
            )
            .await
    }

    /// Deletes the department's employees, then the department, in one transaction.
    ///
    /// Deleting a department that does not exist is not an error.
    ///
    /// # Returns
    /// - `Ok(true)` - The department existed and has been deleted
    /// - `Ok(false)` - There was no such department
    pub async fn delete_department(&self, department_id: i64) -> Result<bool, Error> {
        self.unit_of_work()
            .execute(
                &format!("cascading delete of department ID {}", department_id),
                move |txn| {
                    Box::pin(async move {
                        let employee_repo = EmployeeRepository::new(txn);
                        let department_repo = DepartmentRepository::new(txn);

                        let employees = employee_repo.delete_by_department(department_id).await?;
                        let department = department_repo.delete(department_id).await?;

                        tracing::debug!(
                            "Deleted department ID {} with {} employees",
                            department_id,
                            employees.rows_affected
                        );

                        Ok(department.rows_affected > 0)
                    })
                },
            )
            .await
    }

    /// Creates a department with two employees, [`BONNIE_NAME`] and [`CLYDE_NAME`], as one
    /// transaction.
    ///
    /// Either all three rows are committed or none are. The returned aggregate is read back
    /// inside the same transaction, so it lists exactly the employees stored for the
    /// department, including any it already had.
    pub async fn create_department_with_employees(
        &self,
        department_id: i64,
        first_employee_id: i64,
        second_employee_id: i64,
    ) -> Result<DepartmentAggregate, Error> {
        self.unit_of_work()
            .execute(
                &format!(
                    "creation of department ID {} with employee IDs {} and {}",
                    department_id, first_employee_id, second_employee_id
                ),
                move |txn| {
                    Box::pin(async move {
                        let department_repo = DepartmentRepository::new(txn);
                        let employee_repo = EmployeeRepository::new(txn);

                        let department = department_repo
                            .save(DepartmentModel {
                                id: department_id,
                                name: SALES_NAME.to_string(),
                            })
                            .await?;

                        for (employee_id, name) in [
                            (first_employee_id, BONNIE_NAME),
                            (second_employee_id, CLYDE_NAME),
                        ] {
                            employee_repo
                                .save(EmployeeModel {
                                    id: employee_id,
                                    name: name.to_string(),
                                    department_id: department.id,
                                })
                                .await?;
                        }

                        // Re-read so the result matches the stored rows, equal employee IDs
                        // leave a single row behind.
                        let employees = employee_repo.find_by_department(&department).await?;

                        Ok(DepartmentAggregate::new(department, employees))
                    })
                },
            )
            .await
    }

    /// Creates the first department, then fails before the second is written, all within one
    /// transaction.
    ///
    /// Always returns [`Error::TransactionAborted`] wrapping an [`Error::SimulatedFailure`].
    /// Afterwards neither department exists, including the one that had already been written.
    pub async fn demonstrate_rollback(
        &self,
        first_department_id: i64,
        second_department_id: i64,
    ) -> Result<(), Error> {
        self.unit_of_work()
            .execute(
                &format!(
                    "creation of department IDs {} and {}",
                    first_department_id, second_department_id
                ),
                move |txn| {
                    Box::pin(async move {
                        let department_repo = DepartmentRepository::new(txn);

                        department_repo
                            .save(DepartmentModel {
                                id: first_department_id,
                                name: SALES_NAME.to_string(),
                            })
                            .await?;

                        Err(Error::SimulatedFailure(format!(
                            "aborting before department ID {} is created",
                            second_department_id
                        )))
                    })
                },
            )
            .await
    }

    /// Reads the department together with its employees, `Ok(None)` if it does not exist.
    pub async fn find_department_aggregate(
        &self,
        department_id: i64,
    ) -> Result<Option<DepartmentAggregate>, Error> {
        let aggregate_repo = DepartmentAggregateRepository::with_isolation_level(
            self.db,
            self.isolation_level.clone(),
        );

        Ok(aggregate_repo.find_one(department_id).await?)
    }
}
