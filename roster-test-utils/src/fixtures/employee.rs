use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn employee<'a>(&'a self) -> EmployeeFixtures<'a> {
        EmployeeFixtures { setup: self }
    }
}

pub struct EmployeeFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> EmployeeFixtures<'a> {
    /// Insert an employee, the department must already exist.
    pub async fn insert_employee(
        &self,
        employee_id: i64,
        name: &str,
        department_id: i64,
    ) -> Result<entity::employee::Model, TestError> {
        Ok(
            entity::prelude::Employee::insert(entity::employee::ActiveModel {
                id: ActiveValue::Set(employee_id),
                name: ActiveValue::Set(name.to_string()),
                department_id: ActiveValue::Set(department_id),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn find_employee(
        &self,
        employee_id: i64,
    ) -> Result<Option<entity::employee::Model>, TestError> {
        Ok(entity::prelude::Employee::find_by_id(employee_id)
            .one(&self.setup.db)
            .await?)
    }

    /// Count employee rows referencing the department, whether or not the department exists.
    pub async fn count_for_department(&self, department_id: i64) -> Result<u64, TestError> {
        Ok(entity::prelude::Employee::find()
            .filter(entity::employee::Column::DepartmentId.eq(department_id))
            .count(&self.setup.db)
            .await?)
    }

    /// Delete an employee if it exists.
    pub async fn clean_up_employee(&self, employee_id: i64) -> Result<(), TestError> {
        entity::prelude::Employee::delete_by_id(employee_id)
            .exec(&self.setup.db)
            .await?;

        Ok(())
    }
}
