use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, ModelTrait,
    QueryFilter,
};

pub struct EmployeeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EmployeeRepository<'a, C> {
    /// Creates a new instance of [`EmployeeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_one(
        &self,
        employee_id: i64,
    ) -> Result<Option<entity::employee::Model>, DbErr> {
        entity::prelude::Employee::find_by_id(employee_id)
            .one(self.db)
            .await
    }

    /// Inserts the employee, or overwrites name and department of the existing row with the
    /// same ID
    ///
    /// # Notes
    /// - The department must exist in the department table due to foreign key constraint
    pub async fn save(
        &self,
        employee: entity::employee::Model,
    ) -> Result<entity::employee::Model, DbErr> {
        let employee = entity::employee::ActiveModel {
            id: ActiveValue::Set(employee.id),
            name: ActiveValue::Set(employee.name),
            department_id: ActiveValue::Set(employee.department_id),
        };

        entity::prelude::Employee::insert(employee)
            .on_conflict(
                OnConflict::column(entity::employee::Column::Id)
                    .update_columns([
                        entity::employee::Column::Name,
                        entity::employee::Column::DepartmentId,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Deletes an employee
    ///
    /// Returns OK regardless of the employee existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, employee_id: i64) -> Result<DeleteResult, DbErr> {
        entity::prelude::Employee::delete_by_id(employee_id)
            .exec(self.db)
            .await
    }

    /// Returns every employee of the department, an empty list when there are none
    pub async fn find_by_department(
        &self,
        department: &entity::department::Model,
    ) -> Result<Vec<entity::employee::Model>, DbErr> {
        department
            .find_related(entity::prelude::Employee)
            .all(self.db)
            .await
    }

    /// Resolves the department the employee belongs to
    pub async fn find_department(
        &self,
        employee: &entity::employee::Model,
    ) -> Result<Option<entity::department::Model>, DbErr> {
        employee
            .find_related(entity::prelude::Department)
            .one(self.db)
            .await
    }

    /// Deletes every employee of the department in a single statement
    pub async fn delete_by_department(&self, department_id: i64) -> Result<DeleteResult, DbErr> {
        entity::prelude::Employee::delete_many()
            .filter(entity::employee::Column::DepartmentId.eq(department_id))
            .exec(self.db)
            .await
    }
}
