use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait};

pub struct DepartmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DepartmentRepository<'a, C> {
    /// Creates a new instance of [`DepartmentRepository`]
    ///
    /// Pass a transaction as `db` to make calls part of a larger unit of work.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a department by ID, `Ok(None)` if no such row exists
    pub async fn find_one(
        &self,
        department_id: i64,
    ) -> Result<Option<entity::department::Model>, DbErr> {
        entity::prelude::Department::find_by_id(department_id)
            .one(self.db)
            .await
    }

    /// Inserts the department, or overwrites the name of the existing row with the same ID
    pub async fn save(
        &self,
        department: entity::department::Model,
    ) -> Result<entity::department::Model, DbErr> {
        let department = entity::department::ActiveModel {
            id: ActiveValue::Set(department.id),
            name: ActiveValue::Set(department.name),
        };

        entity::prelude::Department::insert(department)
            .on_conflict(
                OnConflict::column(entity::department::Column::Id)
                    .update_column(entity::department::Column::Name)
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Deletes a department
    ///
    /// Returns OK regardless of the department existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field. Fails with a foreign key violation
    /// while employees still reference the department.
    pub async fn delete(&self, department_id: i64) -> Result<DeleteResult, DbErr> {
        entity::prelude::Department::delete_by_id(department_id)
            .exec(self.db)
            .await
    }
}
