use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{constant::MOCK_DEPARTMENT_NAME, error::TestError, TestSetup};

impl TestSetup {
    pub fn department<'a>(&'a self) -> DepartmentFixtures<'a> {
        DepartmentFixtures { setup: self }
    }
}

pub struct DepartmentFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> DepartmentFixtures<'a> {
    pub async fn insert_department(
        &self,
        department_id: i64,
        name: &str,
    ) -> Result<entity::department::Model, TestError> {
        Ok(
            entity::prelude::Department::insert(entity::department::ActiveModel {
                id: ActiveValue::Set(department_id),
                name: ActiveValue::Set(name.to_string()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_mock_department(
        &self,
        department_id: i64,
    ) -> Result<entity::department::Model, TestError> {
        self.insert_department(department_id, MOCK_DEPARTMENT_NAME).await
    }

    pub async fn find_department(
        &self,
        department_id: i64,
    ) -> Result<Option<entity::department::Model>, TestError> {
        Ok(entity::prelude::Department::find_by_id(department_id)
            .one(&self.setup.db)
            .await?)
    }

    /// Delete a department and any employees still pointing at it.
    ///
    /// Succeeds whether or not the department exists.
    pub async fn clean_up_department(&self, department_id: i64) -> Result<(), TestError> {
        entity::prelude::Employee::delete_many()
            .filter(entity::employee::Column::DepartmentId.eq(department_id))
            .exec(&self.setup.db)
            .await?;

        entity::prelude::Department::delete_by_id(department_id)
            .exec(&self.setup.db)
            .await?;

        Ok(())
    }
}
