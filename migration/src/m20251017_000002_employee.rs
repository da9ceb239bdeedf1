use sea_orm_migration::prelude::*;

use crate::m20251017_000001_department::Department;

static IDX_EMPLOYEE_DEPARTMENT_ID: &str = "idx-employee-department_id";
static FK_EMPLOYEE_DEPARTMENT_ID: &str = "fk-employee-department_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The foreign key is declared inline because SQLite cannot add one with ALTER TABLE.
        // Deleting a department with employees is rejected with NO ACTION rather than RESTRICT,
        // which SQLite reports as a plain foreign key violation. Cascading is done explicitly
        // inside the deleting transaction.
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employee::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employee::Name).string().not_null())
                    .col(ColumnDef::new(Employee::DepartmentId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EMPLOYEE_DEPARTMENT_ID)
                            .from(Employee::Table, Employee::DepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EMPLOYEE_DEPARTMENT_ID)
                    .table(Employee::Table)
                    .col(Employee::DepartmentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EMPLOYEE_DEPARTMENT_ID)
                    .table(Employee::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Employee::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Employee {
    Table,
    Id,
    Name,
    DepartmentId,
}
