use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{constant::TEST_DATABASE_URL, error::TestError};

pub struct TestSetup {
    pub db: DatabaseConnection,
}

impl TestSetup {
    /// Create a test setup backed by a fresh in-memory SQLite database with no tables.
    ///
    /// SQLite foreign key enforcement is enabled by the sqlx driver by default, so referential
    /// integrity behaves as it does on PostgreSQL.
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect(TEST_DATABASE_URL).await?;

        Ok(TestSetup { db })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Create a test setup with the department and employee tables, in foreign key order.
#[macro_export]
macro_rules! test_setup_with_roster_tables {
    () => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::Department),
                schema.create_table_from_entity(entity::prelude::Employee),
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
