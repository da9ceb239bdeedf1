//! Shared values for test databases and fixtures.

/// Connection string for a private in-memory SQLite database.
///
/// SeaORM limits in-memory SQLite pools to a single connection, so every test gets its own
/// isolated database.
pub static TEST_DATABASE_URL: &str = "sqlite::memory:";

/// Name given to departments inserted by `insert_mock_department`.
pub static MOCK_DEPARTMENT_NAME: &str = "Mock Department";
