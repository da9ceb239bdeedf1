use sea_orm::{DatabaseConnection, IsolationLevel};

use crate::service::department::DepartmentService;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Isolation level every unit of work and aggregate read is run at.
    pub isolation_level: IsolationLevel,
}

impl AppState {
    pub fn department_service(&self) -> DepartmentService<'_> {
        DepartmentService::with_isolation_level(&self.db, self.isolation_level.clone())
    }
}
