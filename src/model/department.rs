use tracing::warn;

use crate::model::db::{DepartmentModel, EmployeeModel};

/// A department together with all of its employees, read at one point in time.
///
/// Aggregates are assembled on read and never persisted. Every employee in `employees`
/// belongs to the department with ID `id`.
#[derive(Clone, Debug)]
pub struct DepartmentAggregate {
    pub id: i64,
    pub name: String,
    pub employees: Vec<EmployeeModel>,
}

impl DepartmentAggregate {
    /// Assembles an aggregate, dropping any employee that belongs to another department.
    ///
    /// Employees are ordered by ID.
    pub fn new(department: DepartmentModel, employees: Vec<EmployeeModel>) -> Self {
        let (mut employees, foreign): (Vec<EmployeeModel>, Vec<EmployeeModel>) = employees
            .into_iter()
            .partition(|employee| employee.department_id == department.id);

        for employee in foreign {
            warn!(
                "Dropping employee ID {} of department ID {} from aggregate of department ID {}",
                employee.id, employee.department_id, department.id
            );
        }

        employees.sort_by_key(|employee| employee.id);

        Self {
            id: department.id,
            name: department.name,
            employees,
        }
    }

    pub fn find_employee_by_name(&self, name: &str) -> Option<&EmployeeModel> {
        self.employees.iter().find(|employee| employee.name == name)
    }
}
