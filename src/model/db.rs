//! Database model type aliases.

/// Type alias for the department database model.
///
/// Equality and hashing consider only `id`.
pub type DepartmentModel = entity::department::Model;

/// Type alias for the employee database model.
///
/// # Fields (from `entity::employee::Model`)
/// - `id` - Caller-supplied primary key
/// - `name` - Mutable display name
/// - `department_id` - Foreign key to the owning department
pub type EmployeeModel = entity::employee::Model;
