pub use super::department::Entity as Department;
pub use super::employee::Entity as Employee;
