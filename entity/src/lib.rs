pub mod prelude;

pub mod department;
pub mod employee;
