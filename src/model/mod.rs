//! Domain models shared between the data and service layers.

pub mod app;
pub mod db;
pub mod department;
