pub mod aggregate;
pub mod catalog;
