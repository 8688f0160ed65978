pub mod personnel;
pub mod schedule;
