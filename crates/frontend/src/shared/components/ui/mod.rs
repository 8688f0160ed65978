pub mod badge;
pub mod select;

pub use badge::{Badge, BadgeVariant};
pub use select::Select;
