pub mod about;
pub mod data;
