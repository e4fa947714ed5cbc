pub mod data;
pub mod forecast;
pub mod layout;
