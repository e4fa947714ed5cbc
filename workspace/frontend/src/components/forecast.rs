pub mod accuracy;
pub mod chart;
pub mod stats;
pub mod table;
pub mod view;

pub use view::Forecast;
