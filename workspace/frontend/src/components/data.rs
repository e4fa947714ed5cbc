pub mod actual_table;

pub use actual_table::ActualTable;
