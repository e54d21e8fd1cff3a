pub mod manager;
pub mod records;
