pub mod discount;
pub mod memory;
