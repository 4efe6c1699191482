pub mod a001_supplier;
pub mod a002_quotation_item;
pub mod common;
