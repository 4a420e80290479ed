pub mod design;
pub mod market;
