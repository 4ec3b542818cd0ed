pub mod adapter;
pub mod constant_product;
