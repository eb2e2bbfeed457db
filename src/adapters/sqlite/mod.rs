pub mod adapter;
pub mod query;
