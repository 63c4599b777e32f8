//! Database access layer

pub mod categories;
pub mod customers;
pub mod products;
pub mod query_builder;
pub mod reports;
pub mod sales;
