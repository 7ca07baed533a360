//! PostgreSQL data source
//!
//! Reads supplier master data through set-returning functions, using a
//! deadpool connection pool.

pub mod adapter;
pub mod client;
pub mod models;

pub use adapter::PostgresSupplierSource;
pub use client::PostgresClient;
