//! Persistence models: the SeaORM entity for `clientes`, connection helpers
//! and the query functions the SQL-backed repository is built on.

pub mod errors;
pub mod db;
pub mod cliente;
