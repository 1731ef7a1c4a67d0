//! Cliente module: three-layer architecture (domain, repository, service).
//!
//! `repository::ClienteRepository` is the storage gateway; `repo::seaorm`
//! backs it with the database and `repository::mock` with a map in memory.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::ClienteService;
