//! Service layer providing the business rules for clientes on top of models.
//! - Separates business logic from data access (`ClienteRepository`).
//! - Converts explicitly between wire DTOs, domain types and persisted rows.
//! - Business failures are `ServiceError` values, never panics.

pub mod errors;
pub mod cliente;
#[cfg(test)]
pub mod test_support;

pub use cliente::ClienteService;
