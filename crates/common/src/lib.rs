//! Cross-cutting helpers shared by the workspace crates: tracing setup,
//! startup directory checks and small response types.

pub mod types;
pub mod utils;
pub mod env;
