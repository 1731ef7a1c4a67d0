use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::cliente::repo::seaorm::SeaOrmClienteRepository;
use service::cliente::repository::ClienteRepository;
use service::ClienteService;

/// Shared handler state; cloning is cheap.
#[derive(Clone)]
pub struct ServerState {
    pub clientes: Arc<ClienteService<dyn ClienteRepository>>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn ClienteRepository>) -> Self {
        Self { clientes: Arc::new(ClienteService::new(repo)) }
    }

    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmClienteRepository::new(db)))
    }
}
