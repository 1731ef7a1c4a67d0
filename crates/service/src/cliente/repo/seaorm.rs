use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::cliente::domain::{Cliente, Endereco};
use crate::cliente::repository::ClienteRepository;
use crate::errors::ServiceError;
use models::cliente;

/// SeaORM-backed repository implementation.
pub struct SeaOrmClienteRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmClienteRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

impl From<cliente::Model> for Cliente {
    fn from(m: cliente::Model) -> Self {
        Self {
            id: m.id,
            nome: m.nome,
            email: m.email,
            telefone: m.telefone,
            endereco: Endereco {
                rua: m.endereco_rua,
                numero: m.endereco_numero,
                cidade: m.endereco_cidade,
                estado: m.endereco_estado,
                cep: m.endereco_cep,
            },
        }
    }
}

impl From<&Cliente> for cliente::Model {
    fn from(c: &Cliente) -> Self {
        Self {
            id: c.id,
            nome: c.nome.clone(),
            email: c.email.clone(),
            telefone: c.telefone.clone(),
            endereco_rua: c.endereco.rua.clone(),
            endereco_numero: c.endereco.numero.clone(),
            endereco_cidade: c.endereco.cidade.clone(),
            endereco_estado: c.endereco.estado.clone(),
            endereco_cep: c.endereco.cep.clone(),
        }
    }
}

#[async_trait::async_trait]
impl ClienteRepository for SeaOrmClienteRepository {
    async fn list_all(&self) -> Result<Vec<Cliente>, ServiceError> {
        let rows = cliente::find_all(&self.db).await?;
        Ok(rows.into_iter().map(Cliente::from).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Cliente>, ServiceError> {
        Ok(cliente::find_by_id(&self.db, id).await?.map(Cliente::from))
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<Cliente>, ServiceError> {
        Ok(cliente::find_by_email(&self.db, email).await?.map(Cliente::from))
    }

    async fn insert(&self, c: &Cliente) -> Result<(), ServiceError> {
        cliente::insert(&self.db, c.into()).await?;
        Ok(())
    }

    async fn update(&self, c: &Cliente) -> Result<(), ServiceError> {
        cliente::update(&self.db, c.into()).await?;
        Ok(())
    }

    async fn remove(&self, id: Uuid) -> Result<(), ServiceError> {
        cliente::delete(&self.db, id).await?;
        Ok(())
    }
}
