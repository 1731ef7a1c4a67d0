#![cfg(test)]
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

use crate::cliente::domain::{ClienteCreateDto, ClienteDto, EnderecoDto};

/// Fresh, migrated in-memory database for the current test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = models::db::connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub fn endereco() -> EnderecoDto {
    EnderecoDto {
        rua: "Rua X".into(),
        numero: "99".into(),
        cidade: "Cidade Y".into(),
        estado: "Estado Z".into(),
        cep: "00000-000".into(),
    }
}

pub fn create_input(email: &str) -> ClienteCreateDto {
    ClienteCreateDto {
        nome: "Daniel Kiffer".into(),
        email: email.into(),
        telefone: Some("12345678".into()),
        endereco: endereco(),
    }
}

pub fn update_input(email: &str) -> ClienteDto {
    ClienteDto {
        id: uuid::Uuid::nil(),
        nome: "Daniel K.".into(),
        email: email.into(),
        telefone: None,
        endereco: EnderecoDto { rua: "Rua W".into(), numero: "7".into(), ..endereco() },
    }
}
