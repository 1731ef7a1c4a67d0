use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

/// One row per cliente; the address is embedded as `endereco_*` columns.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clientes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub nome: String,
    #[sea_orm(unique)]
    pub email: String,
    pub telefone: Option<String>,
    pub endereco_rua: String,
    pub endereco_numero: String,
    pub endereco_cidade: String,
    pub endereco_estado: String,
    pub endereco_cep: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Every column `Set`, so the model can be used for both insert and full update.
fn to_active(m: Model) -> ActiveModel {
    ActiveModel {
        id: Set(m.id),
        nome: Set(m.nome),
        email: Set(m.email),
        telefone: Set(m.telefone),
        endereco_rua: Set(m.endereco_rua),
        endereco_numero: Set(m.endereco_numero),
        endereco_cidade: Set(m.endereco_cidade),
        endereco_estado: Set(m.endereco_estado),
        endereco_cep: Set(m.endereco_cep),
    }
}

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().all(db).await?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Exact, case-sensitive match.
pub async fn find_by_email(db: &DatabaseConnection, email: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find().filter(Column::Email.eq(email)).one(db).await?)
}

pub async fn insert(db: &DatabaseConnection, m: Model) -> Result<Model, ModelError> {
    Ok(to_active(m).insert(db).await?)
}

pub async fn update(db: &DatabaseConnection, m: Model) -> Result<Model, ModelError> {
    Ok(to_active(m).update(db).await?)
}

/// Returns whether a row was removed.
pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
