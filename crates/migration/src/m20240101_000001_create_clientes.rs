//! Create `clientes` table.
//!
//! The address is embedded: its five fields are columns of the same row.
//! Email uniqueness is enforced here; the service-level check is only a fast path.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(clientes_table()).await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_clientes_email_unique")
                    .table(Clientes::Table)
                    .col(Clientes::Email)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_clientes_email_unique").table(Clientes::Table).to_owned())
            .await?;
        manager.drop_table(Table::drop().table(Clientes::Table).to_owned()).await
    }
}

/// Text columns are unbounded; request validation owns the content rules.
fn clientes_table() -> TableCreateStatement {
    Table::create()
        .table(Clientes::Table)
        .if_not_exists()
        .col(uuid(Clientes::Id).primary_key())
        .col(text(Clientes::Nome))
        .col(text(Clientes::Email))
        .col(text_null(Clientes::Telefone))
        .col(text(Clientes::EnderecoRua))
        .col(text(Clientes::EnderecoNumero))
        .col(text(Clientes::EnderecoCidade))
        .col(text(Clientes::EnderecoEstado))
        .col(text(Clientes::EnderecoCep))
        .to_owned()
}

#[derive(DeriveIden)]
enum Clientes {
    Table,
    Id,
    Nome,
    Email,
    Telefone,
    EnderecoRua,
    EnderecoNumero,
    EnderecoCidade,
    EnderecoEstado,
    EnderecoCep,
}
