use std::sync::Arc;

use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::domain::{Cliente, ClienteCreateDto, ClienteDto};
use super::repository::ClienteRepository;
use crate::errors::ServiceError;

/// Cliente business service independent of web framework.
///
/// The repository is passed in explicitly; `R` may be a concrete repository
/// or `dyn ClienteRepository`.
pub struct ClienteService<R: ClienteRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: ClienteRepository + ?Sized> ClienteService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<ClienteDto>, ServiceError> {
        info!("listing clientes");
        let clientes = self.repo.list_all().await?;
        info!(count = clientes.len(), "clientes listed");
        Ok(clientes.into_iter().map(ClienteDto::from).collect())
    }

    /// Absence is `Ok(None)`, not an error.
    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<Option<ClienteDto>, ServiceError> {
        info!("fetching cliente");
        match self.repo.get_by_id(id).await? {
            Some(c) => Ok(Some(c.into())),
            None => {
                warn!("cliente not found");
                Ok(None)
            }
        }
    }

    /// Create a cliente after the email uniqueness and validity checks.
    ///
    /// # Examples
    /// ```
    /// use service::cliente::{ClienteService, repository::mock::InMemoryClienteRepository};
    /// use service::cliente::domain::{ClienteCreateDto, EnderecoDto};
    /// use std::sync::Arc;
    /// let svc = ClienteService::new(Arc::new(InMemoryClienteRepository::default()));
    /// let endereco = EnderecoDto { rua: "Rua X".into(), numero: "99".into(), cidade: "Cidade Y".into(), estado: "Estado Z".into(), cep: "00000-000".into() };
    /// let input = ClienteCreateDto { nome: "Daniel Kiffer".into(), email: "daniel@email.com".into(), telefone: None, endereco };
    /// let created = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(created.email, "daniel@email.com");
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create(&self, input: ClienteCreateDto) -> Result<ClienteDto, ServiceError> {
        info!("creating cliente");
        if self.repo.get_by_email(&input.email).await?.is_some() {
            warn!("email already registered");
            return Err(ServiceError::DuplicateEmail);
        }

        let cliente = Cliente::new(input);
        if !cliente.is_valid() {
            warn!("invalid data for new cliente");
            return Err(ServiceError::InvalidData);
        }

        // The pre-check above is only a fast path; the unique index decides races.
        if let Err(e) = self.repo.insert(&cliente).await {
            if matches!(e, ServiceError::DuplicateEmail) {
                warn!("email registered concurrently; insert rejected by storage");
            }
            return Err(e);
        }
        info!(id = %cliente.id, "cliente created");
        Ok(cliente.into())
    }

    /// Replace nome, email, telefone and endereco of an existing cliente.
    ///
    /// Email uniqueness is not re-checked here. The SQL repository still
    /// rejects a clash through its unique index (`DuplicateEmail`).
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: Uuid, input: ClienteDto) -> Result<(), ServiceError> {
        info!("updating cliente");
        let Some(mut cliente) = self.repo.get_by_id(id).await? else {
            warn!("cliente not found for update");
            return Err(ServiceError::NotFound);
        };

        cliente.apply(input);
        if !cliente.is_valid() {
            warn!("invalid data for cliente update");
            return Err(ServiceError::InvalidData);
        }

        if let Err(e) = self.repo.update(&cliente).await {
            if e.is_business() {
                warn!(err = %e, "update rejected by storage");
            }
            return Err(e);
        }
        info!("cliente updated");
        Ok(())
    }

    /// `Ok(false)` when there was nothing to delete.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        info!("removing cliente");
        if self.repo.get_by_id(id).await?.is_none() {
            warn!("cliente not found for removal");
            return Ok(false);
        }
        self.repo.remove(id).await?;
        info!("cliente removed");
        Ok(true)
    }
}
