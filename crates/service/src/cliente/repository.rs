use async_trait::async_trait;
use uuid::Uuid;

use super::domain::Cliente;
use crate::errors::ServiceError;

/// Storage gateway for clientes. Infrastructure failures come back as
/// `ServiceError::Storage` and are propagated unchanged by callers.
#[async_trait]
pub trait ClienteRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Cliente>, ServiceError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Cliente>, ServiceError>;
    async fn get_by_email(&self, email: &str) -> Result<Option<Cliente>, ServiceError>;

    /// `cliente.id` is already set and unique.
    async fn insert(&self, cliente: &Cliente) -> Result<(), ServiceError>;
    /// Callers check existence first.
    async fn update(&self, cliente: &Cliente) -> Result<(), ServiceError>;
    /// No-op when the id is absent.
    async fn remove(&self, id: Uuid) -> Result<(), ServiceError>;
}

/// Simple in-memory mock repository for tests, doc examples and benchmarks.
///
/// Like a mocked gateway it does not enforce email uniqueness; only the
/// database-backed repository has a unique index.
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct InMemoryClienteRepository {
        rows: Mutex<HashMap<Uuid, Cliente>>, // key: cliente id
        writes: AtomicUsize,
        unavailable: AtomicBool,
    }

    impl InMemoryClienteRepository {
        pub fn with_clientes(clientes: impl IntoIterator<Item = Cliente>) -> Self {
            let repo = Self::default();
            repo.rows.lock().unwrap().extend(clientes.into_iter().map(|c| (c.id, c)));
            repo
        }

        /// Number of insert/update/remove calls that reached storage.
        pub fn write_count(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }

        /// Make every subsequent call fail as if the backing store were down.
        pub fn set_unavailable(&self, down: bool) {
            self.unavailable.store(down, Ordering::SeqCst);
        }

        pub fn stored(&self, id: Uuid) -> Option<Cliente> {
            self.rows.lock().unwrap().get(&id).cloned()
        }

        fn check(&self) -> Result<(), ServiceError> {
            if self.unavailable.load(Ordering::SeqCst) {
                return Err(ServiceError::Storage("in-memory store marked unavailable".into()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ClienteRepository for InMemoryClienteRepository {
        async fn list_all(&self) -> Result<Vec<Cliente>, ServiceError> {
            self.check()?;
            Ok(self.rows.lock().unwrap().values().cloned().collect())
        }

        async fn get_by_id(&self, id: Uuid) -> Result<Option<Cliente>, ServiceError> {
            self.check()?;
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn get_by_email(&self, email: &str) -> Result<Option<Cliente>, ServiceError> {
            self.check()?;
            let rows = self.rows.lock().unwrap();
            Ok(rows.values().find(|c| c.email == email).cloned())
        }

        async fn insert(&self, cliente: &Cliente) -> Result<(), ServiceError> {
            self.check()?;
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.rows.lock().unwrap().insert(cliente.id, cliente.clone());
            Ok(())
        }

        async fn update(&self, cliente: &Cliente) -> Result<(), ServiceError> {
            self.check()?;
            self.writes.fetch_add(1, Ordering::SeqCst);
            let mut rows = self.rows.lock().unwrap();
            let slot = rows.get_mut(&cliente.id).ok_or(ServiceError::NotFound)?;
            *slot = cliente.clone();
            Ok(())
        }

        async fn remove(&self, id: Uuid) -> Result<(), ServiceError> {
            self.check()?;
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.rows.lock().unwrap().remove(&id);
            Ok(())
        }
    }
}
