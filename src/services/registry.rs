//! Registry of signed conclusions service

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::registry::{CreateRegistryEntry, RegistryEntry, UpdateRegistryEntry},
    repository::Repository,
};

use super::export;

#[derive(Clone)]
pub struct RegistryService {
    repository: Repository,
}

impl RegistryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Vec<RegistryEntry> {
        self.repository.registry.list().await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<RegistryEntry> {
        self.repository.registry.get_by_id(id).await
    }

    pub async fn create(&self, data: CreateRegistryEntry) -> AppResult<RegistryEntry> {
        self.repository.registry.create(data).await
    }

    pub async fn update(&self, id: Uuid, data: UpdateRegistryEntry) -> AppResult<RegistryEntry> {
        self.repository.registry.update(id, data).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.registry.delete(id).await
    }

    /// Export all entries as CSV
    pub async fn export_csv(&self) -> String {
        export::registry_csv(&self.list().await)
    }
}
