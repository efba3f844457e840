//! Registry of signed conclusions store

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::enums::{RegistryStatus, RtnStatus},
    models::registry::{CreateRegistryEntry, RegistryEntry, UpdateRegistryEntry},
};

#[derive(Clone)]
pub struct RegistryRepository {
    items: Arc<RwLock<Vec<RegistryEntry>>>,
}

impl RegistryRepository {
    pub fn new(seed: Vec<RegistryEntry>) -> Self {
        Self {
            items: Arc::new(RwLock::new(seed)),
        }
    }

    /// List all registry entries
    pub async fn list(&self) -> Vec<RegistryEntry> {
        self.items.read().await.clone()
    }

    /// Get registry entry by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<RegistryEntry> {
        self.items
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Registry entry {} not found", id)))
    }

    /// Create registry entry. Expertise numbers are unique.
    pub async fn create(&self, data: CreateRegistryEntry) -> AppResult<RegistryEntry> {
        let mut items = self.items.write().await;
        if items.iter().any(|r| r.number == data.number) {
            return Err(AppError::Conflict(format!(
                "Registry entry {} already exists",
                data.number
            )));
        }
        let entry = RegistryEntry {
            id: Uuid::new_v4(),
            number: data.number,
            reg_number: data.reg_number,
            object_name: data.object_name,
            object_type: data.object_type,
            customer: data.customer,
            expert: data.expert,
            signed_at: data.signed_at,
            valid_until: data.valid_until,
            status: data.status.unwrap_or(RegistryStatus::Signed),
            rtn_status: data.rtn_status.unwrap_or(RtnStatus::Pending),
            file_size: data.file_size,
        };
        items.push(entry.clone());
        Ok(entry)
    }

    /// Update registry entry
    pub async fn update(&self, id: Uuid, data: UpdateRegistryEntry) -> AppResult<RegistryEntry> {
        let mut items = self.items.write().await;
        let entry = items
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Registry entry {} not found", id)))?;

        if data.reg_number.is_some() {
            entry.reg_number = data.reg_number;
        }
        if let Some(object_name) = data.object_name {
            entry.object_name = object_name;
        }
        if let Some(object_type) = data.object_type {
            entry.object_type = object_type;
        }
        if let Some(customer) = data.customer {
            entry.customer = customer;
        }
        if let Some(expert) = data.expert {
            entry.expert = expert;
        }
        if let Some(signed_at) = data.signed_at {
            entry.signed_at = signed_at;
        }
        if let Some(valid_until) = data.valid_until {
            entry.valid_until = valid_until;
        }
        if let Some(status) = data.status {
            entry.status = status;
        }
        if let Some(rtn_status) = data.rtn_status {
            entry.rtn_status = rtn_status;
        }
        if data.file_size.is_some() {
            entry.file_size = data.file_size;
        }
        Ok(entry.clone())
    }

    /// Delete registry entry
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|r| r.id != id);
        if items.len() == before {
            return Err(AppError::NotFound(format!("Registry entry {} not found", id)));
        }
        Ok(())
    }
}
