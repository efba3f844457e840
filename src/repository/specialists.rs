//! NDT specialist store

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::enums::SpecialistState,
    models::specialist::{CreateSpecialist, NkCert, NkSpecialist, UpdateSpecialist},
};

#[derive(Clone)]
pub struct SpecialistsRepository {
    items: Arc<RwLock<Vec<NkSpecialist>>>,
}

impl SpecialistsRepository {
    pub fn new(seed: Vec<NkSpecialist>) -> Self {
        Self {
            items: Arc::new(RwLock::new(seed)),
        }
    }

    /// List all specialists
    pub async fn list(&self) -> Vec<NkSpecialist> {
        self.items.read().await.clone()
    }

    /// Get specialist by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<NkSpecialist> {
        self.items
            .read()
            .await
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Specialist {} not found", id)))
    }

    /// Create specialist
    pub async fn create(&self, data: CreateSpecialist) -> NkSpecialist {
        let specialist = NkSpecialist {
            id: Uuid::new_v4(),
            last_name: data.last_name,
            first_name: data.first_name,
            patronymic: data.patronymic,
            position: data.position,
            department: data.department,
            phone: data.phone,
            email: data.email,
            state: data.state.unwrap_or(SpecialistState::Active),
            certs: data.certs.into_iter().map(|c| c.into_cert()).collect(),
            hired_at: data.hired_at,
        };
        self.items.write().await.push(specialist.clone());
        specialist
    }

    /// Update specialist; certs replace the collection wholesale
    pub async fn update(&self, id: Uuid, data: UpdateSpecialist) -> AppResult<NkSpecialist> {
        let mut items = self.items.write().await;
        let sp = items
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Specialist {} not found", id)))?;

        if let Some(last_name) = data.last_name {
            sp.last_name = last_name;
        }
        if let Some(first_name) = data.first_name {
            sp.first_name = first_name;
        }
        if let Some(patronymic) = data.patronymic {
            sp.patronymic = patronymic;
        }
        if let Some(position) = data.position {
            sp.position = position;
        }
        if let Some(department) = data.department {
            sp.department = department;
        }
        if let Some(phone) = data.phone {
            sp.phone = phone;
        }
        if let Some(email) = data.email {
            sp.email = email;
        }
        if let Some(state) = data.state {
            sp.state = state;
        }
        if let Some(certs) = data.certs {
            sp.certs = certs.into_iter().map(|c| c.into_cert()).collect();
        }
        if let Some(hired_at) = data.hired_at {
            sp.hired_at = hired_at;
        }
        Ok(sp.clone())
    }

    /// Append a certification to a specialist
    pub async fn add_cert(&self, id: Uuid, cert: NkCert) -> AppResult<NkSpecialist> {
        let mut items = self.items.write().await;
        let sp = items
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Specialist {} not found", id)))?;
        sp.certs.push(cert);
        Ok(sp.clone())
    }

    /// Delete specialist
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|s| s.id != id);
        if items.len() == before {
            return Err(AppError::NotFound(format!("Specialist {} not found", id)));
        }
        Ok(())
    }
}
