//! Expertise workflow store

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::enums::ExpertiseStatus,
    models::expertise::{CreateExpertise, Expertise, UpdateExpertise},
};

#[derive(Clone)]
pub struct ExpertisesRepository {
    items: Arc<RwLock<Vec<Expertise>>>,
}

impl ExpertisesRepository {
    pub fn new(seed: Vec<Expertise>) -> Self {
        Self {
            items: Arc::new(RwLock::new(seed)),
        }
    }

    /// List all expertises
    pub async fn list(&self) -> Vec<Expertise> {
        self.items.read().await.clone()
    }

    /// Get expertise by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Expertise> {
        self.items
            .read()
            .await
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Expertise {} not found", id)))
    }

    /// Create expertise. Numbers are unique.
    pub async fn create(&self, data: CreateExpertise) -> AppResult<Expertise> {
        let mut items = self.items.write().await;
        if items.iter().any(|e| e.number == data.number) {
            return Err(AppError::Conflict(format!(
                "Expertise {} already exists",
                data.number
            )));
        }
        let expertise = Expertise {
            id: Uuid::new_v4(),
            number: data.number,
            object_name: data.object_name,
            object_type: data.object_type,
            customer: data.customer,
            status: data.status.unwrap_or(ExpertiseStatus::Draft),
            created_at: data.created_at,
            deadline: data.deadline,
            reg_number: None,
            expert: data.expert,
        };
        items.push(expertise.clone());
        Ok(expertise)
    }

    /// Update expertise
    pub async fn update(&self, id: Uuid, data: UpdateExpertise) -> AppResult<Expertise> {
        let mut items = self.items.write().await;
        let ex = items
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Expertise {} not found", id)))?;

        if let Some(object_name) = data.object_name {
            ex.object_name = object_name;
        }
        if let Some(object_type) = data.object_type {
            ex.object_type = object_type;
        }
        if let Some(customer) = data.customer {
            ex.customer = customer;
        }
        if let Some(status) = data.status {
            ex.status = status;
        }
        if let Some(deadline) = data.deadline {
            ex.deadline = deadline;
        }
        if data.reg_number.is_some() {
            ex.reg_number = data.reg_number;
        }
        if let Some(expert) = data.expert {
            ex.expert = expert;
        }
        Ok(ex.clone())
    }

    /// Delete expertise
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|e| e.id != id);
        if items.len() == before {
            return Err(AppError::NotFound(format!("Expertise {} not found", id)));
        }
        Ok(())
    }
}
