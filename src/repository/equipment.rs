//! Equipment store

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::equipment::{CreateEquipment, Equipment, UpdateEquipment, Verification},
};

#[derive(Clone)]
pub struct EquipmentRepository {
    items: Arc<RwLock<Vec<Equipment>>>,
}

impl EquipmentRepository {
    pub fn new(seed: Vec<Equipment>) -> Self {
        Self {
            items: Arc::new(RwLock::new(seed)),
        }
    }

    /// List all equipment
    pub async fn list(&self) -> Vec<Equipment> {
        self.items.read().await.clone()
    }

    /// Get equipment by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Equipment> {
        self.items
            .read()
            .await
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Create equipment
    pub async fn create(&self, data: CreateEquipment) -> Equipment {
        let equipment = Equipment {
            id: Uuid::new_v4(),
            name: data.name,
            model: data.model,
            serial: data.serial,
            inventory_no: data.inventory_no,
            category: data.category,
            manufacturer: data.manufacturer,
            manufacture_year: data.manufacture_year,
            owner: data.owner,
            department: data.department,
            responsible_person: data.responsible_person,
            location: data.location,
            state: data.state.unwrap_or(crate::models::enums::EquipmentState::Active),
            verifications: data
                .verifications
                .into_iter()
                .map(|v| v.into_verification())
                .collect(),
            notes: data.notes,
        };
        self.items.write().await.push(equipment.clone());
        equipment
    }

    /// Update equipment; verifications replace the collection wholesale
    pub async fn update(&self, id: Uuid, data: UpdateEquipment) -> AppResult<Equipment> {
        let mut items = self.items.write().await;
        let eq = items
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))?;

        if let Some(name) = data.name {
            eq.name = name;
        }
        if let Some(model) = data.model {
            eq.model = model;
        }
        if let Some(serial) = data.serial {
            eq.serial = serial;
        }
        if let Some(inventory_no) = data.inventory_no {
            eq.inventory_no = inventory_no;
        }
        if let Some(category) = data.category {
            eq.category = category;
        }
        if let Some(manufacturer) = data.manufacturer {
            eq.manufacturer = manufacturer;
        }
        if let Some(year) = data.manufacture_year {
            eq.manufacture_year = year;
        }
        if let Some(owner) = data.owner {
            eq.owner = owner;
        }
        if let Some(department) = data.department {
            eq.department = department;
        }
        if let Some(person) = data.responsible_person {
            eq.responsible_person = person;
        }
        if let Some(location) = data.location {
            eq.location = location;
        }
        if let Some(state) = data.state {
            eq.state = state;
        }
        if let Some(verifications) = data.verifications {
            eq.verifications = verifications
                .into_iter()
                .map(|v| v.into_verification())
                .collect();
        }
        if data.notes.is_some() {
            eq.notes = data.notes;
        }
        Ok(eq.clone())
    }

    /// Append a verification to an equipment record
    pub async fn add_verification(
        &self,
        id: Uuid,
        verification: Verification,
    ) -> AppResult<Equipment> {
        let mut items = self.items.write().await;
        let eq = items
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))?;
        eq.verifications.push(verification);
        Ok(eq.clone())
    }

    /// Delete equipment
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|e| e.id != id);
        if items.len() == before {
            return Err(AppError::NotFound(format!("Equipment {} not found", id)));
        }
        Ok(())
    }
}
