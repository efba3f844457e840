//! Equipment management service

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::equipment::{
        CreateEquipment, CreateVerification, Equipment, EquipmentDetails, UpdateEquipment,
    },
    repository::Repository,
};

use super::expiry::{equipment_days_left, equipment_status};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
}

impl EquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    fn details(equipment: Equipment, today: NaiveDate) -> EquipmentDetails {
        let status = equipment_status(&equipment, today);
        let days_left = equipment_days_left(&equipment, today);
        EquipmentDetails {
            equipment,
            status,
            days_left,
        }
    }

    /// List all equipment with derived statuses
    pub async fn list(&self, today: NaiveDate) -> Vec<EquipmentDetails> {
        self.repository
            .equipment
            .list()
            .await
            .into_iter()
            .map(|eq| Self::details(eq, today))
            .collect()
    }

    /// Get one equipment record with derived status
    pub async fn get(&self, id: Uuid, today: NaiveDate) -> AppResult<EquipmentDetails> {
        let equipment = self.repository.equipment.get_by_id(id).await?;
        Ok(Self::details(equipment, today))
    }

    /// Create an equipment record
    pub async fn create(&self, data: CreateEquipment, today: NaiveDate) -> EquipmentDetails {
        let equipment = self.repository.equipment.create(data).await;
        Self::details(equipment, today)
    }

    /// Update an equipment record
    pub async fn update(
        &self,
        id: Uuid,
        data: UpdateEquipment,
        today: NaiveDate,
    ) -> AppResult<EquipmentDetails> {
        let equipment = self.repository.equipment.update(id, data).await?;
        Ok(Self::details(equipment, today))
    }

    /// Append a verification
    pub async fn add_verification(
        &self,
        id: Uuid,
        data: CreateVerification,
        today: NaiveDate,
    ) -> AppResult<EquipmentDetails> {
        let equipment = self
            .repository
            .equipment
            .add_verification(id, data.into_verification())
            .await?;
        Ok(Self::details(equipment, today))
    }

    /// Delete an equipment record
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.equipment.delete(id).await
    }
}
