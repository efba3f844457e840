//! NDT specialist management service

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::specialist::{
        CreateCert, CreateSpecialist, NkSpecialist, SpecialistDetails, UpdateSpecialist,
    },
    repository::Repository,
};

use super::expiry::specialist_status;

#[derive(Clone)]
pub struct SpecialistsService {
    repository: Repository,
}

impl SpecialistsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    fn details(specialist: NkSpecialist, today: NaiveDate) -> SpecialistDetails {
        let status = specialist_status(&specialist, today);
        SpecialistDetails { specialist, status }
    }

    /// List all specialists with derived statuses
    pub async fn list(&self, today: NaiveDate) -> Vec<SpecialistDetails> {
        self.repository
            .specialists
            .list()
            .await
            .into_iter()
            .map(|sp| Self::details(sp, today))
            .collect()
    }

    /// Get one specialist with derived status
    pub async fn get(&self, id: Uuid, today: NaiveDate) -> AppResult<SpecialistDetails> {
        let specialist = self.repository.specialists.get_by_id(id).await?;
        Ok(Self::details(specialist, today))
    }

    /// Create a specialist
    pub async fn create(&self, data: CreateSpecialist, today: NaiveDate) -> SpecialistDetails {
        let specialist = self.repository.specialists.create(data).await;
        Self::details(specialist, today)
    }

    /// Update a specialist
    pub async fn update(
        &self,
        id: Uuid,
        data: UpdateSpecialist,
        today: NaiveDate,
    ) -> AppResult<SpecialistDetails> {
        let specialist = self.repository.specialists.update(id, data).await?;
        Ok(Self::details(specialist, today))
    }

    /// Append a certification
    pub async fn add_cert(
        &self,
        id: Uuid,
        data: CreateCert,
        today: NaiveDate,
    ) -> AppResult<SpecialistDetails> {
        let specialist = self
            .repository
            .specialists
            .add_cert(id, data.into_cert())
            .await?;
        Ok(Self::details(specialist, today))
    }

    /// Delete a specialist
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.specialists.delete(id).await
    }
}
