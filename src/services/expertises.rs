//! Expertise workflow service

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::expertise::{CreateExpertise, Expertise, UpdateExpertise},
    repository::Repository,
};

#[derive(Clone)]
pub struct ExpertisesService {
    repository: Repository,
}

impl ExpertisesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Vec<Expertise> {
        self.repository.expertises.list().await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Expertise> {
        self.repository.expertises.get_by_id(id).await
    }

    pub async fn create(&self, data: CreateExpertise) -> AppResult<Expertise> {
        self.repository.expertises.create(data).await
    }

    pub async fn update(&self, id: Uuid, data: UpdateExpertise) -> AppResult<Expertise> {
        self.repository.expertises.update(id, data).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.expertises.delete(id).await
    }
}
