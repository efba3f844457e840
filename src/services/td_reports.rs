//! Technical-diagnostics report service

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::td_report::{CreateTdReport, TdReport, UpdateTdReport},
    repository::Repository,
};

use super::export;

#[derive(Clone)]
pub struct TdReportsService {
    repository: Repository,
}

impl TdReportsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Vec<TdReport> {
        self.repository.td_reports.list().await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<TdReport> {
        self.repository.td_reports.get_by_id(id).await
    }

    pub async fn create(&self, data: CreateTdReport) -> TdReport {
        self.repository.td_reports.create(data).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        data: UpdateTdReport,
        today: NaiveDate,
    ) -> AppResult<TdReport> {
        self.repository.td_reports.update(id, data, today).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.td_reports.delete(id).await
    }

    /// Export all reports as CSV
    pub async fn export_csv(&self) -> String {
        export::td_reports_csv(&self.list().await)
    }
}
