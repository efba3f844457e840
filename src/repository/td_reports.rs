//! Technical-diagnostics report store

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::enums::TdStatus,
    models::td_report::{CreateTdReport, TdReport, UpdateTdReport},
};

#[derive(Clone)]
pub struct TdReportsRepository {
    items: Arc<RwLock<Vec<TdReport>>>,
}

impl TdReportsRepository {
    pub fn new(seed: Vec<TdReport>) -> Self {
        Self {
            items: Arc::new(RwLock::new(seed)),
        }
    }

    /// List all TD reports
    pub async fn list(&self) -> Vec<TdReport> {
        self.items.read().await.clone()
    }

    /// Get TD report by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<TdReport> {
        self.items
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("TD report {} not found", id)))
    }

    /// Create TD report
    pub async fn create(&self, data: CreateTdReport) -> TdReport {
        let report = TdReport {
            id: Uuid::new_v4(),
            number: data.number,
            title: data.title,
            object_name: data.object_name,
            object_type: data.object_type,
            opo: data.opo,
            status: data.status.unwrap_or(TdStatus::Draft),
            created_at: data.created_at,
            updated_at: data.created_at,
            issued_at: None,
            valid_until: None,
            expert: data.expert,
            customer: data.customer,
            protocols: data.protocols.into_iter().map(|p| p.into_protocol()).collect(),
            residual_life: data.residual_life,
            defect_count: data.defect_count,
            conclusion: data.conclusion,
            recommendations: data.recommendations,
        };
        self.items.write().await.push(report.clone());
        report
    }

    /// Update TD report; protocols replace the collection wholesale
    pub async fn update(
        &self,
        id: Uuid,
        data: UpdateTdReport,
        today: chrono::NaiveDate,
    ) -> AppResult<TdReport> {
        let mut items = self.items.write().await;
        let report = items
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(format!("TD report {} not found", id)))?;

        if let Some(title) = data.title {
            report.title = title;
        }
        if let Some(object_name) = data.object_name {
            report.object_name = object_name;
        }
        if let Some(object_type) = data.object_type {
            report.object_type = object_type;
        }
        if let Some(opo) = data.opo {
            report.opo = opo;
        }
        if let Some(status) = data.status {
            report.status = status;
        }
        if data.issued_at.is_some() {
            report.issued_at = data.issued_at;
        }
        if data.valid_until.is_some() {
            report.valid_until = data.valid_until;
        }
        if let Some(expert) = data.expert {
            report.expert = expert;
        }
        if let Some(customer) = data.customer {
            report.customer = customer;
        }
        if let Some(protocols) = data.protocols {
            report.protocols = protocols.into_iter().map(|p| p.into_protocol()).collect();
        }
        if data.residual_life.is_some() {
            report.residual_life = data.residual_life;
        }
        if let Some(defect_count) = data.defect_count {
            report.defect_count = defect_count;
        }
        if data.conclusion.is_some() {
            report.conclusion = data.conclusion;
        }
        if data.recommendations.is_some() {
            report.recommendations = data.recommendations;
        }
        report.updated_at = today;
        Ok(report.clone())
    }

    /// Delete TD report
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|r| r.id != id);
        if items.len() == before {
            return Err(AppError::NotFound(format!("TD report {} not found", id)));
        }
        Ok(())
    }
}
