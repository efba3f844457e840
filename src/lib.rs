//! EPB Industrial Safety Expertise Server
//!
//! A Rust REST JSON API server for industrial safety-expertise (ЭПБ) and
//! NDT record-keeping: equipment verification tracking, NDT-specialist
//! certification tracking, expertise workflow, technical-diagnostics
//! reports, a registry of signed conclusions, and the engineering
//! calculators used during diagnostics.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
