//! Business logic services

pub mod calculators;
pub mod equipment;
pub mod expertises;
pub mod expiry;
pub mod export;
pub mod registry;
pub mod schedule;
pub mod specialists;
pub mod td_reports;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment: equipment::EquipmentService,
    pub specialists: specialists::SpecialistsService,
    pub schedule: schedule::ScheduleService,
    pub calculators: calculators::CalculatorsService,
    pub expertises: expertises::ExpertisesService,
    pub td_reports: td_reports::TdReportsService,
    pub registry: registry::RegistryService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            equipment: equipment::EquipmentService::new(repository.clone()),
            specialists: specialists::SpecialistsService::new(repository.clone()),
            schedule: schedule::ScheduleService::new(repository.clone()),
            calculators: calculators::CalculatorsService::new(),
            expertises: expertises::ExpertisesService::new(repository.clone()),
            td_reports: td_reports::TdReportsService::new(repository.clone()),
            registry: registry::RegistryService::new(repository),
        }
    }
}
