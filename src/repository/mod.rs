//! Repository layer: in-memory entity stores
//!
//! There is no persistence; every collection lives behind an RwLock and is
//! seeded once at construction. Each sub-repository owns one collection
//! and exposes list/get/add/update/delete operations.

pub mod equipment;
pub mod expertises;
pub mod registry;
pub mod seed;
pub mod specialists;
pub mod td_reports;

/// Main repository struct holding all entity stores
#[derive(Clone)]
pub struct Repository {
    pub equipment: equipment::EquipmentRepository,
    pub specialists: specialists::SpecialistsRepository,
    pub expertises: expertises::ExpertisesRepository,
    pub td_reports: td_reports::TdReportsRepository,
    pub registry: registry::RegistryRepository,
}

impl Repository {
    /// Create a repository with seeded demo collections
    pub fn new() -> Self {
        Self {
            equipment: equipment::EquipmentRepository::new(seed::equipment()),
            specialists: specialists::SpecialistsRepository::new(seed::specialists()),
            expertises: expertises::ExpertisesRepository::new(seed::expertises()),
            td_reports: td_reports::TdReportsRepository::new(seed::td_reports()),
            registry: registry::RegistryRepository::new(seed::registry()),
        }
    }

    /// Create a repository with empty collections (used by tests)
    pub fn empty() -> Self {
        Self {
            equipment: equipment::EquipmentRepository::new(Vec::new()),
            specialists: specialists::SpecialistsRepository::new(Vec::new()),
            expertises: expertises::ExpertisesRepository::new(Vec::new()),
            td_reports: td_reports::TdReportsRepository::new(Vec::new()),
            registry: registry::RegistryRepository::new(Vec::new()),
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        enums::{EquipCategory, OwnerType},
        equipment::CreateEquipment,
    };

    fn create_equipment(name: &str) -> CreateEquipment {
        CreateEquipment {
            name: name.into(),
            model: "УТ-111".into(),
            serial: "С-1".into(),
            inventory_no: "ОС-1".into(),
            category: EquipCategory::Uzt,
            manufacturer: "НПО".into(),
            manufacture_year: 2022,
            owner: OwnerType::Own,
            department: "ЛНК".into(),
            responsible_person: "Смирнов А.В.".into(),
            location: "204".into(),
            state: None,
            verifications: vec![],
            notes: None,
        }
    }

    #[test]
    fn crud_round_trip_on_empty_store() {
        tokio_test::block_on(async {
            let repo = Repository::empty();
            assert!(repo.equipment.list().await.is_empty());

            let created = repo.equipment.create(create_equipment("Толщиномер")).await;
            let fetched = repo.equipment.get_by_id(created.id).await.unwrap();
            assert_eq!(fetched.name, "Толщиномер");

            repo.equipment.delete(created.id).await.unwrap();
            assert!(repo.equipment.get_by_id(created.id).await.is_err());
        });
    }

    #[test]
    fn seeded_collections_are_non_empty() {
        tokio_test::block_on(async {
            let repo = Repository::new();
            assert!(!repo.equipment.list().await.is_empty());
            assert!(!repo.specialists.list().await.is_empty());
            assert!(!repo.expertises.list().await.is_empty());
            assert!(!repo.td_reports.list().await.is_empty());
            assert!(!repo.registry.list().await.is_empty());
        });
    }
}
