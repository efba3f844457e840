//! Verification/certification schedule aggregation
//!
//! Merges equipment verification records and specialist certification
//! records into one sorted timeline. A pure function of the two input
//! collections and the reference date: calling it twice with the same
//! inputs yields identical, order-stable output.

use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;

use crate::{
    models::{
        enums::{EquipmentStatus, ExpiryStatus, SpecialistStatus},
        equipment::Equipment,
        schedule::{ScheduleItem, ScheduleKind, ScheduleMonth, ScheduleStatus},
        specialist::NkSpecialist,
    },
    repository::Repository,
};

use super::expiry::{
    self, classify_days, days_until, equipment_status, last_verification, specialist_status,
};

fn status_from(expiry: ExpiryStatus) -> ScheduleStatus {
    match expiry {
        ExpiryStatus::Overdue => ScheduleStatus::Overdue,
        ExpiryStatus::Expiring => ScheduleStatus::Expiring,
        ExpiryStatus::Valid => ScheduleStatus::Active,
    }
}

/// Build the schedule timeline from both sources, sorted ascending by
/// expiry date.
///
/// Equipment in repair or decommissioned and inactive specialists are
/// skipped entirely; records without certificates contribute nothing.
/// Each specialist cert within the 180-day horizon yields its own item.
pub fn build_schedule(
    equipment: &[Equipment],
    specialists: &[NkSpecialist],
    today: NaiveDate,
) -> Vec<ScheduleItem> {
    let mut items = Vec::new();

    for eq in equipment {
        match equipment_status(eq, today) {
            EquipmentStatus::Repair | EquipmentStatus::Decommissioned => continue,
            _ => {}
        }
        let Some(last) = last_verification(eq) else {
            continue;
        };
        let days = days_until(last.valid_until, today);
        items.push(ScheduleItem {
            kind: ScheduleKind::Equipment,
            name: eq.name.clone(),
            subtitle: format!("{} · {}", eq.model, eq.serial),
            department: eq.department.clone(),
            responsible: eq.responsible_person.clone(),
            valid_until: last.valid_until,
            next_date: last.next_date,
            status: status_from(classify_days(days)),
            days_left: days,
            tag: eq.category.to_string(),
        });
    }

    for sp in specialists {
        if specialist_status(sp, today) == SpecialistStatus::Inactive {
            continue;
        }
        for cert in &sp.certs {
            let days = days_until(cert.valid_until, today);
            if days > expiry::SCHEDULE_HORIZON_DAYS {
                continue;
            }
            items.push(ScheduleItem {
                kind: ScheduleKind::Cert,
                name: sp.short_name(),
                subtitle: sp.position.clone(),
                department: sp.department.clone(),
                responsible: sp.email.clone(),
                valid_until: cert.valid_until,
                next_date: None,
                status: status_from(classify_days(days)),
                days_left: days,
                tag: format!("{} {}", cert.method, cert.level),
            });
        }
    }

    items.sort_by_key(|i| i.valid_until);
    items
}

/// Bucket sorted schedule items by calendar month of their expiry date,
/// preserving timeline order within each bucket.
pub fn group_by_month(items: Vec<ScheduleItem>, today: NaiveDate) -> Vec<ScheduleMonth> {
    let mut buckets: IndexMap<String, Vec<ScheduleItem>> = IndexMap::new();
    for item in items {
        let key = item.valid_until.format("%Y-%m").to_string();
        buckets.entry(key).or_default().push(item);
    }

    let current = (today.year(), today.month());
    buckets
        .into_iter()
        .map(|(key, items)| {
            let month = (items[0].valid_until.year(), items[0].valid_until.month());
            ScheduleMonth {
                key,
                is_current: month == current,
                is_past: month < current,
                items,
            }
        })
        .collect()
}

/// Schedule service over the repository collections
#[derive(Clone)]
pub struct ScheduleService {
    repository: Repository,
}

impl ScheduleService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Flat sorted timeline
    pub async fn timeline(&self, today: NaiveDate) -> Vec<ScheduleItem> {
        let equipment = self.repository.equipment.list().await;
        let specialists = self.repository.specialists.list().await;
        build_schedule(&equipment, &specialists, today)
    }

    /// Timeline grouped by calendar month
    pub async fn months(&self, today: NaiveDate) -> Vec<ScheduleMonth> {
        group_by_month(self.timeline(today).await, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{
        EquipCategory, EquipmentState, NkLevel, NkMethod, OwnerType, SpecialistState,
    };
    use crate::models::equipment::Verification;
    use crate::models::specialist::NkCert;
    use uuid::Uuid;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn equipment(name: &str, state: EquipmentState, valid_untils: &[NaiveDate]) -> Equipment {
        Equipment {
            id: Uuid::new_v4(),
            name: name.into(),
            model: "М-1".into(),
            serial: "С-1".into(),
            inventory_no: "ОС-1".into(),
            category: EquipCategory::Uzt,
            manufacturer: "З-д".into(),
            manufacture_year: 2020,
            owner: OwnerType::Own,
            department: "Лаборатория НК".into(),
            responsible_person: "Смирнов А.В.".into(),
            location: "204".into(),
            state,
            verifications: valid_untils
                .iter()
                .map(|&vu| Verification {
                    id: Uuid::new_v4(),
                    date: vu - chrono::Duration::days(700),
                    valid_until: vu,
                    cert_number: "СА".into(),
                    lab: "Ростест".into(),
                    next_date: None,
                })
                .collect(),
            notes: None,
        }
    }

    fn specialist(state: SpecialistState, valid_untils: &[NaiveDate]) -> NkSpecialist {
        NkSpecialist {
            id: Uuid::new_v4(),
            last_name: "Иванов".into(),
            first_name: "Павел".into(),
            patronymic: "Сергеевич".into(),
            position: "Специалист НК".into(),
            department: "Лаборатория НК".into(),
            phone: "".into(),
            email: "ivanov@example.ru".into(),
            state,
            certs: valid_untils
                .iter()
                .map(|&vu| NkCert {
                    id: Uuid::new_v4(),
                    method: NkMethod::Uzk,
                    level: NkLevel::II,
                    cert_number: "УЗК-II".into(),
                    issued_at: vu - chrono::Duration::days(365),
                    valid_until: vu,
                    issued_by: "РОНКТД".into(),
                    objects: vec![],
                })
                .collect(),
            hired_at: d(2018, 1, 1),
        }
    }

    #[test]
    fn items_sorted_ascending_by_expiry() {
        let today = d(2026, 1, 1);
        let eqs = vec![
            equipment("Б", EquipmentState::Active, &[d(2026, 5, 1)]),
            equipment("А", EquipmentState::Active, &[d(2026, 1, 1)]),
        ];
        let items = build_schedule(&eqs, &[], today);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].valid_until, d(2026, 1, 1));
        assert_eq!(items[1].valid_until, d(2026, 5, 1));
    }

    #[test]
    fn cert_horizon_cutoff_at_180_days() {
        let today = d(2026, 1, 1);
        let included = today + chrono::Duration::days(179);
        let excluded = today + chrono::Duration::days(200);
        let sp = specialist(SpecialistState::Active, &[included, excluded]);
        let items = build_schedule(&[], &[sp], today);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].valid_until, included);
    }

    #[test]
    fn cert_at_exactly_180_days_is_included() {
        let today = d(2026, 1, 1);
        let boundary = today + chrono::Duration::days(180);
        let sp = specialist(SpecialistState::Active, &[boundary]);
        assert_eq!(build_schedule(&[], &[sp], today).len(), 1);
    }

    #[test]
    fn one_item_per_cert() {
        let today = d(2026, 1, 1);
        let sp = specialist(
            SpecialistState::Active,
            &[d(2026, 2, 1), d(2026, 3, 1), d(2026, 4, 1)],
        );
        assert_eq!(build_schedule(&[], &[sp], today).len(), 3);
    }

    #[test]
    fn repair_equipment_and_inactive_specialists_are_skipped() {
        let today = d(2026, 1, 1);
        let eqs = vec![equipment("Т", EquipmentState::Repair, &[d(2026, 2, 1)])];
        let sps = vec![specialist(SpecialistState::Inactive, &[d(2026, 2, 1)])];
        assert!(build_schedule(&eqs, &sps, today).is_empty());
    }

    #[test]
    fn equipment_without_verifications_contributes_nothing() {
        let today = d(2026, 1, 1);
        let eqs = vec![equipment("Т", EquipmentState::Active, &[])];
        assert!(build_schedule(&eqs, &[], today).is_empty());
    }

    #[test]
    fn overdue_equipment_stays_on_schedule() {
        let today = d(2026, 1, 1);
        let eqs = vec![equipment("Т", EquipmentState::Active, &[d(2025, 6, 1)])];
        let items = build_schedule(&eqs, &[], today);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].status, ScheduleStatus::Overdue);
        assert!(items[0].days_left < 0);
    }

    #[test]
    fn months_are_keyed_and_flagged() {
        let today = d(2026, 3, 15);
        let eqs = vec![
            equipment("А", EquipmentState::Active, &[d(2026, 2, 10)]),
            equipment("Б", EquipmentState::Active, &[d(2026, 3, 20)]),
            equipment("В", EquipmentState::Active, &[d(2026, 3, 25)]),
            equipment("Г", EquipmentState::Active, &[d(2026, 5, 1)]),
        ];
        let months = group_by_month(build_schedule(&eqs, &[], today), today);
        assert_eq!(months.len(), 3);
        assert_eq!(months[0].key, "2026-02");
        assert!(months[0].is_past);
        assert_eq!(months[1].key, "2026-03");
        assert!(months[1].is_current);
        assert_eq!(months[2].key, "2026-05");
        assert!(!months[2].is_current && !months[2].is_past);
        assert_eq!(months[1].items.len(), 2);
        assert!(months[1].items[0].valid_until <= months[1].items[1].valid_until);
    }

    #[test]
    fn deterministic_for_same_inputs() {
        let today = d(2026, 1, 1);
        let eqs = vec![
            equipment("А", EquipmentState::Active, &[d(2026, 2, 1)]),
            equipment("Б", EquipmentState::Active, &[d(2026, 2, 1)]),
        ];
        let a = build_schedule(&eqs, &[], today);
        let b = build_schedule(&eqs, &[], today);
        let names =
            |v: &[ScheduleItem]| v.iter().map(|i| i.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(&a), names(&b));
    }
}
