//! Expiry classification and derived entity statuses
//!
//! Pure functions taking the record and the reference date explicitly, so
//! the same rules are callable from handlers, the schedule aggregator and
//! tests without an implicit clock.

use chrono::NaiveDate;

use crate::models::{
    enums::{EquipmentState, EquipmentStatus, ExpiryStatus, SpecialistState, SpecialistStatus},
    equipment::{Equipment, Verification},
    specialist::NkSpecialist,
};

/// Certificates within this many days of expiry are "expiring"
pub const EXPIRING_WINDOW_DAYS: i64 = 60;

/// The schedule surfaces only certifications due within this horizon
pub const SCHEDULE_HORIZON_DAYS: i64 = 180;

/// Calendar days from `today` until `target`; negative once past.
/// A target date equal to `today` counts as 0 days left.
pub fn days_until(target: NaiveDate, today: NaiveDate) -> i64 {
    (target - today).num_days()
}

/// Tri-state classification of a days-left count
pub fn classify_days(days: i64) -> ExpiryStatus {
    if days < 0 {
        ExpiryStatus::Overdue
    } else if days <= EXPIRING_WINDOW_DAYS {
        ExpiryStatus::Expiring
    } else {
        ExpiryStatus::Valid
    }
}

/// Classify a single expiry date against a reference date
pub fn classify_date(valid_until: NaiveDate, today: NaiveDate) -> ExpiryStatus {
    classify_days(days_until(valid_until, today))
}

/// The verification with the most distant expiry date, if any
pub fn last_verification(equipment: &Equipment) -> Option<&Verification> {
    equipment.verifications.iter().max_by_key(|v| v.valid_until)
}

/// Days until the latest verification of an equipment record expires
pub fn equipment_days_left(equipment: &Equipment, today: NaiveDate) -> Option<i64> {
    last_verification(equipment).map(|v| days_until(v.valid_until, today))
}

/// Derived equipment status.
///
/// Repair and Decommissioned manual states always win. Without
/// verifications the equipment is Active (no data, no concern); otherwise
/// the single verification with the latest expiry is classified.
pub fn equipment_status(equipment: &Equipment, today: NaiveDate) -> EquipmentStatus {
    match equipment.state {
        EquipmentState::Repair => return EquipmentStatus::Repair,
        EquipmentState::Decommissioned => return EquipmentStatus::Decommissioned,
        EquipmentState::Active => {}
    }
    let Some(last) = last_verification(equipment) else {
        return EquipmentStatus::Active;
    };
    match classify_date(last.valid_until, today) {
        ExpiryStatus::Overdue => EquipmentStatus::Overdue,
        ExpiryStatus::Expiring => EquipmentStatus::Expiring,
        ExpiryStatus::Valid => EquipmentStatus::Active,
    }
}

/// Derived specialist status.
///
/// An Inactive manual state always wins. Otherwise the status is the worst
/// across all certifications: any expired cert makes the specialist
/// Expired, any expiring cert makes them Expiring.
pub fn specialist_status(specialist: &NkSpecialist, today: NaiveDate) -> SpecialistStatus {
    if specialist.state == SpecialistState::Inactive {
        return SpecialistStatus::Inactive;
    }
    let mut worst = SpecialistStatus::Active;
    for cert in &specialist.certs {
        match classify_date(cert.valid_until, today) {
            ExpiryStatus::Overdue => return SpecialistStatus::Expired,
            ExpiryStatus::Expiring => worst = SpecialistStatus::Expiring,
            ExpiryStatus::Valid => {}
        }
    }
    worst
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        enums::{EquipCategory, NkLevel, NkMethod, OwnerType},
        specialist::NkCert,
    };
    use uuid::Uuid;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn equipment_with(state: EquipmentState, valid_untils: &[NaiveDate]) -> Equipment {
        Equipment {
            id: Uuid::new_v4(),
            name: "Толщиномер".into(),
            model: "38DL".into(),
            serial: "S-1".into(),
            inventory_no: "ОС-1".into(),
            category: EquipCategory::Uzt,
            manufacturer: "Olympus".into(),
            manufacture_year: 2019,
            owner: OwnerType::Own,
            department: "Лаборатория НК".into(),
            responsible_person: "Смирнов А.В.".into(),
            location: "204".into(),
            state,
            verifications: valid_untils
                .iter()
                .map(|&vu| Verification {
                    id: Uuid::new_v4(),
                    date: vu - chrono::Duration::days(365),
                    valid_until: vu,
                    cert_number: "СА/12".into(),
                    lab: "Ростест".into(),
                    next_date: None,
                })
                .collect(),
            notes: None,
        }
    }

    fn specialist_with(state: SpecialistState, valid_untils: &[NaiveDate]) -> NkSpecialist {
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
    fn classifier_boundaries() {
        assert_eq!(classify_days(-1), ExpiryStatus::Overdue);
        assert_eq!(classify_days(0), ExpiryStatus::Expiring);
        assert_eq!(classify_days(60), ExpiryStatus::Expiring);
        assert_eq!(classify_days(61), ExpiryStatus::Valid);
    }

    #[test]
    fn days_until_counts_calendar_days() {
        let today = d(2026, 3, 1);
        assert_eq!(days_until(d(2026, 3, 1), today), 0);
        assert_eq!(days_until(d(2026, 3, 2), today), 1);
        assert_eq!(days_until(d(2026, 2, 28), today), -1);
    }

    #[test]
    fn repair_state_wins_over_overdue_verification() {
        let today = d(2026, 3, 1);
        let eq = equipment_with(EquipmentState::Repair, &[d(2025, 1, 1)]);
        assert_eq!(equipment_status(&eq, today), EquipmentStatus::Repair);
    }

    #[test]
    fn equipment_without_verifications_is_active() {
        let eq = equipment_with(EquipmentState::Active, &[]);
        assert_eq!(equipment_status(&eq, d(2026, 3, 1)), EquipmentStatus::Active);
    }

    #[test]
    fn equipment_uses_latest_expiry_not_first() {
        let today = d(2026, 3, 1);
        // One verification long overdue, a newer one far in the future.
        let eq = equipment_with(EquipmentState::Active, &[d(2025, 1, 1), d(2027, 1, 1)]);
        assert_eq!(equipment_status(&eq, today), EquipmentStatus::Active);
    }

    #[test]
    fn equipment_expiring_within_window() {
        let today = d(2026, 3, 1);
        let eq = equipment_with(EquipmentState::Active, &[d(2026, 4, 1)]);
        assert_eq!(equipment_status(&eq, today), EquipmentStatus::Expiring);
    }

    #[test]
    fn specialist_worst_of_regardless_of_order() {
        let today = d(2026, 3, 1);
        let expired = d(2025, 1, 1);
        let valid = d(2027, 1, 1);
        let sp = specialist_with(SpecialistState::Active, &[expired, valid]);
        assert_eq!(specialist_status(&sp, today), SpecialistStatus::Expired);
        let sp = specialist_with(SpecialistState::Active, &[valid, expired]);
        assert_eq!(specialist_status(&sp, today), SpecialistStatus::Expired);
    }

    #[test]
    fn specialist_expiring_beats_active() {
        let today = d(2026, 3, 1);
        let sp = specialist_with(SpecialistState::Active, &[d(2027, 1, 1), d(2026, 4, 1)]);
        assert_eq!(specialist_status(&sp, today), SpecialistStatus::Expiring);
    }

    #[test]
    fn inactive_state_wins() {
        let today = d(2026, 3, 1);
        let sp = specialist_with(SpecialistState::Inactive, &[d(2025, 1, 1)]);
        assert_eq!(specialist_status(&sp, today), SpecialistStatus::Inactive);
    }

    #[test]
    fn specialist_without_certs_is_active() {
        let sp = specialist_with(SpecialistState::Active, &[]);
        assert_eq!(specialist_status(&sp, d(2026, 3, 1)), SpecialistStatus::Active);
    }
}
