//! Demo seed data, loaded once at startup

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{
    enums::{
        EquipCategory, EquipmentState, ExpertiseStatus, NkLevel, NkMethod, OwnerType,
        RegistryStatus, RtnStatus, SpecialistState, TdStatus,
    },
    equipment::{Equipment, Verification},
    expertise::Expertise,
    registry::RegistryEntry,
    specialist::{NkCert, NkSpecialist},
    td_report::{NkProtocol, TdReport},
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn verification(
    date_: NaiveDate,
    valid_until: NaiveDate,
    cert_number: &str,
    lab: &str,
    next_date: Option<NaiveDate>,
) -> Verification {
    Verification {
        id: Uuid::new_v4(),
        date: date_,
        valid_until,
        cert_number: cert_number.to_string(),
        lab: lab.to_string(),
        next_date,
    }
}

fn cert(
    method: NkMethod,
    level: NkLevel,
    cert_number: &str,
    issued_at: NaiveDate,
    valid_until: NaiveDate,
    issued_by: &str,
    objects: &[&str],
) -> NkCert {
    NkCert {
        id: Uuid::new_v4(),
        method,
        level,
        cert_number: cert_number.to_string(),
        issued_at,
        valid_until,
        issued_by: issued_by.to_string(),
        objects: objects.iter().map(|o| o.to_string()).collect(),
    }
}

pub fn equipment() -> Vec<Equipment> {
    vec![
        Equipment {
            id: Uuid::new_v4(),
            name: "Толщиномер ультразвуковой".into(),
            model: "Olympus 38DL Plus".into(),
            serial: "KY4021337".into(),
            inventory_no: "ОС-00123".into(),
            category: EquipCategory::Uzt,
            manufacturer: "Olympus NDT".into(),
            manufacture_year: 2019,
            owner: OwnerType::Own,
            department: "Лаборатория НК".into(),
            responsible_person: "Смирнов А.В.".into(),
            location: "Комната 204".into(),
            state: EquipmentState::Active,
            verifications: vec![verification(
                date(2024, 3, 15),
                date(2026, 3, 15),
                "СА/12-2024-1045",
                "ФБУ «Ростест-Москва»",
                Some(date(2026, 3, 1)),
            )],
            notes: Some("Комплект с ПЭП М112-М65-К10-005".into()),
        },
        Equipment {
            id: Uuid::new_v4(),
            name: "Дефектоскоп ультразвуковой".into(),
            model: "SONOCON B".into(),
            serial: "SB-2021-0487".into(),
            inventory_no: "ОС-00124".into(),
            category: EquipCategory::Uzk,
            manufacturer: "АКС НПО".into(),
            manufacture_year: 2021,
            owner: OwnerType::Own,
            department: "Лаборатория НК".into(),
            responsible_person: "Петров И.С.".into(),
            location: "Комната 204".into(),
            state: EquipmentState::Active,
            verifications: vec![
                verification(
                    date(2023, 8, 10),
                    date(2025, 8, 10),
                    "СА/12-2023-0782",
                    "ФБУ «Ростест-Москва»",
                    None,
                ),
                verification(
                    date(2025, 2, 10),
                    date(2026, 4, 10),
                    "СА/12-2025-0341",
                    "ФБУ «Ростест-Москва»",
                    Some(date(2026, 3, 20)),
                ),
            ],
            notes: None,
        },
        Equipment {
            id: Uuid::new_v4(),
            name: "Магнитный дефектоскоп".into(),
            model: "МИНИМАГ-01".into(),
            serial: "MM-0319-1102".into(),
            inventory_no: "ОС-00125".into(),
            category: EquipCategory::Mpd,
            manufacturer: "Константа-2".into(),
            manufacture_year: 2018,
            owner: OwnerType::Own,
            department: "Участок МПД".into(),
            responsible_person: "Козлов Д.Р.".into(),
            location: "Склад оборудования".into(),
            state: EquipmentState::Active,
            verifications: vec![verification(
                date(2023, 1, 20),
                date(2025, 1, 20),
                "СА/07-2023-0112",
                "ФБУ «Ростест-СПб»",
                None,
            )],
            notes: Some("Требуется внеплановая поверка".into()),
        },
        Equipment {
            id: Uuid::new_v4(),
            name: "Твердомер ультразвуковой".into(),
            model: "МЕТ-У1".into(),
            serial: "MU-2020-0772".into(),
            inventory_no: "ОС-00128".into(),
            category: EquipCategory::Uzt,
            manufacturer: "Метаком".into(),
            manufacture_year: 2020,
            owner: OwnerType::Own,
            department: "Участок входного контроля".into(),
            responsible_person: "Николаева О.К.".into(),
            location: "Комната 105".into(),
            state: EquipmentState::Repair,
            verifications: vec![verification(
                date(2023, 6, 5),
                date(2025, 6, 5),
                "СА/12-2023-1177",
                "ФБУ «Ростест-Москва»",
                None,
            )],
            notes: Some("Отправлен в сервисный центр, ожидаемый возврат — март 2026".into()),
        },
    ]
}

pub fn specialists() -> Vec<NkSpecialist> {
    vec![
        NkSpecialist {
            id: Uuid::new_v4(),
            last_name: "Иванов".into(),
            first_name: "Павел".into(),
            patronymic: "Сергеевич".into(),
            position: "Ведущий специалист НК".into(),
            department: "Лаборатория НК".into(),
            phone: "+7 (912) 345-67-89".into(),
            email: "ivanov.ps@expertlab.ru".into(),
            state: SpecialistState::Active,
            certs: vec![
                cert(
                    NkMethod::Uzk,
                    NkLevel::II,
                    "УЗК-II-2021-00432",
                    date(2021, 6, 10),
                    date(2026, 6, 10),
                    "РОНКТД",
                    &["Трубопроводы", "Сосуды давления", "Металлоконструкции"],
                ),
                cert(
                    NkMethod::Uzt,
                    NkLevel::II,
                    "УЗТ-II-2021-00433",
                    date(2021, 6, 10),
                    date(2026, 6, 10),
                    "РОНКТД",
                    &["Трубопроводы", "Резервуары"],
                ),
                cert(
                    NkMethod::Vik,
                    NkLevel::III,
                    "ВИК-III-2019-00218",
                    date(2019, 9, 1),
                    date(2024, 9, 1),
                    "РОНКТД",
                    &["Все объекты ОПО"],
                ),
            ],
            hired_at: date(2018, 3, 15),
        },
        NkSpecialist {
            id: Uuid::new_v4(),
            last_name: "Соколов".into(),
            first_name: "Дмитрий".into(),
            patronymic: "Викторович".into(),
            position: "Специалист НК".into(),
            department: "Лаборатория НК".into(),
            phone: "+7 (912) 456-78-90".into(),
            email: "sokolov.dv@expertlab.ru".into(),
            state: SpecialistState::Active,
            certs: vec![
                cert(
                    NkMethod::Mpd,
                    NkLevel::II,
                    "МПД-II-2022-00156",
                    date(2022, 3, 20),
                    date(2027, 3, 20),
                    "РОНКТД",
                    &["Сосуды давления", "Металлоконструкции"],
                ),
                cert(
                    NkMethod::Cd,
                    NkLevel::II,
                    "ЦД-II-2022-00157",
                    date(2022, 3, 20),
                    date(2027, 3, 20),
                    "РОНКТД",
                    &["Трубопроводы", "Сосуды давления"],
                ),
            ],
            hired_at: date(2020, 8, 1),
        },
        NkSpecialist {
            id: Uuid::new_v4(),
            last_name: "Нефёдов".into(),
            first_name: "Михаил".into(),
            patronymic: "Александрович".into(),
            position: "Специалист НК (РГК)".into(),
            department: "Лаборатория НК".into(),
            phone: "+7 (913) 567-89-01".into(),
            email: "nefedov.ma@expertlab.ru".into(),
            state: SpecialistState::Active,
            certs: vec![
                cert(
                    NkMethod::Rgk,
                    NkLevel::II,
                    "РГК-II-2021-00089",
                    date(2021, 4, 15),
                    date(2026, 4, 15),
                    "РОСТЕХНАДЗОР",
                    &["Трубопроводы", "Сосуды давления"],
                ),
                cert(
                    NkMethod::Vik,
                    NkLevel::I,
                    "ВИК-I-2026-00031",
                    date(2026, 1, 10),
                    date(2026, 4, 10),
                    "РОНКТД",
                    &["Трубопроводы"],
                ),
            ],
            hired_at: date(2019, 11, 10),
        },
    ]
}

pub fn expertises() -> Vec<Expertise> {
    vec![
        Expertise {
            id: Uuid::new_v4(),
            number: "ЭПБ-2024-041".into(),
            object_name: "Сосуд под давлением V-101".into(),
            object_type: "Сосуд под давлением".into(),
            customer: "АО «НефтеХим»".into(),
            status: ExpertiseStatus::Review,
            created_at: date(2026, 1, 15),
            deadline: date(2026, 3, 3),
            reg_number: None,
            expert: "Иванов И.И.".into(),
        },
        Expertise {
            id: Uuid::new_v4(),
            number: "ЭПБ-2024-038".into(),
            object_name: "Трубопровод технологический Ду200".into(),
            object_type: "Трубопровод".into(),
            customer: "ООО «ГазПром»".into(),
            status: ExpertiseStatus::Draft,
            created_at: date(2026, 1, 10),
            deadline: date(2026, 3, 10),
            reg_number: None,
            expert: "Иванов И.И.".into(),
        },
        Expertise {
            id: Uuid::new_v4(),
            number: "ЭПБ-2024-031".into(),
            object_name: "Насос центробежный НК-200".into(),
            object_type: "Насос".into(),
            customer: "АО «НефтеХим»".into(),
            status: ExpertiseStatus::Signed,
            created_at: date(2025, 12, 20),
            deadline: date(2026, 2, 20),
            reg_number: Some("РТН-2026-00412".into()),
            expert: "Иванов И.И.".into(),
        },
    ]
}

pub fn td_reports() -> Vec<TdReport> {
    vec![
        TdReport {
            id: Uuid::new_v4(),
            number: "ТД-2025-001".into(),
            title: "ТД трубопровода пара высокого давления".into(),
            object_name: "Паропровод Ду200 Ру40".into(),
            object_type: "Трубопровод".into(),
            opo: "А43-02341-0012".into(),
            status: TdStatus::Issued,
            created_at: date(2025, 3, 10),
            updated_at: date(2025, 3, 10),
            issued_at: Some(date(2025, 3, 20)),
            valid_until: Some(date(2029, 3, 20)),
            expert: "Карпов А.И.".into(),
            customer: "ПАО «Газпром нефть»".into(),
            protocols: vec![
                NkProtocol {
                    id: Uuid::new_v4(),
                    method: NkMethod::Uzt,
                    number: "УЗТ-2025-012".into(),
                    date: date(2025, 2, 15),
                    specialist: "Иванов П.С.".into(),
                    defects_found: false,
                    file_name: None,
                },
                NkProtocol {
                    id: Uuid::new_v4(),
                    method: NkMethod::Uzk,
                    number: "УЗК-2025-008".into(),
                    date: date(2025, 2, 16),
                    specialist: "Иванов П.С.".into(),
                    defects_found: true,
                    file_name: None,
                },
            ],
            residual_life: Some(8.4),
            defect_count: 2,
            conclusion: Some(
                "Техническое состояние объекта удовлетворительное. Эксплуатация возможна при соблюдении режима нагружения в соответствии с паспортными данными.".into(),
            ),
            recommendations: Some(
                "Выполнить ремонтно-восстановительные работы на дефектных участках. Повысить периодичность мониторинга коррозионного износа.".into(),
            ),
        },
        TdReport {
            id: Uuid::new_v4(),
            number: "ТД-2025-002".into(),
            title: "ТД сосуда давления (сепаратор)".into(),
            object_name: "Сепаратор С-101".into(),
            object_type: "Сосуд давления".into(),
            opo: "А43-02341-0012".into(),
            status: TdStatus::Approved,
            created_at: date(2025, 4, 5),
            updated_at: date(2025, 4, 5),
            issued_at: None,
            valid_until: None,
            expert: "Белов С.К.".into(),
            customer: "ПАО «Газпром нефть»".into(),
            protocols: vec![NkProtocol {
                id: Uuid::new_v4(),
                method: NkMethod::Mpd,
                number: "МПД-2025-005".into(),
                date: date(2025, 3, 29),
                specialist: "Соколов Д.В.".into(),
                defects_found: true,
                file_name: None,
            }],
            residual_life: Some(6.1),
            defect_count: 3,
            conclusion: Some(
                "Техническое состояние объекта удовлетворительное. Эксплуатация возможна при соблюдении режима нагружения в соответствии с паспортными данными.".into(),
            ),
            recommendations: Some(
                "Выполнить ремонтно-восстановительные работы на дефектных участках. Повысить периодичность мониторинга коррозионного износа.".into(),
            ),
        },
    ]
}

pub fn registry() -> Vec<RegistryEntry> {
    vec![
        RegistryEntry {
            id: Uuid::new_v4(),
            number: "ЭПБ-2024-031".into(),
            reg_number: Some("РТН-2026-00412".into()),
            object_name: "Насос центробежный НК-200".into(),
            object_type: "Насос".into(),
            customer: "АО «НефтеХим»".into(),
            expert: "Иванов И.И.".into(),
            signed_at: date(2026, 2, 20),
            valid_until: date(2031, 2, 20),
            status: RegistryStatus::Registered,
            rtn_status: RtnStatus::Registered,
            file_size: Some("2.4 МБ".into()),
        },
        RegistryEntry {
            id: Uuid::new_v4(),
            number: "ЭПБ-2024-041".into(),
            reg_number: None,
            object_name: "Сосуд под давлением V-101".into(),
            object_type: "Сосуд под давлением".into(),
            customer: "АО «НефтеХим»".into(),
            expert: "Иванов И.И.".into(),
            signed_at: date(2026, 2, 24),
            valid_until: date(2031, 2, 24),
            status: RegistryStatus::Signed,
            rtn_status: RtnStatus::Pending,
            file_size: Some("2.9 МБ".into()),
        },
        RegistryEntry {
            id: Uuid::new_v4(),
            number: "ЭПБ-2023-187".into(),
            reg_number: Some("РТН-2024-00128".into()),
            object_name: "Трубопровод пара Ду100".into(),
            object_type: "Трубопровод".into(),
            customer: "ПАО «Газпром»".into(),
            expert: "Сидорова Е.А.".into(),
            signed_at: date(2024, 3, 10),
            valid_until: date(2029, 3, 10),
            status: RegistryStatus::Registered,
            rtn_status: RtnStatus::Registered,
            file_size: Some("4.2 МБ".into()),
        },
    ]
}
