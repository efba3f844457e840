//! CSV export
//!
//! Byte contract shared by every export: UTF-8 with a BOM prefix,
//! semicolon delimiter, every field wrapped in double quotes, header row
//! first, rows joined by `\n`. Russian status labels live here — the
//! presentation mapping for the domain-pure status enums.

use crate::models::{
    enums::{RegistryStatus, TdStatus},
    registry::RegistryEntry,
    td_report::TdReport,
};

const BOM: char = '\u{FEFF}';

/// Russian label of a registry status
pub fn registry_status_label(status: RegistryStatus) -> &'static str {
    match status {
        RegistryStatus::Signed => "Подписан",
        RegistryStatus::Registered => "Зарег. РТН",
        RegistryStatus::Rejected => "Отклонён",
        RegistryStatus::Expired => "Истёк",
    }
}

/// Russian label of a TD report status
pub fn td_status_label(status: TdStatus) -> &'static str {
    match status {
        TdStatus::Draft => "Черновик",
        TdStatus::Review => "На проверке",
        TdStatus::Approved => "Согласован",
        TdStatus::Issued => "Выдан",
        TdStatus::Rejected => "Отклонён",
    }
}

fn format_row<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|f| format!("\"{}\"", f.as_ref()))
        .collect::<Vec<_>>()
        .join(";")
}

/// Assemble a CSV document from a header and data rows
pub fn to_csv(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format_row(header));
    for row in rows {
        lines.push(format_row(row));
    }
    format!("{}{}", BOM, lines.join("\n"))
}

/// Registry export, one row per entry
pub fn registry_csv(entries: &[RegistryEntry]) -> String {
    let header = [
        "№ Экспертизы",
        "Рег. номер РТН",
        "Объект",
        "Тип",
        "Заказчик",
        "Эксперт",
        "Дата подписания",
        "Действителен до",
        "Статус",
    ];
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|r| {
            vec![
                r.number.clone(),
                r.reg_number.clone().unwrap_or_else(|| "—".to_string()),
                r.object_name.clone(),
                r.object_type.clone(),
                r.customer.clone(),
                r.expert.clone(),
                r.signed_at.to_string(),
                r.valid_until.to_string(),
                registry_status_label(r.status).to_string(),
            ]
        })
        .collect();
    to_csv(&header, &rows)
}

/// TD-report export, one row per report
pub fn td_reports_csv(reports: &[TdReport]) -> String {
    let header = [
        "Номер",
        "Наименование",
        "Объект",
        "Тип",
        "ОПО",
        "Заказчик",
        "Статус",
        "Дата создания",
        "Дефекты",
        "Ресурс, лет",
    ];
    let rows: Vec<Vec<String>> = reports
        .iter()
        .map(|r| {
            vec![
                r.number.clone(),
                r.title.clone(),
                r.object_name.clone(),
                r.object_type.clone(),
                r.opo.clone(),
                r.customer.clone(),
                td_status_label(r.status).to_string(),
                r.created_at.to_string(),
                r.defect_count.to_string(),
                r.residual_life.map(|v| v.to_string()).unwrap_or_default(),
            ]
        })
        .collect();
    to_csv(&header, &rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::RtnStatus;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn entry(number: &str, reg_number: Option<&str>) -> RegistryEntry {
        RegistryEntry {
            id: Uuid::new_v4(),
            number: number.into(),
            reg_number: reg_number.map(|s| s.to_string()),
            object_name: "Насос центробежный НК-200".into(),
            object_type: "Насос".into(),
            customer: "АО «НефтеХим»".into(),
            expert: "Иванов И.И.".into(),
            signed_at: NaiveDate::from_ymd_opt(2026, 2, 20).unwrap(),
            valid_until: NaiveDate::from_ymd_opt(2031, 2, 20).unwrap(),
            status: RegistryStatus::Registered,
            rtn_status: RtnStatus::Registered,
            file_size: None,
        }
    }

    /// Split an exported document back into unquoted fields
    fn parse(csv: &str) -> Vec<Vec<String>> {
        let body = csv.strip_prefix('\u{FEFF}').expect("BOM prefix");
        body.lines()
            .map(|line| {
                line.split(';')
                    .map(|f| f.trim_matches('"').to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn csv_starts_with_bom_and_header() {
        let csv = registry_csv(&[]);
        assert!(csv.starts_with('\u{FEFF}'));
        assert!(csv.contains("\"№ Экспертизы\";\"Рег. номер РТН\""));
    }

    #[test]
    fn registry_round_trip() {
        let entries = vec![entry("ЭПБ-2024-031", Some("РТН-2026-00412")), entry("ЭПБ-2024-041", None)];
        let parsed = parse(&registry_csv(&entries));
        // Header plus one row per entry
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].len(), 9);
        assert_eq!(parsed[1][0], "ЭПБ-2024-031");
        assert_eq!(parsed[1][1], "РТН-2026-00412");
        assert_eq!(parsed[1][8], "Зарег. РТН");
        // Missing registration number exports as an em dash
        assert_eq!(parsed[2][1], "—");
        assert_eq!(parsed[2][6], "2026-02-20");
    }

    #[test]
    fn rows_joined_by_newline_without_trailing() {
        let csv = registry_csv(&[entry("ЭПБ-1", None)]);
        assert!(!csv.ends_with('\n'));
        assert_eq!(csv.matches('\n').count(), 1);
    }
}
