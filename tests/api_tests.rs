//! API integration tests
//!
//! These tests expect a running server seeded with the default demo data.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_list_equipment() {
    let client = Client::new();

    let response = client
        .get(format!("{}/equipment", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let items = body.as_array().expect("Expected an array");
    assert!(!items.is_empty());
    // Every row carries a derived status and days_left
    for item in items {
        assert!(item["status"].is_string());
        assert!(item["days_left"].is_number() || item["days_left"].is_null());
    }
}

#[tokio::test]
#[ignore]
async fn test_create_and_delete_equipment() {
    let client = Client::new();

    // Create equipment
    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .json(&json!({
            "name": "Толщиномер УТ-111",
            "model": "УТ-111",
            "serial": "2026-00451",
            "inventory_no": "ИНВ-0451",
            "category": "УЗТ",
            "manufacturer": "НПО «Интротест»",
            "manufacture_year": 2023,
            "owner": "own",
            "department": "ЛНК",
            "responsible_person": "Сидоров А. А.",
            "location": "Лаборатория, стеллаж 2"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let id = body["id"].as_str().expect("No equipment ID").to_string();
    // No verifications yet: active with no deadline
    assert_eq!(body["status"], "active");
    assert!(body["days_left"].is_null());

    // Delete equipment
    let response = client
        .delete(format!("{}/equipment/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_equipment_status_with_date_override() {
    let client = Client::new();

    // Create equipment, attach a verification, then probe the classifier
    // at three reference dates around the expiry boundary.
    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .json(&json!({
            "name": "Дефектоскоп УД2-70",
            "model": "УД2-70",
            "serial": "2026-00099",
            "inventory_no": "ИНВ-0099",
            "category": "УЗК",
            "manufacturer": "НПО «Интротест»",
            "manufacture_year": 2021,
            "owner": "own",
            "department": "ЛНК",
            "responsible_person": "Петров В. В.",
            "location": "Лаборатория, стеллаж 1"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let id = body["id"].as_str().expect("No equipment ID").to_string();

    let response = client
        .post(format!("{}/equipment/{}/verifications", BASE_URL, id))
        .json(&json!({
            "date": "2026-01-10",
            "valid_until": "2026-06-30",
            "cert_number": "ПВ-2026-099",
            "lab": "ЛНК «Диагностика»"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    // Well before the window: valid
    let body: Value = client
        .get(format!("{}/equipment/{}?date=2026-02-01", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(body["status"], "active");

    // Within 60 days of expiry: expiring
    let body: Value = client
        .get(format!("{}/equipment/{}?date=2026-06-01", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(body["status"], "expiring");
    assert_eq!(body["days_left"], 29);

    // Past expiry: overdue
    let body: Value = client
        .get(format!("{}/equipment/{}?date=2026-07-01", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(body["status"], "overdue");

    let _ = client
        .delete(format!("{}/equipment/{}", BASE_URL, id))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_list_specialists() {
    let client = Client::new();

    let response = client
        .get(format!("{}/specialists", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let items = body.as_array().expect("Expected an array");
    assert!(!items.is_empty());
    for item in items {
        assert!(item["status"].is_string());
        assert!(item["certs"].is_array());
    }
}

#[tokio::test]
#[ignore]
async fn test_create_equipment_validation_error() {
    let client = Client::new();

    // Empty name must be rejected
    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .json(&json!({
            "name": "",
            "model": "X",
            "serial": "X",
            "inventory_no": "X",
            "category": "Прочее",
            "manufacturer": "X",
            "manufacture_year": 2020,
            "owner": "own",
            "department": "ЛНК",
            "responsible_person": "Иванов И. И.",
            "location": "Лаборатория"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["code"].is_number());
    assert!(body["message"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_get_missing_equipment() {
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/equipment/00000000-0000-0000-0000-000000000000",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_schedule() {
    let client = Client::new();

    let response = client
        .get(format!("{}/schedule", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let items = body.as_array().expect("Expected an array");

    // Sorted by deadline, ascending
    let deadlines: Vec<&str> = items
        .iter()
        .map(|i| i["valid_until"].as_str().expect("Missing valid_until"))
        .collect();
    let mut sorted = deadlines.clone();
    sorted.sort();
    assert_eq!(deadlines, sorted);
}

#[tokio::test]
#[ignore]
async fn test_schedule_months() {
    let client = Client::new();

    let response = client
        .get(format!("{}/schedule/months", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    for month in body.as_array().expect("Expected an array") {
        assert!(month["key"].is_string());
        assert!(month["items"].is_array());
    }
}

#[tokio::test]
#[ignore]
async fn test_residual_life_calculator() {
    let client = Client::new();

    let response = client
        .post(format!("{}/calc/residual-life", BASE_URL))
        .json(&json!({
            "wall_actual": 8.2,
            "wall_min": 4.5,
            "corrosion_rate": 0.15,
            "service_start": 2005,
            "last_inspection": 2024,
            "design_life": 20
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let residual = body["residual_life"].as_f64().expect("No residual_life");
    assert!((residual - 24.666).abs() < 0.001);
    assert_eq!(body["next_inspection"], 4);
    assert_eq!(body["verdict"], "ok");
    assert!(body["predicted_thickness"].is_array());
}

#[tokio::test]
#[ignore]
async fn test_residual_life_rejects_zero_rate() {
    let client = Client::new();

    let response = client
        .post(format!("{}/calc/residual-life", BASE_URL))
        .json(&json!({
            "wall_actual": 8.2,
            "wall_min": 4.5,
            "corrosion_rate": 0.0,
            "service_start": 2005,
            "last_inspection": 2024,
            "design_life": 20
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);
}

#[tokio::test]
#[ignore]
async fn test_wall_thickness_calculator() {
    let client = Client::new();

    let response = client
        .post(format!("{}/calc/wall-thickness", BASE_URL))
        .json(&json!({
            "pressure": 1.6,
            "diameter": 200.0,
            "allow_stress": 147.0,
            "weld_coeff": 1.0,
            "add_allowance": 1.0
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["rounded_thickness"], 2.5);
    assert_eq!(body["verdict"], "ok");
}

#[tokio::test]
#[ignore]
async fn test_corrosion_rate_calculator() {
    let client = Client::new();

    let response = client
        .post(format!("{}/calc/corrosion-rate", BASE_URL))
        .json(&json!([
            {"year": 2021, "thickness": 10.0},
            {"year": 2024, "thickness": 6.7},
            {"year": null, "thickness": null}
        ]))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let rate = body["rate"].as_f64().expect("No rate");
    assert!((rate - 1.1).abs() < 1e-9);
    assert_eq!(body["trend"], "high");
}

#[tokio::test]
#[ignore]
async fn test_corrosion_rate_rejects_single_row() {
    let client = Client::new();

    let response = client
        .post(format!("{}/calc/corrosion-rate", BASE_URL))
        .json(&json!([
            {"year": 2021, "thickness": 10.0}
        ]))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);
}

#[tokio::test]
#[ignore]
async fn test_registry_export_csv() {
    let client = Client::new();

    let response = client
        .get(format!("{}/registry/export", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    assert!(response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("text/csv"))
        .unwrap_or(false));

    let text = response.text().await.expect("Failed to read body");
    assert!(text.starts_with('\u{FEFF}'));
    let header = text.lines().next().expect("Empty CSV");
    assert!(header.contains(';'));
    assert!(header.contains("№ Экспертизы"));
}

#[tokio::test]
#[ignore]
async fn test_td_reports_export_csv() {
    let client = Client::new();

    let response = client
        .get(format!("{}/td-reports/export", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let text = response.text().await.expect("Failed to read body");
    assert!(text.starts_with('\u{FEFF}'));
    assert!(!text.ends_with('\n'));
}

#[tokio::test]
#[ignore]
async fn test_duplicate_registry_number_conflict() {
    let client = Client::new();

    let entry = json!({
        "number": "ЭПБ-ТЕСТ-0001",
        "object_name": "Котёл Е-1,0-0,9",
        "object_type": "Котельное оборудование",
        "customer": "ООО «ТеплоСервис»",
        "expert": "Смирнова О. В.",
        "signed_at": "2026-02-10",
        "valid_until": "2031-02-10"
    });

    let response = client
        .post(format!("{}/registry", BASE_URL))
        .json(&entry)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let id = body["id"].as_str().expect("No entry ID").to_string();

    let response = client
        .post(format!("{}/registry", BASE_URL))
        .json(&entry)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);

    let _ = client
        .delete(format!("{}/registry/{}", BASE_URL, id))
        .send()
        .await;
}
