// Contract test for GET /api/business/sd/analytics/sales
//
// Validates the JSON envelope and the shape of every report section. Field names and types
// are what dashboard clients bind to, so each one is checked explicitly.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use serde_json::Value;

async fn quarter_report() -> TestResponse {
    get(&sales_uri("start=2025-01-01&end=2025-03-31")).await
}

#[actix_web::test]
async fn test_success_envelope() {
    let response = quarter_report().await;
    assert_ok(&response);

    let body = &response.body;
    assert_eq!(body["message"], "Sales analytics retrieved");
    assert!(body.get("errors").is_none(), "successful responses carry no errors");
    assert!(body["data"].is_object());
}

#[actix_web::test]
async fn test_report_top_level_fields() {
    let response = quarter_report().await;
    let data = &response.body["data"];

    for field in [
        "totalSale",
        "totalOrders",
        "period",
        "trend",
        "trendScale",
        "productShare",
        "topCustomers",
    ] {
        assert!(data.get(field).is_some(), "missing field {field}");
    }

    assert!(data["totalSale"].is_i64());
    assert!(data["totalOrders"].is_i64());
}

#[actix_web::test]
async fn test_period_shape() {
    let response = quarter_report().await;
    let period = &response.body["data"]["period"];

    assert_eq!(period["start"], "2025-01-01");
    assert_eq!(period["end"], "2025-03-31");
    assert_eq!(period["weekStart"], "2024-12-30");
    assert_eq!(period["weekEnd"], "2025-04-06");
    assert!(period["weekCount"].is_u64());
}

#[actix_web::test]
async fn test_trend_point_shape() {
    let response = quarter_report().await;
    let trend = response.body["data"]["trend"].as_array().unwrap();

    // First point is the ISO week that starts in December
    assert_eq!(trend[0]["year"], 2025);
    assert_eq!(trend[0]["month"], 12);
    assert_eq!(trend[0]["week"], 1);

    for point in trend {
        assert!(point["year"].is_i64());
        let month = point["month"].as_u64().unwrap();
        assert!((1..=12).contains(&month));
        let week = point["week"].as_u64().unwrap();
        assert!((1..=53).contains(&week));
        assert!(point["sale"].as_i64().unwrap() > 0);
        assert!(point["orderCount"].as_i64().unwrap() > 0);
    }
}

#[actix_web::test]
async fn test_trend_scale_shape() {
    let response = quarter_report().await;
    let scale = &response.body["data"]["trendScale"];

    for axis in ["sale", "orderCount"] {
        let min = scale[axis]["min"].as_i64().unwrap();
        let max = scale[axis]["max"].as_i64().unwrap();
        assert!(min < max, "{axis} axis must have a positive span");
    }
}

#[actix_web::test]
async fn test_product_share_shape() {
    let response = quarter_report().await;
    let data = &response.body["data"];
    let shares = data["productShare"].as_array().unwrap();

    assert_eq!(shares.len(), 6);
    assert_eq!(shares[5]["productCode"], "ETC");
    assert_eq!(shares[5]["productName"], "Others");

    let codes: Vec<&str> = shares[..5]
        .iter()
        .map(|s| s["productCode"].as_str().unwrap())
        .collect();
    assert_eq!(codes, ["PRD-001", "PRD-002", "PRD-003", "PRD-004", "PRD-005"]);

    let total_share: f64 = shares.iter().map(|s| s["saleShare"].as_f64().unwrap()).sum();
    assert_eq!(total_share, 100.0);

    let total_sale = data["totalSale"].as_i64().unwrap();
    for share in shares {
        let sale = share["sale"].as_i64().unwrap();
        assert!(sale >= 0 && sale <= total_sale);
    }
}

#[actix_web::test]
async fn test_top_customers_shape() {
    let response = quarter_report().await;
    let customers = response.body["data"]["topCustomers"].as_array().unwrap();

    assert_eq!(customers.len(), 10);

    let actives: Vec<bool> = customers
        .iter()
        .map(|c| c["active"].as_bool().unwrap())
        .collect();
    assert_eq!(
        actives,
        [true, false, true, false, true, false, true, false, true, false]
    );

    for customer in customers {
        assert!(customer["customerCode"].as_str().unwrap().starts_with("CUS-"));
        assert!(customer["customerName"].is_string());
        assert!(customer["orderCount"].as_i64().unwrap() >= 1);
        assert!(customer["sale"].as_i64().unwrap() >= 0);
    }
}

#[actix_web::test]
async fn test_error_envelope_shape() {
    let response = get(&sales_uri("start=2025-01-01")).await;
    assert_bad_request(&response, "MISSING_RANGE");

    let body = &response.body;
    assert_eq!(body["status"], 400);
    assert!(matches!(body["errors"], Value::Object(_)));
}
