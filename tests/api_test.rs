use actix_web::{App, test, web};
use httpmock::prelude::*;
use serde_json::json;
use std::path::PathBuf;

use frizer_proxy_backend::config::Config;
use frizer_proxy_backend::models::appointments::AvailabilityMap;
use frizer_proxy_backend::routes;
use frizer_proxy_backend::store::AppointmentStore;

fn test_config(provider_url: String, store_path: Option<PathBuf>) -> Config {
    Config {
        provider_url,
        target_year: 2025,
        bind_addr: "127.0.0.1".to_string(),
        port: 0,
        store_path,
    }
}

macro_rules! test_app {
    ($config:expr, $store:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($config))
                .app_data(web::Data::new($store))
                .configure(routes::init),
        )
        .await
    };
}

#[actix_web::test]
async fn get_rewrites_provider_years() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/frizer");
        then.status(200)
            .json_body(json!({"5.3.2021": ["10:00"], "12.11.2022": ["09:30", "14:00"]}));
    });

    let app = test_app!(
        test_config(server.url("/frizer"), None),
        AppointmentStore::load(None).unwrap()
    );

    let req = test::TestRequest::get().uri("/api/frizer").to_request();
    let body: AvailabilityMap = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["05.03.2025"], vec!["10:00"]);
    assert_eq!(body["12.11.2025"], vec!["09:30", "14:00"]);
}

#[actix_web::test]
async fn get_reports_provider_failure_as_500() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/frizer");
        then.status(503);
    });

    let app = test_app!(
        test_config(server.url("/frizer"), None),
        AppointmentStore::load(None).unwrap()
    );

    let req = test::TestRequest::get().uri("/api/frizer").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Failed to fetch data from the external API.");
}

#[actix_web::test]
async fn get_reports_malformed_provider_keys_as_500() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/frizer");
        then.status(200).json_body(json!({"garbage": ["10:00"]}));
    });

    let app = test_app!(
        test_config(server.url("/frizer"), None),
        AppointmentStore::load(None).unwrap()
    );

    let req = test::TestRequest::get().uri("/api/frizer").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);
}

#[actix_web::test]
async fn post_rejects_missing_fields() {
    let server = MockServer::start();
    let app = test_app!(
        test_config(server.url("/frizer"), None),
        AppointmentStore::load(None).unwrap()
    );

    for body in [
        json!({"date": "2025-06-01"}),
        json!({"time": "15:00"}),
        json!({"date": "", "time": "15:00"}),
        json!({}),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/frizer")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Date and time are required.");
    }
}

#[actix_web::test]
async fn post_then_get_merges_submission_into_provider_data() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/frizer");
        then.status(200)
            .json_body(json!({"01.06.2021": ["10:00", "15:00"]}));
    });

    let app = test_app!(
        test_config(server.url("/frizer"), None),
        AppointmentStore::load(None).unwrap()
    );

    for _ in 0..2 {
        // Submitted twice to confirm the duplicate changes nothing.
        let req = test::TestRequest::post()
            .uri("/api/frizer")
            .set_json(json!({"date": "2025-06-01", "time": "15:00"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Appointment submitted successfully.");
    }

    let req = test::TestRequest::post()
        .uri("/api/frizer")
        .set_json(json!({"date": "2025-06-01", "time": "16:00"}))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/api/frizer").to_request();
    let body: AvailabilityMap = test::call_and_read_body_json(&app, req).await;

    // Provider slots first, then the one genuinely new local slot.
    assert_eq!(body["01.06.2025"], vec!["10:00", "15:00", "16:00"]);
}

#[actix_web::test]
async fn submissions_are_persisted_across_restarts() {
    let server = MockServer::start();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("appointments.json");

    {
        let app = test_app!(
            test_config(server.url("/frizer"), Some(path.clone())),
            AppointmentStore::load(Some(path.clone())).unwrap()
        );
        let req = test::TestRequest::post()
            .uri("/api/frizer")
            .set_json(json!({"date": "2025-06-01", "time": "15:00"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }

    let reloaded = AppointmentStore::load(Some(path)).unwrap();
    assert_eq!(reloaded.snapshot()["01.06.2025"], vec!["15:00"]);
}

#[actix_web::test]
async fn health_ping() {
    let server = MockServer::start();
    let app = test_app!(
        test_config(server.url("/frizer"), None),
        AppointmentStore::load(None).unwrap()
    );

    let req = test::TestRequest::get().uri("/health/ping").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}
