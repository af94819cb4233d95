//! Integration tests for listing endpoints

mod common;

use axum::http::StatusCode;
use marketplace_backend::repositories::UserRepository;
use marketplace_shared::AccountType;
use serde_json::{json, Value};

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_listing_geocodes_location() {
    let app = common::TestApp::new().await;
    let (owner_id, token) = app.create_user().await;

    let listing = app.create_listing(&token, "Gartenpflege", "Berlin").await;

    assert_eq!(listing["owner_id"], owner_id.to_string());
    assert_eq!(listing["location"], "Berlin, Deutschland");
    assert_eq!(listing["latitude"], 52.52);
    assert_eq!(listing["longitude"], 13.405);
    assert_eq!(listing["price_type"], "HOURLY");
    assert_eq!(listing["currency"], "EUR");
    assert_eq!(listing["availability"].as_array().unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_listing_unknown_location() {
    let app = common::TestApp::new().await;
    let (_, token) = app.create_user().await;

    let body = json!({
        "title": "Gartenpflege",
        "description": "Zuverlässige Hilfe rund um Haus und Garten",
        "category": "garden",
        "price": 25.0,
        "price_type": "FIXED",
        "location": "Atlantis",
        "languages": ["de"],
        "keywords": ["garten"]
    });
    let (status, response) = app.post_auth("/api/v1/listings", &body.to_string(), &token).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"]["code"], "ADDRESS_NOT_FOUND");
    assert_eq!(response["error"]["field"], "location");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_requires_owner() {
    let app = common::TestApp::new().await;
    let (_, owner_token) = app.create_user().await;
    let (_, other_token) = app.create_user().await;

    let listing = app.create_listing(&owner_token, "Gartenpflege", "Berlin").await;
    let path = format!("/api/v1/listings/{}", listing["id"].as_str().unwrap());
    let patch = json!({ "title": "Rasenpflege" }).to_string();

    let (status, _) = app.put_auth(&path, &patch, &other_token).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, response) = app.put_auth(&path, &patch, &owner_token).await;
    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["title"], "Rasenpflege");
    assert_eq!(response["location"], "Berlin, Deutschland");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_relocates_listing() {
    let app = common::TestApp::new().await;
    let (_, token) = app.create_user().await;

    let listing = app.create_listing(&token, "Gartenpflege", "Berlin").await;
    let path = format!("/api/v1/listings/{}", listing["id"].as_str().unwrap());

    let (status, response) = app
        .put_auth(&path, &json!({ "location": "Hamburg" }).to_string(), &token)
        .await;
    assert_eq!(status, StatusCode::OK);

    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["location"], "Hamburg, Deutschland");
    assert_eq!(response["latitude"], 53.5511);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_rejects_prohibited_description() {
    let app = common::TestApp::new().await;
    let (_, token) = app.create_user().await;

    let listing = app.create_listing(&token, "Gartenpflege", "Berlin").await;
    let path = format!("/api/v1/listings/{}", listing["id"].as_str().unwrap());

    let (status, response) = app
        .put_auth(&path, &json!({ "description": "fick dich und alle anderen" }).to_string(), &token)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"]["field"], "description");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_delete_listing() {
    let app = common::TestApp::new().await;
    let (_, token) = app.create_user().await;
    let (_, other_token) = app.create_user().await;

    let listing = app.create_listing(&token, "Gartenpflege", "Berlin").await;
    let path = format!("/api/v1/listings/{}", listing["id"].as_str().unwrap());

    let (status, _) = app.delete_auth(&path, &other_token).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.delete_auth(&path, &token).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.get(&path).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_add_availability() {
    let app = common::TestApp::new().await;
    let (_, token) = app.create_user().await;

    let listing = app.create_listing(&token, "Gartenpflege", "Berlin").await;
    let id = listing["id"].as_str().unwrap();
    let path = format!("/api/v1/listings/{id}/availability");

    let bad = json!({ "day_of_week": 3, "start_time": "25:00", "end_time": "17:00" });
    let (status, _) = app.post_auth(&path, &bad.to_string(), &token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let slot = json!({ "day_of_week": 3, "start_time": "08:30", "end_time": "12:00" });
    let (status, _) = app.post_auth(&path, &slot.to_string(), &token).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, response) = app.get(&format!("/api/v1/listings/{id}")).await;
    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["availability"].as_array().unwrap().len(), 2);
}

fn item_ids(response: &Value) -> Vec<String> {
    response["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect()
}

fn id_of(listing: &Value) -> String {
    listing["id"].as_str().unwrap().to_string()
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_nearby_filters_by_radius() {
    let app = common::TestApp::new().await;
    let (_, token) = app.create_user().await;

    let berlin = app.create_listing(&token, "Gartenpflege", "Berlin").await;
    let potsdam = app.create_listing(&token, "Rasen mähen", "Potsdam").await;
    let hamburg = app.create_listing(&token, "Umzugshilfe", "Hamburg").await;

    let (status, response) = app
        .get("/api/v1/listings/nearby?lat=52.5200&lon=13.4050&radius_km=25&limit=100")
        .await;
    assert_eq!(status, StatusCode::OK);

    let response: Value = serde_json::from_str(&response).unwrap();
    let ids = item_ids(&response);
    assert!(ids.contains(&id_of(&berlin)));
    assert!(ids.contains(&id_of(&potsdam)));
    assert!(!ids.contains(&id_of(&hamburg)));

    let exact = response["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|item| item["id"] == berlin["id"])
        .unwrap();
    assert_eq!(exact["distance_km"], 0.0);
    for item in response["items"].as_array().unwrap() {
        assert!(item["distance_km"].as_f64().unwrap() <= 25.0);
    }

    let (_, response) = app
        .get("/api/v1/listings/nearby?lat=52.5200&lon=13.4050&radius_km=300&limit=100")
        .await;
    let response: Value = serde_json::from_str(&response).unwrap();
    assert!(item_ids(&response).contains(&id_of(&hamburg)));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_nearby_pages_cover_results_once() {
    let app = common::TestApp::new().await;
    let (_, token) = app.create_user().await;

    // Only this test places listings on Helgoland
    let mut created = Vec::new();
    for title in ["Gartenpflege", "Rasen mähen", "Heckenschnitt", "Fensterputz", "Umzugshilfe"] {
        created.push(id_of(&app.create_listing(&token, title, "Helgoland").await));
    }

    let base = "/api/v1/listings/nearby?lat=54.1821&lon=7.8859&radius_km=1&limit=2";
    let (_, first) = app.get(&format!("{base}&page=1")).await;
    let first: Value = serde_json::from_str(&first).unwrap();
    let total = first["total"].as_u64().unwrap();
    let total_pages = first["total_pages"].as_u64().unwrap();
    assert!(total >= 5);
    assert_eq!(total_pages, total.div_ceil(2));

    let mut seen = Vec::new();
    for page in 1..=total_pages {
        let (status, response) = app.get(&format!("{base}&page={page}")).await;
        assert_eq!(status, StatusCode::OK);
        let response: Value = serde_json::from_str(&response).unwrap();
        assert_eq!(response["total"], total);
        seen.extend(item_ids(&response));
    }

    let mut unique = seen.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(seen.len() as u64, total);
    assert_eq!(unique.len(), seen.len());
    assert!(created.iter().all(|id| seen.contains(id)));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_search_and_category() {
    let app = common::TestApp::new().await;
    let (owner_id, token) = app.create_user().await;

    let garden = app.create_listing(&token, "Gartenpflege", "Berlin").await;
    let moving = app.create_listing(&token, "Umzugshilfe", "Hamburg").await;

    let (status, response) = app.get("/api/v1/listings/search?q=GARTENPFLEGE&limit=100").await;
    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&response).unwrap();
    let ids = item_ids(&response);
    assert!(ids.contains(&id_of(&garden)));
    assert!(!ids.contains(&id_of(&moving)));

    // Exact keyword match, case-insensitive
    let (_, response) = app.get("/api/v1/listings/search?q=Rasen&limit=100").await;
    let response: Value = serde_json::from_str(&response).unwrap();
    let ids = item_ids(&response);
    assert!(ids.contains(&id_of(&garden)));
    assert!(ids.contains(&id_of(&moving)));

    let (_, response) = app.get("/api/v1/listings/category/Garden?limit=100").await;
    let response: Value = serde_json::from_str(&response).unwrap();
    assert!(item_ids(&response).contains(&id_of(&moving)));

    let (_, response) = app.get(&format!("/api/v1/listings/owner/{owner_id}?limit=1")).await;
    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["total"], 2);
    assert_eq!(response["total_pages"], 2);
    assert_eq!(response["items"].as_array().unwrap().len(), 1);
    // Newest first
    assert_eq!(response["items"][0]["id"], moving["id"]);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_first_write_records_caller() {
    let app = common::TestApp::new().await;

    // Neither caller has a users row yet
    let private_id = uuid::Uuid::new_v4();
    let private_token = common::access_token(private_id);
    let business_id = uuid::Uuid::new_v4();
    let business_token = common::access_token_for(business_id, Some("BUSINESS"));

    let listing = app.create_listing(&business_token, "Gartenpflege", "Berlin").await;
    assert_eq!(listing["owner_id"], business_id.to_string());

    let path = format!("/api/v1/favorites/{}", id_of(&listing));
    let (status, _) = app.post_auth(&path, "", &private_token).await;
    assert_eq!(status, StatusCode::CREATED);

    assert_eq!(
        UserRepository::account_type(&app.pool, business_id).await.unwrap(),
        Some(AccountType::Business)
    );
    assert_eq!(
        UserRepository::account_type(&app.pool, private_id).await.unwrap(),
        Some(AccountType::Private)
    );

    // A second write by the same caller reuses the row
    app.create_listing(&business_token, "Rasenpflege", "Potsdam").await;
}
