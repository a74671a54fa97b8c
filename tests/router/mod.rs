//! Tests driving the full router, including JSON extraction and routing.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use roster::{
    model::{api::ErrorDto, resource::ResourceDto, weapon::WeaponDto},
    server::{model::app::AppState, router},
};
use roster_test_utils::prelude::*;
use serde_json::json;
use tower::ServiceExt;

use crate::util::read_json;

fn app(test: &TestContext) -> Router {
    router::routes().with_state(test.to_app_state::<AppState>())
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Expect 201 for the first trait and 409 with the JSON error body for the second
#[tokio::test]
async fn duplicate_trait_returns_conflict_body() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;

    let resp = app(&test)
        .oneshot(post_json("/traits", json!({ "name": "Blaze" })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app(&test)
        .oneshot(post_json("/traits", json!({ "name": "Blaze" })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = read_json(resp).await;
    assert_eq!(
        body,
        json!({
            "statusCode": 409,
            "message": "A trait with name \"Blaze\" already exists"
        })
    );

    Ok(())
}

/// Expect skip and take query parameters to window the list
#[tokio::test]
async fn list_accepts_skip_and_take() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;
    test.roster().insert_mock_weapon_type("Basic").await?;
    let pistol = test.roster().insert_mock_weapon_type("Pistol").await?;
    test.roster().insert_mock_weapon_type("Special").await?;

    let resp = app(&test)
        .oneshot(empty("GET", "/weapon-types?skip=1&take=1"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let weapon_types: Vec<ResourceDto> = read_json(resp).await;
    assert_eq!(
        weapon_types,
        vec![ResourceDto {
            id: pistol.id,
            name: "Pistol".to_string(),
        }]
    );

    Ok(())
}

/// Expect skip without take to return every remaining row
#[tokio::test]
async fn list_accepts_skip_without_take() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;
    test.roster().insert_mock_weapon_type("Basic").await?;
    let pistol = test.roster().insert_mock_weapon_type("Pistol").await?;
    let special = test.roster().insert_mock_weapon_type("Special").await?;

    let resp = app(&test)
        .oneshot(empty("GET", "/weapon-types?skip=1"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let weapon_types: Vec<ResourceDto> = read_json(resp).await;
    let ids: Vec<String> = weapon_types.into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![pistol.id, special.id]);

    Ok(())
}

/// Expect the weapon JSON contract in camelCase with `trait` and `weaponType` keys
#[tokio::test]
async fn creates_and_deletes_weapon_over_http() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;
    let weapon_type = test.roster().insert_mock_weapon_type("Heavy").await?;
    let unwieldy = test.roster().insert_mock_trait("Unwieldy").await?;

    let resp = app(&test)
        .oneshot(post_json(
            "/weapons",
            json!({
                "name": "Heavy Stubber",
                "weaponType": { "id": weapon_type.id },
                "weaponStats": [{
                    "description": "",
                    "rangeShort": "20\"",
                    "rangeLong": "40\"",
                    "accuracyShort": "-",
                    "accuracyLong": "-",
                    "strength": "4",
                    "armourPenetration": "-",
                    "damage": "1",
                    "ammo": "4+",
                    "isDefault": true,
                    "isAmmo": false,
                    "traits": [{ "modifier": 0, "trait": { "id": unwieldy.id } }]
                }]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = read_json(resp).await;
    assert_eq!(body["weaponType"]["name"], "Heavy");
    assert_eq!(body["weaponStats"][0]["combiType"], serde_json::Value::Null);
    assert_eq!(body["weaponStats"][0]["traits"][0]["trait"]["name"], "Unwieldy");
    let weapon: WeaponDto = serde_json::from_value(body).unwrap();

    let resp = app(&test)
        .oneshot(empty("DELETE", &format!("/weapons/{}", weapon.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let deleted: WeaponDto = read_json(resp).await;
    assert_eq!(deleted, weapon);

    let resp = app(&test)
        .oneshot(empty("GET", "/weapons"))
        .await
        .unwrap();
    let weapons: Vec<WeaponDto> = read_json(resp).await;
    assert!(weapons.is_empty());

    Ok(())
}

/// Expect an unknown weapon type to surface as a generic 500
#[tokio::test]
async fn unknown_parent_returns_internal_error() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;

    let resp = app(&test)
        .oneshot(post_json(
            "/weapons",
            json!({ "name": "Heavy Stubber", "weaponType": { "id": "missing" }, "weaponStats": [] }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorDto = read_json(resp).await;
    assert_eq!(body.status_code, 500);
    assert_eq!(body.message, "Internal server error");

    Ok(())
}

/// Expect the OpenAPI document to list every resource path
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(&test)
        .oneshot(empty("GET", "/docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc: serde_json::Value = read_json(resp).await;
    for path in [
        "/factions",
        "/fighter-categories",
        "/fighter-types",
        "/skill-types",
        "/skills",
        "/traits",
        "/weapon-types",
        "/weapons",
        "/weapons/{id}",
    ] {
        assert!(doc["paths"].get(path).is_some(), "missing path {}", path);
    }

    Ok(())
}
