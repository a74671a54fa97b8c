use roster::{
    model::fighter_type::{CreateFighterStatsDto, CreateFighterTypeDto, FighterTypeDto},
    server::controller::fighter_type::{
        create_fighter_type, delete_fighter_type, get_fighter_types,
    },
};

use super::*;

fn create_dto(name: &str, faction_id: &str, fighter_category_id: &str) -> CreateFighterTypeDto {
    CreateFighterTypeDto {
        name: name.to_string(),
        cost: 65,
        faction: ConnectDto::new(faction_id),
        fighter_category: ConnectDto::new(fighter_category_id),
        fighter_stats: CreateFighterStatsDto {
            movement: 4,
            weapon_skill: 4,
            ballistic_skill: 5,
            strength: 4,
            toughness: 4,
            wounds: 2,
            initiative: 5,
            attacks: 1,
            leadership: 7,
            cool: 6,
            will: 8,
            intelligence: 8,
        },
    }
}

/// Expect 201 Created, then 409 for the same name
#[tokio::test]
async fn create_then_duplicate() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;
    let faction = test.roster().insert_mock_faction("Goliath").await?;
    let category = test.roster().insert_mock_fighter_category("Ganger").await?;

    let resp = create_fighter_type(
        State(test.to_app_state()),
        Json(create_dto("Forge Boss", &faction.id, &category.id)),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: FighterTypeDto = read_json(resp).await;
    assert_eq!(created.fighter_stats.wounds, 2);

    let resp = create_fighter_type(
        State(test.to_app_state()),
        Json(create_dto("Forge Boss", &faction.id, &category.id)),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: ErrorDto = read_json(resp).await;
    assert_eq!(
        body.message,
        "A fighter type with name \"Forge Boss\" already exists"
    );

    Ok(())
}

/// Expect 400 for a characteristic of zero
#[tokio::test]
async fn invalid_characteristic_returns_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;
    let faction = test.roster().insert_mock_faction("Goliath").await?;
    let category = test.roster().insert_mock_fighter_category("Ganger").await?;
    let mut dto = create_dto("Forge Boss", &faction.id, &category.id);
    dto.fighter_stats.movement = 0;

    let resp = create_fighter_type(State(test.to_app_state()), Json(dto))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = read_json(resp).await;
    assert!(body.message.contains("movement"));

    Ok(())
}

/// Expect delete to return the fighter type and leave the list empty
#[tokio::test]
async fn delete_then_list_is_empty() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;
    let faction = test.roster().insert_mock_faction("Goliath").await?;
    let category = test.roster().insert_mock_fighter_category("Ganger").await?;
    let (fighter_type, stats) = test
        .roster()
        .insert_mock_fighter_type("Forge Boss", &faction.id, &category.id)
        .await?;

    let resp = delete_fighter_type(State(test.to_app_state()), Path(fighter_type.id.clone()))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let deleted: FighterTypeDto = read_json(resp).await;
    assert_eq!(deleted.fighter_stats.id, stats.id);

    let resp = get_fighter_types(State(test.to_app_state()), Query(ListParams::default()))
        .await
        .unwrap()
        .into_response();
    let fighter_types: Vec<FighterTypeDto> = read_json(resp).await;
    assert!(fighter_types.is_empty());

    Ok(())
}
