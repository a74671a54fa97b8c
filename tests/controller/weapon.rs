use roster::{
    model::weapon::{CreateWeaponDto, CreateWeaponStatsDto, TraitLinkDto, WeaponDto},
    server::controller::weapon::{create_weapon, delete_weapon, get_weapons},
};

use super::*;

fn create_dto(name: &str, weapon_type_id: &str, trait_id: &str) -> CreateWeaponDto {
    CreateWeaponDto {
        name: name.to_string(),
        weapon_type: ConnectDto::new(weapon_type_id),
        weapon_stats: vec![CreateWeaponStatsDto {
            description: String::new(),
            range_short: "12\"".to_string(),
            range_long: "24\"".to_string(),
            accuracy_short: "+1".to_string(),
            accuracy_long: "-".to_string(),
            strength: "4".to_string(),
            armour_penetration: "-1".to_string(),
            damage: "2".to_string(),
            ammo: "6+".to_string(),
            is_default: true,
            is_ammo: false,
            combi_type: None,
            traits: vec![TraitLinkDto {
                modifier: 0,
                weapon_trait: ConnectDto::new(trait_id),
            }],
        }],
    }
}

/// Expect 201 Created with the nested graph, and the same graph from the list
#[tokio::test]
async fn create_then_list_returns_nested_graph() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;
    let weapon_type = test.roster().insert_mock_weapon_type("Basic").await?;
    let knockback = test.roster().insert_mock_trait("Knockback").await?;

    let resp = create_weapon(
        State(test.to_app_state()),
        Json(create_dto("Boltgun", &weapon_type.id, &knockback.id)),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: WeaponDto = read_json(resp).await;
    assert_eq!(
        created.weapon_stats[0].traits[0].weapon_trait.name,
        "Knockback"
    );

    let resp = get_weapons(State(test.to_app_state()), Query(ListParams::default()))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let weapons: Vec<WeaponDto> = read_json(resp).await;
    assert_eq!(weapons, vec![created]);

    Ok(())
}

/// Expect 409 Conflict naming the weapon
#[tokio::test]
async fn duplicate_returns_conflict() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;
    let weapon_type = test.roster().insert_mock_weapon_type("Basic").await?;
    let knockback = test.roster().insert_mock_trait("Knockback").await?;
    test.roster()
        .insert_mock_weapon("Boltgun", &weapon_type.id, 1, &[])
        .await?;

    let resp = create_weapon(
        State(test.to_app_state()),
        Json(create_dto("Boltgun", &weapon_type.id, &knockback.id)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: ErrorDto = read_json(resp).await;
    assert_eq!(body.status_code, 409);
    assert_eq!(body.message, "A weapon with name \"Boltgun\" already exists");

    Ok(())
}

/// Expect 200 OK with the weapon as it was before deletion
#[tokio::test]
async fn delete_returns_prior_weapon() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;
    let weapon_type = test.roster().insert_mock_weapon_type("Basic").await?;
    let knockback = test.roster().insert_mock_trait("Knockback").await?;
    let mock = test
        .roster()
        .insert_mock_weapon("Boltgun", &weapon_type.id, 2, &[knockback.id.as_str()])
        .await?;

    let resp = delete_weapon(State(test.to_app_state()), Path(mock.weapon.id.clone()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let deleted: WeaponDto = read_json(resp).await;
    assert_eq!(deleted.id, mock.weapon.id);
    assert_eq!(deleted.name, "Boltgun");
    assert_eq!(deleted.weapon_stats.len(), 2);

    Ok(())
}

/// Expect 500 for an unknown weapon id
#[tokio::test]
async fn delete_unknown_id_returns_internal_error() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;

    let resp = delete_weapon(State(test.to_app_state()), Path("missing".to_string()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
