use crate::model::resource::ResourceDto;

use super::*;

/// Expect the created weapon to carry the nested trait and to match the list exactly
#[tokio::test]
async fn creates_weapon_with_nested_trait_link() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;
    let weapon_type = test.roster().insert_mock_weapon_type("Basic").await?;
    let rapid_fire = test.roster().insert_mock_trait("Rapid Fire (1)").await?;
    let service = WeaponService::new(&test.db);

    let weapon = service
        .create(create_weapon_dto(
            "Autogun",
            &weapon_type.id,
            vec![weapon_stats_dto("Standard", &[rapid_fire.id.as_str()])],
        ))
        .await
        .unwrap();

    assert!(!weapon.id.is_empty());
    assert_eq!(weapon.name, "Autogun");
    assert_eq!(weapon.weapon_type.id, weapon_type.id);
    assert_eq!(weapon.weapon_stats.len(), 1);

    let stats = &weapon.weapon_stats[0];
    assert!(!stats.id.is_empty());
    assert_eq!(stats.weapon_id, weapon.id);
    assert_eq!(stats.traits.len(), 1);
    assert_eq!(stats.traits[0].weapon_stats_id, stats.id);
    assert_eq!(stats.traits[0].modifier, 1);
    assert_eq!(
        stats.traits[0].weapon_trait,
        ResourceDto {
            id: rapid_fire.id.clone(),
            name: rapid_fire.name.clone(),
        }
    );

    let weapons = service.get_all(&ListParams::default()).await.unwrap();
    assert_eq!(weapons, vec![weapon]);

    Ok(())
}

/// Expect weapon stats in the order they were submitted
#[tokio::test]
async fn keeps_weapon_stats_order() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;
    let weapon_type = test.roster().insert_mock_weapon_type("Special").await?;
    let service = WeaponService::new(&test.db);

    let weapon = service
        .create(create_weapon_dto(
            "Combi-weapon",
            &weapon_type.id,
            vec![
                weapon_stats_dto("Bolter", &[]),
                weapon_stats_dto("Melta", &[]),
                weapon_stats_dto("Flamer", &[]),
            ],
        ))
        .await
        .unwrap();

    let descriptions: Vec<&str> = weapon
        .weapon_stats
        .iter()
        .map(|s| s.description.as_str())
        .collect();
    assert_eq!(descriptions, vec!["Bolter", "Melta", "Flamer"]);

    Ok(())
}

/// Expect a weapon without weapon stats to be accepted
#[tokio::test]
async fn creates_weapon_without_stats() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;
    let weapon_type = test.roster().insert_mock_weapon_type("Close Combat").await?;

    let weapon = WeaponService::new(&test.db)
        .create(create_weapon_dto("Fighting Knife", &weapon_type.id, vec![]))
        .await
        .unwrap();

    assert!(weapon.weapon_stats.is_empty());

    Ok(())
}

/// Expect Conflict labelled weapon, with none of the second weapon's rows persisted
#[tokio::test]
async fn conflicts_on_duplicate_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;
    let weapon_type = test.roster().insert_mock_weapon_type("Basic").await?;
    let rapid_fire = test.roster().insert_mock_trait("Rapid Fire (1)").await?;
    let service = WeaponService::new(&test.db);

    service
        .create(create_weapon_dto(
            "Autogun",
            &weapon_type.id,
            vec![weapon_stats_dto("Standard", &[rapid_fire.id.as_str()])],
        ))
        .await
        .unwrap();
    let result = service
        .create(create_weapon_dto(
            "Autogun",
            &weapon_type.id,
            vec![
                weapon_stats_dto("Standard", &[rapid_fire.id.as_str()]),
                weapon_stats_dto("Extended", &[rapid_fire.id.as_str()]),
            ],
        ))
        .await;

    assert_conflict(result, "weapon", "Autogun");
    assert_eq!(entity::prelude::Weapon::find().count(&test.db).await?, 1);
    assert_eq!(entity::prelude::WeaponStats::find().count(&test.db).await?, 1);
    assert_eq!(
        entity::prelude::TraitOnWeaponStats::find()
            .count(&test.db)
            .await?,
        1
    );

    Ok(())
}

/// Expect RecordNotFound and no weapon row for an unknown weapon type
#[tokio::test]
async fn fails_for_unknown_weapon_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;

    let result = WeaponService::new(&test.db)
        .create(create_weapon_dto(
            "Autogun",
            "missing",
            vec![weapon_stats_dto("Standard", &[])],
        ))
        .await;

    assert_record_not_found(result);
    assert_eq!(entity::prelude::Weapon::find().count(&test.db).await?, 0);
    assert_eq!(entity::prelude::WeaponStats::find().count(&test.db).await?, 0);

    Ok(())
}

/// Expect RecordNotFound and nothing persisted when one linked trait does not exist
#[tokio::test]
async fn fails_for_unknown_trait() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;
    let weapon_type = test.roster().insert_mock_weapon_type("Basic").await?;
    let rapid_fire = test.roster().insert_mock_trait("Rapid Fire (1)").await?;

    let result = WeaponService::new(&test.db)
        .create(create_weapon_dto(
            "Autogun",
            &weapon_type.id,
            vec![
                weapon_stats_dto("Standard", &[rapid_fire.id.as_str()]),
                weapon_stats_dto("Extended", &["missing"]),
            ],
        ))
        .await;

    assert_record_not_found(result);
    assert_eq!(entity::prelude::Weapon::find().count(&test.db).await?, 0);
    assert_eq!(entity::prelude::WeaponStats::find().count(&test.db).await?, 0);
    assert_eq!(
        entity::prelude::TraitOnWeaponStats::find()
            .count(&test.db)
            .await?,
        0
    );

    Ok(())
}

/// Expect Validation rather than Conflict when one weapon stats entry links a trait twice
#[tokio::test]
async fn rejects_trait_linked_twice_on_one_profile() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;
    let weapon_type = test.roster().insert_mock_weapon_type("Basic").await?;
    let rapid_fire = test.roster().insert_mock_trait("Rapid Fire (1)").await?;

    let result = WeaponService::new(&test.db)
        .create(create_weapon_dto(
            "Autogun",
            &weapon_type.id,
            vec![weapon_stats_dto(
                "Standard",
                &[rapid_fire.id.as_str(), rapid_fire.id.as_str()],
            )],
        ))
        .await;

    assert!(matches!(
        result,
        Err(Error::ResourceError(ResourceError::Validation(_)))
    ));
    assert_eq!(entity::prelude::Weapon::find().count(&test.db).await?, 0);

    Ok(())
}

/// Expect a storage failure that is not a uniqueness violation to pass through unchanged
#[tokio::test]
async fn does_not_mask_other_storage_errors_as_conflict() -> Result<(), TestError> {
    // Weapon type exists but the weapon tables do not
    let test = TestBuilder::new()
        .with_table(entity::prelude::WeaponType)
        .build()
        .await?;
    let weapon_type = test.roster().insert_mock_weapon_type("Basic").await?;

    let result = WeaponService::new(&test.db)
        .create(create_weapon_dto("Autogun", &weapon_type.id, vec![]))
        .await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    Ok(())
}
