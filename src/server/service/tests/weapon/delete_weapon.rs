use super::*;

/// Expect every weapon stats row and trait link of the weapon to be removed while traits,
/// the weapon type and other weapons stay untouched
#[tokio::test]
async fn deletes_all_owned_rows() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;
    let weapon_type = test.roster().insert_mock_weapon_type("Basic").await?;
    let rapid_fire = test.roster().insert_mock_trait("Rapid Fire (1)").await?;
    let knockback = test.roster().insert_mock_trait("Knockback").await?;
    let trait_ids = [rapid_fire.id.as_str(), knockback.id.as_str()];
    let target = test
        .roster()
        .insert_mock_weapon("Autogun", &weapon_type.id, 3, &trait_ids)
        .await?;
    let other = test
        .roster()
        .insert_mock_weapon("Lasgun", &weapon_type.id, 1, &trait_ids)
        .await?;
    let stats_ids: Vec<String> = target.weapon_stats.iter().map(|s| s.id.clone()).collect();

    let deleted = WeaponService::new(&test.db)
        .delete(&target.weapon.id)
        .await
        .unwrap();

    assert_eq!(deleted.id, target.weapon.id);
    assert_eq!(deleted.name, "Autogun");
    assert_eq!(deleted.weapon_stats.len(), 3);
    assert!(deleted.weapon_stats.iter().all(|s| s.traits.len() == 2));

    assert_eq!(
        entity::prelude::WeaponStats::find()
            .filter(entity::weapon_stats::Column::WeaponId.eq(target.weapon.id.clone()))
            .count(&test.db)
            .await?,
        0
    );
    assert_eq!(
        entity::prelude::TraitOnWeaponStats::find()
            .filter(entity::trait_on_weapon_stats::Column::WeaponStatsId.is_in(stats_ids))
            .count(&test.db)
            .await?,
        0
    );
    assert!(entity::prelude::Weapon::find_by_id(target.weapon.id.clone())
        .one(&test.db)
        .await?
        .is_none());

    assert_eq!(entity::prelude::Trait::find().count(&test.db).await?, 2);
    assert_eq!(entity::prelude::WeaponType::find().count(&test.db).await?, 1);
    assert_eq!(
        entity::prelude::WeaponStats::find()
            .filter(entity::weapon_stats::Column::WeaponId.eq(other.weapon.id.clone()))
            .count(&test.db)
            .await?,
        1
    );
    assert_eq!(
        entity::prelude::TraitOnWeaponStats::find()
            .count(&test.db)
            .await?,
        other.trait_links.len() as u64
    );

    Ok(())
}

/// Expect the deleted weapon to be absent from the list
#[tokio::test]
async fn delete_then_list_is_empty() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;
    let weapon_type = test.roster().insert_mock_weapon_type("Basic").await?;
    let blaze = test.roster().insert_mock_trait("Blaze").await?;
    let service = WeaponService::new(&test.db);

    let created = service
        .create(create_weapon_dto(
            "Hand Flamer",
            &weapon_type.id,
            vec![weapon_stats_dto("Standard", &[blaze.id.as_str()])],
        ))
        .await
        .unwrap();

    let deleted = service.delete(&created.id).await.unwrap();
    assert_eq!(deleted, created);

    let weapons = service.get_all(&ListParams::default()).await.unwrap();
    assert!(weapons.is_empty());

    Ok(())
}

/// Expect a weapon without weapon stats to be deleted
#[tokio::test]
async fn deletes_weapon_without_stats() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;
    let weapon_type = test.roster().insert_mock_weapon_type("Close Combat").await?;
    let mock = test
        .roster()
        .insert_mock_weapon("Fighting Knife", &weapon_type.id, 0, &[])
        .await?;

    let deleted = WeaponService::new(&test.db)
        .delete(&mock.weapon.id)
        .await
        .unwrap();

    assert!(deleted.weapon_stats.is_empty());
    assert_eq!(entity::prelude::Weapon::find().count(&test.db).await?, 0);

    Ok(())
}

/// Expect RecordNotFound from the initial read for an unknown id
#[tokio::test]
async fn delete_unknown_id_fails() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;

    let result = WeaponService::new(&test.db).delete("missing").await;

    assert_record_not_found(result);

    Ok(())
}
