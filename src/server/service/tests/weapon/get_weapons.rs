use super::*;

/// Expect an empty list when no weapon exists
#[tokio::test]
async fn returns_empty_list() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;

    let weapons = WeaponService::new(&test.db)
        .get_all(&ListParams::default())
        .await
        .unwrap();

    assert!(weapons.is_empty());

    Ok(())
}

/// Expect every weapon fully loaded, in creation order
#[tokio::test]
async fn loads_full_aggregate_for_every_weapon() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;
    let weapon_type = test.roster().insert_mock_weapon_type("Basic").await?;
    let rapid_fire = test.roster().insert_mock_trait("Rapid Fire (1)").await?;
    let autogun = test
        .roster()
        .insert_mock_weapon("Autogun", &weapon_type.id, 2, &[rapid_fire.id.as_str()])
        .await?;
    let lasgun = test
        .roster()
        .insert_mock_weapon("Lasgun", &weapon_type.id, 1, &[])
        .await?;

    let weapons = WeaponService::new(&test.db)
        .get_all(&ListParams::default())
        .await
        .unwrap();

    assert_eq!(weapons.len(), 2);
    assert_eq!(weapons[0].id, autogun.weapon.id);
    assert_eq!(weapons[0].weapon_type.name, "Basic");
    assert_eq!(weapons[0].weapon_stats.len(), 2);
    assert_eq!(weapons[0].weapon_stats[0].id, autogun.weapon_stats[0].id);
    assert_eq!(weapons[0].weapon_stats[1].traits[0].weapon_trait.id, rapid_fire.id);
    assert_eq!(weapons[1].id, lasgun.weapon.id);
    assert!(weapons[1].weapon_stats[0].traits.is_empty());

    Ok(())
}

/// Expect trait links ordered by trait id
#[tokio::test]
async fn orders_trait_links_by_trait_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;
    let weapon_type = test.roster().insert_mock_weapon_type("Basic").await?;
    let first = test.roster().insert_mock_trait("Rapid Fire (1)").await?;
    let second = test.roster().insert_mock_trait("Knockback").await?;
    test.roster()
        .insert_mock_weapon("Autogun", &weapon_type.id, 1, &[second.id.as_str(), first.id.as_str()])
        .await?;

    let weapons = WeaponService::new(&test.db)
        .get_all(&ListParams::default())
        .await
        .unwrap();

    let trait_ids: Vec<&str> = weapons[0].weapon_stats[0]
        .traits
        .iter()
        .map(|t| t.trait_id.as_str())
        .collect();
    assert_eq!(trait_ids, vec![first.id.as_str(), second.id.as_str()]);

    Ok(())
}

/// Expect skip and take to window the list after ordering
#[tokio::test]
async fn applies_skip_and_take() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;
    let weapon_type = test.roster().insert_mock_weapon_type("Basic").await?;
    let mut ids = Vec::new();
    for name in ["Autogun", "Lasgun", "Shotgun"] {
        let mock = test
            .roster()
            .insert_mock_weapon(name, &weapon_type.id, 1, &[])
            .await?;
        ids.push(mock.weapon.id);
    }

    let weapons = WeaponService::new(&test.db)
        .get_all(&ListParams {
            skip: Some(1),
            take: Some(1),
        })
        .await
        .unwrap();

    assert_eq!(weapons.len(), 1);
    assert_eq!(weapons[0].id, ids[1]);

    Ok(())
}
