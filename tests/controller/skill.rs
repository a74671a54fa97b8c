use roster::{
    model::skill::{CreateSkillDto, SkillDto},
    server::controller::skill::{create_skill, delete_skill, get_skills},
};

use super::*;

/// Expect 201 Created with the skill type included
#[tokio::test]
async fn create_returns_skill_with_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;
    let skill_type = test.roster().insert_mock_skill_type("Combat").await?;

    let resp = create_skill(
        State(test.to_app_state()),
        Json(CreateSkillDto {
            name: "Counter-attack".to_string(),
            skill_type: ConnectDto::new(skill_type.id.clone()),
        }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let skill: SkillDto = read_json(resp).await;
    assert_eq!(skill.skill_type.id, skill_type.id);

    Ok(())
}

/// Expect 500 for an unknown skill type, with no skill created
#[tokio::test]
async fn unknown_type_returns_internal_error() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;

    let resp = create_skill(
        State(test.to_app_state()),
        Json(CreateSkillDto {
            name: "Counter-attack".to_string(),
            skill_type: ConnectDto::new("missing"),
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let resp = get_skills(State(test.to_app_state()), Query(ListParams::default()))
        .await
        .unwrap()
        .into_response();
    let skills: Vec<SkillDto> = read_json(resp).await;
    assert!(skills.is_empty());

    Ok(())
}

/// Expect 200 OK with the deleted skill
#[tokio::test]
async fn delete_returns_deleted_row() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;
    let skill_type = test.roster().insert_mock_skill_type("Combat").await?;
    let skill = test
        .roster()
        .insert_mock_skill("Counter-attack", &skill_type.id)
        .await?;

    let resp = delete_skill(State(test.to_app_state()), Path(skill.id.clone()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let deleted: SkillDto = read_json(resp).await;
    assert_eq!(deleted.id, skill.id);
    assert_eq!(deleted.skill_type.name, "Combat");

    Ok(())
}
