use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{api::ConnectDto, resource::ResourceDto};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SkillDto {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub skill_type: ResourceDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateSkillDto {
    pub name: String,
    /// Existing skill type the skill belongs to
    #[serde(rename = "type")]
    pub skill_type: ConnectDto,
}
