mod create_weapon;
mod delete_weapon;
mod get_weapons;

use crate::{
    model::{api::ConnectDto, weapon::CreateWeaponDto},
    server::service::weapon::WeaponService,
};

use super::*;

fn create_weapon_dto(
    name: &str,
    weapon_type_id: &str,
    weapon_stats: Vec<CreateWeaponStatsDto>,
) -> CreateWeaponDto {
    CreateWeaponDto {
        name: name.to_string(),
        weapon_type: ConnectDto::new(weapon_type_id),
        weapon_stats,
    }
}
