//! City domain models and parameters.

use sea_orm::DbErr;

use crate::{
    model::{
        access::{Role, Visibility},
        city::{CityDto, SaveCityDto},
    },
    server::model::parse_stored,
};

#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub id: i32,
    pub name: String,
    pub visibility: Visibility,
    pub created_by: Option<i32>,
}

impl City {
    pub fn from_entity(entity: entity::city::Model) -> Result<Self, DbErr> {
        Ok(Self {
            visibility: parse_stored("visibility", &entity.visibility)?,
            id: entity.id,
            name: entity.name,
            created_by: entity.created_by,
        })
    }

    pub fn into_dto(self, can_edit: bool) -> CityDto {
        CityDto {
            id: self.id,
            name: self.name,
            visibility: self.visibility,
            created_by: self.created_by,
            can_edit,
        }
    }
}

/// Whether a caller may edit a visibility-scoped record.
///
/// System records are editable by root only; every other record by members of the
/// owner's tenant.
pub fn can_edit(
    visibility: Visibility,
    created_by: Option<i32>,
    role: Role,
    members: &[i32],
) -> bool {
    match visibility {
        Visibility::System => role == Role::Root,
        _ => created_by.is_some_and(|owner| members.contains(&owner)),
    }
}

/// Whether a tenant may read a visibility-scoped record.
pub fn is_visible(visibility: Visibility, created_by: Option<i32>, members: &[i32]) -> bool {
    visibility != Visibility::Personal || created_by.is_some_and(|owner| members.contains(&owner))
}

#[derive(Debug, Clone)]
pub struct SaveCityParams {
    pub name: String,
    pub visibility: Visibility,
}

impl SaveCityParams {
    pub fn from_dto(dto: SaveCityDto) -> Self {
        Self {
            name: dto.name,
            visibility: dto.visibility,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_records_are_root_only() {
        assert!(can_edit(Visibility::System, Some(1), Role::Root, &[1]));
        assert!(!can_edit(Visibility::System, Some(1), Role::Admin, &[1]));
    }

    #[test]
    fn tenant_members_edit_their_records() {
        assert!(can_edit(Visibility::Shared, Some(2), Role::Admin, &[1, 2]));
        assert!(!can_edit(Visibility::Personal, Some(3), Role::Root, &[1, 2]));
        assert!(!can_edit(Visibility::Personal, None, Role::Admin, &[1, 2]));
    }

    #[test]
    fn personal_records_are_hidden_from_other_tenants() {
        assert!(is_visible(Visibility::System, None, &[]));
        assert!(is_visible(Visibility::Shared, Some(9), &[1]));
        assert!(!is_visible(Visibility::Personal, Some(9), &[1]));
        assert!(is_visible(Visibility::Personal, Some(1), &[1]));
    }
}
