//! Shared fixtures for the unit-test modules.

use crate::attributes::types::{
    Attribute, BranchSelection, CrudPermission, FieldMapping, ItemPermission, MasterDataMapping,
};
use crate::catalog::{Branch, Catalog, MasterDataItem, MasterDataType, Scope};
use crate::users::{ActorType, User, UserLevel};
use chrono::Utc;

/// Two branches, three company items and two branch items.
pub fn catalog_fixture() -> Catalog {
    Catalog::new(
        vec![
            MasterDataItem::company("md-1", "Mumbai → Delhi (NH48)", MasterDataType::Routes),
            MasterDataItem::company("md-2", "Cement OPC 53 Grade", MasterDataType::MaterialMaster),
            MasterDataItem::company("md-3", "Flatbed (Open)", MasterDataType::VehicleTypeMaster),
            MasterDataItem::branch("md-4", "Mumbai → Pune", MasterDataType::Routes, "br-1"),
            MasterDataItem::branch("md-5", "Delhi → Jaipur", MasterDataType::Routes, "br-2"),
        ],
        vec![
            Branch {
                id: "br-1".to_string(),
                name: "Mumbai HQ".to_string(),
                code: "MUM".to_string(),
            },
            Branch {
                id: "br-2".to_string(),
                name: "Delhi NCR".to_string(),
                code: "DEL".to_string(),
            },
        ],
    )
}

pub fn attribute_with_items(id: &str, specs: &[(&str, &[CrudPermission])]) -> Attribute {
    Attribute {
        id: id.to_string(),
        label: id.to_string(),
        description: None,
        scope: Scope::Branch,
        created_by: "Test Admin".to_string(),
        created_by_user_id: "usr-admin".to_string(),
        created_by_actor_type: ActorType::CompanyAdmin,
        created_at: Utc::now(),
        master_data_mapping: MasterDataMapping {
            onboarding_type: Scope::Branch,
            selected_branches: BranchSelection::All,
            selected_items: specs
                .iter()
                .map(|(item_id, perms)| ItemPermission::new(*item_id, perms.iter().copied()))
                .collect(),
        },
        field_mapping: FieldMapping::default(),
        assigned_users: Vec::new(),
    }
}

pub fn company_user(id: &str, attribute_ids: &[&str]) -> User {
    User {
        id: id.to_string(),
        name: id.to_string(),
        email: format!("{}@company.com", id),
        role: "Company User".to_string(),
        actor_type: ActorType::CompanyUser,
        level: UserLevel::Company,
        assigned_attributes: attribute_ids.iter().map(|s| s.to_string()).collect(),
        default_branch_access: false,
    }
}

pub fn branch_user(id: &str, branch_id: &str, attribute_ids: &[&str]) -> User {
    User {
        id: id.to_string(),
        name: id.to_string(),
        email: format!("{}@company.com", id),
        role: "Branch User".to_string(),
        actor_type: ActorType::BranchUser,
        level: UserLevel::Branch(branch_id.to_string()),
        assigned_attributes: attribute_ids.iter().map(|s| s.to_string()).collect(),
        default_branch_access: false,
    }
}
