//! Shared fixtures for the integration suites: a small logistics catalog
//! and a seeded configuration store.

use attrgate::{
    ActorType, AttributeDraft, Branch, BranchSelection, Catalog, ConfigStore, CrudPermission,
    FieldItem, FieldType, ItemPermission, MasterDataItem, MasterDataType, Scope, User, UserLevel,
};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn catalog() -> Catalog {
    Catalog::new(
        vec![
            MasterDataItem::company("md-1", "Mumbai → Delhi (NH48)", MasterDataType::Routes),
            MasterDataItem::company("md-2", "Delhi → Kolkata (NH19)", MasterDataType::Routes),
            MasterDataItem::branch("md-4", "Mumbai → Pune (Expressway)", MasterDataType::Routes, "br-1"),
            MasterDataItem::branch("md-5", "Delhi → Jaipur (NH48)", MasterDataType::Routes, "br-2"),
            MasterDataItem::company("md-30", "Cement OPC 53 Grade", MasterDataType::MaterialMaster),
            MasterDataItem::branch("md-33", "Pharma - Cold Chain", MasterDataType::MaterialMaster, "br-1"),
            MasterDataItem::company("md-40", "Flatbed (Open)", MasterDataType::VehicleTypeMaster),
            MasterDataItem::branch("md-43", "Reefer", MasterDataType::VehicleTypeMaster, "br-1"),
            MasterDataItem::company("md-60", "Vinsum Axpress India Pvt Ltd", MasterDataType::TransporterMaster),
            MasterDataItem::branch("md-65", "Gati KWE", MasterDataType::TransporterMaster, "br-1"),
        ],
        vec![
            Branch { id: "br-1".into(), name: "Mumbai HQ".into(), code: "MUM".into() },
            Branch { id: "br-2".into(), name: "Delhi NCR".into(), code: "DEL".into() },
            Branch { id: "br-5".into(), name: "Kolkata".into(), code: "KOL".into() },
        ],
    )
    .with_fields(vec![
        FieldItem {
            id: "f-1".into(),
            name: "Indent Number".into(),
            module: "Indent".into(),
            field_type: FieldType::Primary,
        },
        FieldItem {
            id: "f-10".into(),
            name: "Trip Number".into(),
            module: "Trip".into(),
            field_type: FieldType::Primary,
        },
        FieldItem {
            id: "f-16".into(),
            name: "Custom Field - Seal Number".into(),
            module: "Trip".into(),
            field_type: FieldType::Custom,
        },
    ])
}

pub fn draft(
    label: &str,
    onboarding_type: Scope,
    selection: BranchSelection,
    items: &[(&str, &[CrudPermission])],
    fields: &[&str],
) -> AttributeDraft {
    AttributeDraft {
        label: label.to_string(),
        description: None,
        onboarding_type,
        selected_branches: selection,
        selected_items: items
            .iter()
            .map(|(id, perms)| ItemPermission::new(*id, perms.iter().copied()))
            .collect(),
        selected_fields: fields.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn company_admin() -> User {
    User {
        id: "usr-6".into(),
        name: "Anita Desai".into(),
        email: "anita.desai@company.com".into(),
        role: "Company Admin".into(),
        actor_type: ActorType::CompanyAdmin,
        level: UserLevel::Company,
        assigned_attributes: Vec::new(),
        default_branch_access: false,
    }
}

pub fn branch_user(id: &str, branch_id: &str, attribute_ids: &[&str]) -> User {
    User {
        id: id.to_string(),
        name: format!("User {}", id),
        email: format!("{}@company.com", id),
        role: "Branch User".into(),
        actor_type: ActorType::BranchUser,
        level: UserLevel::Branch(branch_id.to_string()),
        assigned_attributes: attribute_ids.iter().map(|s| s.to_string()).collect(),
        default_branch_access: false,
    }
}

/// Store seeded with one read-only attribute over md-1, assigned to nobody.
pub fn store_with_read_attribute() -> (ConfigStore, String) {
    let store = ConfigStore::new();
    let attribute = store
        .create_attribute(
            draft(
                "Read md-1",
                Scope::Branch,
                BranchSelection::All,
                &[("md-1", &[CrudPermission::Read])],
                &[],
            ),
            &company_admin(),
        )
        .unwrap();
    (store, attribute.id)
}
