use serde::{Deserialize, Serialize};
use std::fmt;

pub type BranchId = String;
pub type ItemId = String;
pub type FieldId = String;

/// Whether an entity operates over company-wide data or a single branch's
/// data. Used for attribute scope, onboarding type and item onboarding level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Company,
    Branch,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Company => write!(f, "company"),
            Scope::Branch => write!(f, "branch"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub id: BranchId,
    pub name: String,
    pub code: String,
}

/// Fixed taxonomy of master-data categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MasterDataType {
    Routes,
    RouteMaster,
    LocationMaster,
    MaterialMaster,
    VehicleTypeMaster,
    DriverMaster,
    TransporterMaster,
}

impl MasterDataType {
    pub fn label(&self) -> &'static str {
        match self {
            MasterDataType::Routes => "Routes",
            MasterDataType::RouteMaster => "Route Master",
            MasterDataType::LocationMaster => "Location Master",
            MasterDataType::MaterialMaster => "Material Master",
            MasterDataType::VehicleTypeMaster => "Vehicle Type Master",
            MasterDataType::DriverMaster => "Driver Master",
            MasterDataType::TransporterMaster => "Transporter Master",
        }
    }
}

/// A reference-data record that transactional records point to.
///
/// Company-onboarded items are visible under every branch scope;
/// branch-onboarded items belong to exactly one branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterDataItem {
    pub id: ItemId,
    pub name: String,
    pub item_type: MasterDataType,
    pub onboarded_at: Scope,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<BranchId>,
}

impl MasterDataItem {
    pub fn company(id: impl Into<ItemId>, name: impl Into<String>, item_type: MasterDataType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            item_type,
            onboarded_at: Scope::Company,
            branch: None,
        }
    }

    pub fn branch(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        item_type: MasterDataType,
        branch: impl Into<BranchId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            item_type,
            onboarded_at: Scope::Branch,
            branch: Some(branch.into()),
        }
    }

    /// True when the item is visible under the given branch: every
    /// company-onboarded item plus the branch's own items.
    pub fn visible_to_branch(&self, branch_id: &str) -> bool {
        self.onboarded_at == Scope::Company || self.branch.as_deref() == Some(branch_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Primary,
    Custom,
}

/// A form/list field whose visibility is governed by attribute field mappings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldItem {
    pub id: FieldId,
    pub name: String,
    pub module: String,
    pub field_type: FieldType,
}
