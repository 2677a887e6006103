use crate::catalog::{BranchId, Catalog, FieldId, ItemId, Scope};
use crate::users::ActorType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

pub type AttributeId = String;

/// A single grantable permission on a master-data item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrudPermission {
    Create,
    Read,
    Update,
    Delete,
}

pub const ALL_CRUD: [CrudPermission; 4] = [
    CrudPermission::Create,
    CrudPermission::Read,
    CrudPermission::Update,
    CrudPermission::Delete,
];

/// An order-independent set of CRUD permissions.
///
/// Any grant in the set implies at least read visibility on the item
/// (`grants_read`); explicit `update` is required for row edits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(BTreeSet<CrudPermission>);

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full CRUD set, as granted by the branch fallback rule.
    pub fn full() -> Self {
        Self(ALL_CRUD.iter().copied().collect())
    }

    pub fn insert(&mut self, permission: CrudPermission) {
        self.0.insert(permission);
    }

    pub fn contains(&self, permission: CrudPermission) -> bool {
        self.0.contains(&permission)
    }

    /// Any CRUD grant implies at least read visibility.
    pub fn grants_read(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn grants_update(&self) -> bool {
        self.contains(CrudPermission::Update)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn union_with(&mut self, other: &PermissionSet) {
        self.0.extend(other.0.iter().copied());
    }

    pub fn iter(&self) -> impl Iterator<Item = CrudPermission> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<CrudPermission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = CrudPermission>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Per-item permission grant inside one attribute. Each item appears at most
/// once within a mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPermission {
    pub item_id: ItemId,
    pub permissions: PermissionSet,
}

impl ItemPermission {
    pub fn new(item_id: impl Into<ItemId>, permissions: impl IntoIterator<Item = CrudPermission>) -> Self {
        Self {
            item_id: item_id.into(),
            permissions: permissions.into_iter().collect(),
        }
    }

    pub fn full_crud(item_id: impl Into<ItemId>) -> Self {
        Self {
            item_id: item_id.into(),
            permissions: PermissionSet::full(),
        }
    }
}

/// The branches an attribute maps: every known branch, or an explicit list.
///
/// Serializes as the literal string `"ALL"` or as an id array, matching the
/// stored attribute format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SelectionRepr", into = "SelectionRepr")]
pub enum BranchSelection {
    All,
    Branches(Vec<BranchId>),
}

impl BranchSelection {
    pub fn contains(&self, branch_id: &str) -> bool {
        match self {
            BranchSelection::All => true,
            BranchSelection::Branches(ids) => ids.iter().any(|id| id == branch_id),
        }
    }

    pub fn intersects(&self, branch_ids: &[BranchId]) -> bool {
        match self {
            BranchSelection::All => true,
            BranchSelection::Branches(ids) => branch_ids.iter().any(|id| ids.contains(id)),
        }
    }

    /// Resolves to concrete branch ids: all known branches for `All`,
    /// otherwise the explicit list.
    pub fn effective_branch_ids(&self, catalog: &Catalog) -> Vec<BranchId> {
        match self {
            BranchSelection::All => catalog.branch_ids(),
            BranchSelection::Branches(ids) => ids.clone(),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SelectionRepr {
    Keyword(String),
    Branches(Vec<BranchId>),
}

impl TryFrom<SelectionRepr> for BranchSelection {
    type Error = String;

    fn try_from(repr: SelectionRepr) -> Result<Self, Self::Error> {
        match repr {
            SelectionRepr::Keyword(kw) if kw == "ALL" => Ok(BranchSelection::All),
            SelectionRepr::Keyword(kw) => Err(format!("unknown branch selection keyword '{}'", kw)),
            SelectionRepr::Branches(ids) => Ok(BranchSelection::Branches(ids)),
        }
    }
}

impl From<BranchSelection> for SelectionRepr {
    fn from(selection: BranchSelection) -> Self {
        match selection {
            BranchSelection::All => SelectionRepr::Keyword("ALL".to_string()),
            BranchSelection::Branches(ids) => SelectionRepr::Branches(ids),
        }
    }
}

/// Which master-data items an attribute grants, and under which branch scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterDataMapping {
    pub onboarding_type: Scope,
    pub selected_branches: BranchSelection,
    pub selected_items: Vec<ItemPermission>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    pub selected_fields: Vec<FieldId>,
}

/// A named bundle of master-data item permissions and field-visibility
/// selections, assignable to users.
///
/// Invariant: `scope` agrees with `master_data_mapping.onboarding_type`;
/// the store derives it at construction so the two cannot drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub id: AttributeId,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub scope: Scope,
    pub created_by: String,
    pub created_by_user_id: String,
    pub created_by_actor_type: ActorType,
    pub created_at: DateTime<Utc>,
    pub master_data_mapping: MasterDataMapping,
    pub field_mapping: FieldMapping,
    pub assigned_users: Vec<String>,
}

impl Attribute {
    /// Grant looked up by item id, if this attribute selects the item.
    pub fn item_permission(&self, item_id: &str) -> Option<&ItemPermission> {
        self.master_data_mapping
            .selected_items
            .iter()
            .find(|selected| selected.item_id == item_id)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {} scope)", self.label, self.id, self.scope)
    }
}

/// Authoring payload for attribute create/update. The store validates it and
/// derives scope and creator metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDraft {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub onboarding_type: Scope,
    pub selected_branches: BranchSelection,
    pub selected_items: Vec<ItemPermission>,
    pub selected_fields: Vec<FieldId>,
}
