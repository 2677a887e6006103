use crate::attributes::types::AttributeId;
use crate::catalog::BranchId;
use serde::{Deserialize, Serialize};

pub type UserId = String;

/// Actor kind a user holds on the platform. Admins author attributes and
/// users; plain users only consume the access their attributes grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorType {
    CompanyAdmin,
    BranchAdmin,
    CompanyUser,
    BranchUser,
}

impl ActorType {
    pub fn is_admin(&self) -> bool {
        matches!(self, ActorType::CompanyAdmin | ActorType::BranchAdmin)
    }
}

/// The level a user operates at. A branch-level user always carries its
/// branch id, so a company-level user with a branch cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "level", content = "branch_id", rename_all = "lowercase")]
pub enum UserLevel {
    Company,
    Branch(BranchId),
}

impl UserLevel {
    pub fn branch_id(&self) -> Option<&str> {
        match self {
            UserLevel::Company => None,
            UserLevel::Branch(branch_id) => Some(branch_id),
        }
    }

}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub actor_type: ActorType,
    #[serde(flatten)]
    pub level: UserLevel,
    pub assigned_attributes: Vec<AttributeId>,
    /// Fallback flag: no branch-specific attribute existed for this user's
    /// branch when it was authored, so full CRUD on everything visible to
    /// the branch is granted until attributes are created.
    #[serde(default)]
    pub default_branch_access: bool,
}

impl User {
    pub fn branch_id(&self) -> Option<&str> {
        self.level.branch_id()
    }

    pub fn has_attribute(&self, attribute_id: &str) -> bool {
        self.assigned_attributes.iter().any(|id| id == attribute_id)
    }
}
