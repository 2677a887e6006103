//! Scope and eligibility filtering for configuration-time authoring.
//!
//! Decides which master-data items an attribute author may select for a
//! given onboarding context, and which attributes are assignable when
//! authoring a user.

use crate::attributes::types::{Attribute, BranchSelection};
use crate::catalog::{BranchId, Catalog, MasterDataItem, Scope};
use serde::{Deserialize, Serialize};

/// Master-data items selectable under an onboarding context.
///
/// Company onboarding exposes the company pool only; branch onboarding adds
/// the branch-onboarded items of the effective branch set (every known
/// branch when the selection is `All`).
pub fn eligible_items<'a>(
    catalog: &'a Catalog,
    onboarding_type: Scope,
    selection: &BranchSelection,
) -> Vec<&'a MasterDataItem> {
    match onboarding_type {
        Scope::Company => catalog
            .items()
            .filter(|item| item.onboarded_at == Scope::Company)
            .collect(),
        Scope::Branch => {
            let branch_ids = selection.effective_branch_ids(catalog);
            catalog
                .items()
                .filter(|item| {
                    item.onboarded_at == Scope::Company
                        || item
                            .branch
                            .as_ref()
                            .is_some_and(|branch| branch_ids.contains(branch))
                })
                .collect()
        }
    }
}

/// The user being authored, for attribute assignability checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProspectiveAssignee {
    /// A company-level user, pre-filtered by a set of candidate branches.
    CompanyLevel { candidate_branches: Vec<BranchId> },
    /// A branch-level user bound to one branch.
    BranchLevel { branch_id: BranchId },
}

/// Attributes assignable to a prospective user.
///
/// Company-level users take company-scoped attributes whose branch selection
/// is `All` or intersects the candidate branch set; with zero candidate
/// branches nothing is assignable yet. Branch-level users take branch-scoped
/// attributes whose selection is `All` or contains their branch.
pub fn assignable_attributes<'a>(
    attributes: &'a [Attribute],
    assignee: &ProspectiveAssignee,
) -> Vec<&'a Attribute> {
    match assignee {
        ProspectiveAssignee::CompanyLevel { candidate_branches } => {
            if candidate_branches.is_empty() {
                return Vec::new();
            }
            attributes
                .iter()
                .filter(|a| a.scope == Scope::Company)
                .filter(|a| a.master_data_mapping.selected_branches.intersects(candidate_branches))
                .collect()
        }
        ProspectiveAssignee::BranchLevel { branch_id } => attributes
            .iter()
            .filter(|a| a.scope == Scope::Branch)
            .filter(|a| a.master_data_mapping.selected_branches.contains(branch_id))
            .collect(),
    }
}

/// True when no branch-scoped attribute is assignable for the branch.
///
/// The caller is expected to set `default_branch_access` on the new user so
/// the branch is not left with zero access while attributes are authored.
pub fn needs_default_branch_access(attributes: &[Attribute], branch_id: &str) -> bool {
    let assignee = ProspectiveAssignee::BranchLevel {
        branch_id: branch_id.to_string(),
    };
    assignable_attributes(attributes, &assignee).is_empty()
}
