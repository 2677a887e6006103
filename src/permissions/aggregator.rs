//! Effective-permission aggregation across a user's assigned attributes.

use crate::attributes::types::{Attribute, PermissionSet};
use crate::catalog::{Catalog, FieldId, ItemId};
use crate::users::{ActorType, User};
use log::debug;
use std::collections::{BTreeSet, HashMap};

/// Effective per-item CRUD grants for one user. Items with no entry carry
/// the empty permission set.
pub type PermissionMap = HashMap<ItemId, PermissionSet>;

/// Merges CRUD permissions across every attribute assigned to the user.
///
/// Union semantics: a permission granted by any assigned attribute holds,
/// and permissions never subtract across attributes. One exception, the
/// branch fallback: a `branch_user` flagged with `default_branch_access`
/// gets the full CRUD set on every item visible to its branch, overwriting
/// whatever the union produced for those items. A freshly onboarded branch
/// has no branch-admin-authored attribute yet, and access must not be zero
/// while attributes are being authored.
///
/// Pure function of its inputs; absent or empty inputs produce an empty map.
pub fn build_permission_map(attributes: &[Attribute], user: &User, catalog: &Catalog) -> PermissionMap {
    let mut permission_map = PermissionMap::new();

    for attribute in attributes.iter().filter(|a| user.has_attribute(&a.id)) {
        for selected in &attribute.master_data_mapping.selected_items {
            permission_map
                .entry(selected.item_id.clone())
                .or_default()
                .union_with(&selected.permissions);
        }
    }

    if user.actor_type == ActorType::BranchUser && user.default_branch_access {
        if let Some(branch_id) = user.branch_id() {
            debug!(
                "Applying default branch access fallback for user '{}' on branch '{}'",
                user.id, branch_id
            );
            for item in catalog.items().filter(|item| item.visible_to_branch(branch_id)) {
                permission_map.insert(item.id.clone(), PermissionSet::full());
            }
        }
    }

    permission_map
}

/// Union of visible field ids across the user's assigned attributes.
///
/// No branch fallback applies here: field visibility comes only from
/// explicit field mappings.
pub fn visible_fields(attributes: &[Attribute], user: &User) -> BTreeSet<FieldId> {
    attributes
        .iter()
        .filter(|a| user.has_attribute(&a.id))
        .flat_map(|a| a.field_mapping.selected_fields.iter().cloned())
        .collect()
}
