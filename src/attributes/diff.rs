//! Change-diff computation for attribute edit review.
//!
//! Compares the snapshot taken when editing began against the pending
//! contents and reports items added/removed, permission-set changes and
//! fields added/removed. Everything is compared by value and set equality,
//! never by reference identity, and independently of element order.

use super::types::{Attribute, AttributeDraft, ItemPermission};
use crate::catalog::{FieldId, ItemId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Structured delta between two versions of an attribute mapping.
///
/// Produced only when at least one part differs; an unchanged edit yields
/// `None` from [`compute_change_summary`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSummary {
    /// Item ids present in the updated mapping but not the original.
    pub added_items: Vec<ItemId>,
    /// Item ids present in the original mapping but not the updated one.
    pub removed_items: Vec<ItemId>,
    /// Item ids kept in both mappings whose permission sets differ.
    pub permission_changes: Vec<ItemId>,
    pub added_fields: Vec<FieldId>,
    pub removed_fields: Vec<FieldId>,
}

impl ChangeSummary {
    pub fn is_empty(&self) -> bool {
        self.added_items.is_empty()
            && self.removed_items.is_empty()
            && self.permission_changes.is_empty()
            && self.added_fields.is_empty()
            && self.removed_fields.is_empty()
    }

    pub fn total_changes(&self) -> usize {
        self.added_items.len()
            + self.removed_items.len()
            + self.permission_changes.len()
            + self.added_fields.len()
            + self.removed_fields.len()
    }
}

impl fmt::Display for ChangeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if !self.added_items.is_empty() {
            parts.push(format!("+{} items", self.added_items.len()));
        }
        if !self.removed_items.is_empty() {
            parts.push(format!("-{} items", self.removed_items.len()));
        }
        if !self.permission_changes.is_empty() {
            parts.push(format!("{} permission changes", self.permission_changes.len()));
        }
        if !self.added_fields.is_empty() {
            parts.push(format!("+{} fields", self.added_fields.len()));
        }
        if !self.removed_fields.is_empty() {
            parts.push(format!("-{} fields", self.removed_fields.len()));
        }
        write!(f, "{}", parts.join(", "))
    }
}

/// Diff between two stored attribute versions. `None` when nothing differs.
pub fn compute_change_summary(original: &Attribute, updated: &Attribute) -> Option<ChangeSummary> {
    diff_mappings(
        &original.master_data_mapping.selected_items,
        &updated.master_data_mapping.selected_items,
        &original.field_mapping.selected_fields,
        &updated.field_mapping.selected_fields,
    )
}

/// Diff between a stored attribute and a pending edit draft, for warning an
/// editor what will change before committing.
pub fn preview_changes(original: &Attribute, draft: &AttributeDraft) -> Option<ChangeSummary> {
    diff_mappings(
        &original.master_data_mapping.selected_items,
        &draft.selected_items,
        &original.field_mapping.selected_fields,
        &draft.selected_fields,
    )
}

fn diff_mappings(
    original_items: &[ItemPermission],
    updated_items: &[ItemPermission],
    original_fields: &[FieldId],
    updated_fields: &[FieldId],
) -> Option<ChangeSummary> {
    let original_ids: BTreeSet<&str> = original_items.iter().map(|s| s.item_id.as_str()).collect();
    let updated_ids: BTreeSet<&str> = updated_items.iter().map(|s| s.item_id.as_str()).collect();

    let added_items = updated_items
        .iter()
        .filter(|s| !original_ids.contains(s.item_id.as_str()))
        .map(|s| s.item_id.clone())
        .collect();
    let removed_items = original_items
        .iter()
        .filter(|s| !updated_ids.contains(s.item_id.as_str()))
        .map(|s| s.item_id.clone())
        .collect();

    // Permission changes only count items kept on both sides.
    let permission_changes = updated_items
        .iter()
        .filter_map(|current| {
            original_items
                .iter()
                .find(|orig| orig.item_id == current.item_id)
                .filter(|orig| orig.permissions != current.permissions)
                .map(|_| current.item_id.clone())
        })
        .collect();

    let original_field_set: BTreeSet<&str> = original_fields.iter().map(String::as_str).collect();
    let updated_field_set: BTreeSet<&str> = updated_fields.iter().map(String::as_str).collect();
    let added_fields = updated_fields
        .iter()
        .filter(|id| !original_field_set.contains(id.as_str()))
        .cloned()
        .collect();
    let removed_fields = original_fields
        .iter()
        .filter(|id| !updated_field_set.contains(id.as_str()))
        .cloned()
        .collect();

    let summary = ChangeSummary {
        added_items,
        removed_items,
        permission_changes,
        added_fields,
        removed_fields,
    };
    if summary.is_empty() {
        None
    } else {
        Some(summary)
    }
}
