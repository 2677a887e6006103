//! In-memory configuration store for attributes and users.
//!
//! Both collections live behind a single lock so every mutation, including
//! the delete-attribute cascade across users, is one transactional step.
//! Readers take whole-collection snapshots and never observe a partial
//! update. Query-time evaluation (`permissions`, `scope`) operates on those
//! snapshots, not on the store itself.

use crate::attributes::types::{Attribute, AttributeDraft, AttributeError, AttributeId};
use crate::error::AttrGateError;
use crate::users::{User, UserId};
use chrono::Utc;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

#[derive(Debug, Default)]
struct StoreState {
    attributes: HashMap<AttributeId, Attribute>,
    users: HashMap<UserId, User>,
}

/// The attribute/user collections and their mutation operations.
#[derive(Debug, Default)]
pub struct ConfigStore {
    state: Mutex<StoreState>,
}

/// Whole-store snapshot, serializable as plain JSON records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    pub attributes: Vec<Attribute>,
    pub users: Vec<User>,
}

impl ConfigSnapshot {
    pub fn to_json(&self) -> Result<String, AttrGateError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, AttrGateError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: ConfigSnapshot) -> Self {
        Self {
            state: Mutex::new(StoreState {
                attributes: snapshot
                    .attributes
                    .into_iter()
                    .map(|attribute| (attribute.id.clone(), attribute))
                    .collect(),
                users: snapshot
                    .users
                    .into_iter()
                    .map(|user| (user.id.clone(), user))
                    .collect(),
            }),
        }
    }

    fn locked(&self) -> Result<MutexGuard<'_, StoreState>, AttributeError> {
        self.state
            .lock()
            .map_err(|_| AttributeError::Internal("configuration store lock poisoned".to_string()))
    }

    /// Creates an attribute from a draft authored by `actor`.
    ///
    /// Scope is derived from the draft's onboarding type; the generated id
    /// and creator metadata are stamped here. Validation failures abort
    /// before any write.
    pub fn create_attribute(&self, draft: AttributeDraft, actor: &User) -> Result<Attribute, AttributeError> {
        validate_draft(&draft)?;

        let attribute = Attribute {
            id: format!("attr-{}", Uuid::new_v4()),
            label: draft.label.trim().to_string(),
            description: normalize_description(draft.description),
            scope: draft.onboarding_type,
            created_by: actor.name.clone(),
            created_by_user_id: actor.id.clone(),
            created_by_actor_type: actor.actor_type,
            created_at: Utc::now(),
            master_data_mapping: crate::attributes::types::MasterDataMapping {
                onboarding_type: draft.onboarding_type,
                selected_branches: draft.selected_branches,
                selected_items: draft.selected_items,
            },
            field_mapping: crate::attributes::types::FieldMapping {
                selected_fields: draft.selected_fields,
            },
            assigned_users: Vec::new(),
        };

        let mut state = self.locked()?;
        state.attributes.insert(attribute.id.clone(), attribute.clone());
        info!(
            "Created attribute '{}' ({}) with {} items and {} fields",
            attribute.label,
            attribute.id,
            attribute.master_data_mapping.selected_items.len(),
            attribute.field_mapping.selected_fields.len()
        );
        Ok(attribute)
    }

    /// Replaces the mapping contents of an existing attribute wholesale,
    /// preserving id, creator metadata, creation timestamp and assignments.
    pub fn update_attribute(&self, id: &str, draft: AttributeDraft) -> Result<Attribute, AttributeError> {
        validate_draft(&draft)?;

        let mut state = self.locked()?;
        let existing = state
            .attributes
            .get_mut(id)
            .ok_or_else(|| AttributeError::NotFound(format!("attribute '{}' not found", id)))?;

        existing.label = draft.label.trim().to_string();
        existing.description = normalize_description(draft.description);
        existing.scope = draft.onboarding_type;
        existing.master_data_mapping = crate::attributes::types::MasterDataMapping {
            onboarding_type: draft.onboarding_type,
            selected_branches: draft.selected_branches,
            selected_items: draft.selected_items,
        };
        existing.field_mapping = crate::attributes::types::FieldMapping {
            selected_fields: draft.selected_fields,
        };

        let updated = existing.clone();
        info!("Updated attribute {}", updated);
        Ok(updated)
    }

    /// Deletes an attribute and strips its id from every user's assignment
    /// list in the same lock scope, so no dangling reference can persist.
    /// Returns the number of users that referenced it.
    pub fn delete_attribute(&self, id: &str) -> Result<usize, AttributeError> {
        let mut state = self.locked()?;
        let removed = state
            .attributes
            .remove(id)
            .ok_or_else(|| AttributeError::NotFound(format!("attribute '{}' not found", id)))?;

        let mut touched_users = 0;
        for user in state.users.values_mut() {
            let before = user.assigned_attributes.len();
            user.assigned_attributes.retain(|assigned| assigned != id);
            if user.assigned_attributes.len() != before {
                touched_users += 1;
            }
        }
        info!(
            "Deleted attribute '{}' ({}), unassigned from {} users",
            removed.label, removed.id, touched_users
        );
        Ok(touched_users)
    }

    pub fn attribute(&self, id: &str) -> Option<Attribute> {
        self.locked().ok()?.attributes.get(id).cloned()
    }

    /// Snapshot of the attribute collection, ordered by creation time.
    pub fn attributes(&self) -> Vec<Attribute> {
        let state = match self.locked() {
            Ok(state) => state,
            Err(_) => return Vec::new(),
        };
        let mut attributes: Vec<Attribute> = state.attributes.values().cloned().collect();
        attributes.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        attributes
    }

    /// Adds a user, checking every assigned attribute id exists, and records
    /// the user on each attribute's reverse assignment index.
    pub fn add_user(&self, user: User) -> Result<(), AttributeError> {
        let mut state = self.locked()?;
        if state.users.contains_key(&user.id) {
            return Err(AttributeError::Validation(format!(
                "user '{}' already exists",
                user.id
            )));
        }
        ensure_attributes_exist(&state, &user)?;
        index_user_assignments(&mut state, &user);
        info!(
            "Added user '{}' ({}) with {} assigned attributes",
            user.name,
            user.id,
            user.assigned_attributes.len()
        );
        state.users.insert(user.id.clone(), user);
        Ok(())
    }

    /// Replaces a user wholesale and re-indexes its attribute assignments.
    pub fn update_user(&self, user: User) -> Result<(), AttributeError> {
        let mut state = self.locked()?;
        if !state.users.contains_key(&user.id) {
            return Err(AttributeError::NotFound(format!("user '{}' not found", user.id)));
        }
        ensure_attributes_exist(&state, &user)?;
        drop_user_assignments(&mut state, &user.id);
        index_user_assignments(&mut state, &user);
        info!("Updated user '{}' ({})", user.name, user.id);
        state.users.insert(user.id.clone(), user);
        Ok(())
    }

    pub fn delete_user(&self, id: &str) -> Result<(), AttributeError> {
        let mut state = self.locked()?;
        if state.users.remove(id).is_none() {
            return Err(AttributeError::NotFound(format!("user '{}' not found", id)));
        }
        drop_user_assignments(&mut state, id);
        info!("Deleted user '{}'", id);
        Ok(())
    }

    pub fn user(&self, id: &str) -> Option<User> {
        self.locked().ok()?.users.get(id).cloned()
    }

    pub fn users(&self) -> Vec<User> {
        let state = match self.locked() {
            Ok(state) => state,
            Err(_) => return Vec::new(),
        };
        let mut users: Vec<User> = state.users.values().cloned().collect();
        users.sort_by(|a, b| a.id.cmp(&b.id));
        users
    }

    /// Consistent point-in-time export of both collections.
    pub fn snapshot(&self) -> Result<ConfigSnapshot, AttributeError> {
        let state = self.locked()?;
        let mut attributes: Vec<Attribute> = state.attributes.values().cloned().collect();
        attributes.sort_by(|a, b| a.id.cmp(&b.id));
        let mut users: Vec<User> = state.users.values().cloned().collect();
        users.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(ConfigSnapshot { attributes, users })
    }

    /// Serializes a point-in-time snapshot of the store as JSON.
    pub fn export_json(&self) -> Result<String, AttrGateError> {
        self.snapshot()?.to_json()
    }

    /// Replaces the store contents from a JSON snapshot.
    pub fn import_json(&self, json: &str) -> Result<(), AttrGateError> {
        self.restore(ConfigSnapshot::from_json(json)?)?;
        Ok(())
    }

    /// Replaces both collections atomically with the snapshot contents.
    pub fn restore(&self, snapshot: ConfigSnapshot) -> Result<(), AttributeError> {
        let mut state = self.locked()?;
        state.attributes = snapshot
            .attributes
            .into_iter()
            .map(|attribute| (attribute.id.clone(), attribute))
            .collect();
        state.users = snapshot
            .users
            .into_iter()
            .map(|user| (user.id.clone(), user))
            .collect();
        info!(
            "Restored store snapshot: {} attributes, {} users",
            state.attributes.len(),
            state.users.len()
        );
        Ok(())
    }
}

fn validate_draft(draft: &AttributeDraft) -> Result<(), AttributeError> {
    if draft.label.trim().is_empty() {
        return Err(AttributeError::Validation("attribute label is required".to_string()));
    }
    if draft.selected_items.is_empty() && draft.selected_fields.is_empty() {
        return Err(AttributeError::Validation(
            "select at least one master data item or field".to_string(),
        ));
    }
    let mut seen = std::collections::HashSet::new();
    for selected in &draft.selected_items {
        if !seen.insert(selected.item_id.as_str()) {
            return Err(AttributeError::Validation(format!(
                "item '{}' selected more than once",
                selected.item_id
            )));
        }
    }
    Ok(())
}

fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}

fn ensure_attributes_exist(state: &StoreState, user: &User) -> Result<(), AttributeError> {
    for attribute_id in &user.assigned_attributes {
        if !state.attributes.contains_key(attribute_id) {
            return Err(AttributeError::NotFound(format!(
                "attribute '{}' assigned to user '{}' not found",
                attribute_id, user.id
            )));
        }
    }
    Ok(())
}

fn index_user_assignments(state: &mut StoreState, user: &User) {
    for attribute_id in &user.assigned_attributes {
        if let Some(attribute) = state.attributes.get_mut(attribute_id) {
            if !attribute.assigned_users.contains(&user.id) {
                attribute.assigned_users.push(user.id.clone());
            }
        }
    }
}

fn drop_user_assignments(state: &mut StoreState, user_id: &str) {
    for attribute in state.attributes.values_mut() {
        attribute.assigned_users.retain(|assigned| assigned != user_id);
    }
}
