use super::types::{Branch, BranchId, FieldId, FieldItem, ItemId, MasterDataItem};
use std::collections::HashMap;

/// Read-only, id-indexed view over the master-data and branch catalogs.
///
/// The catalogs are open-world: a lookup miss means "not yet visible", so
/// every accessor returns `Option` rather than an error. Built once by the
/// caller from its configuration store and borrowed by the engine functions.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<MasterDataItem>,
    item_index: HashMap<ItemId, usize>,
    branches: Vec<Branch>,
    branch_index: HashMap<BranchId, usize>,
    fields: Vec<FieldItem>,
    field_index: HashMap<FieldId, usize>,
}

impl Catalog {
    pub fn new(items: Vec<MasterDataItem>, branches: Vec<Branch>) -> Self {
        let item_index = items
            .iter()
            .enumerate()
            .map(|(idx, item)| (item.id.clone(), idx))
            .collect();
        let branch_index = branches
            .iter()
            .enumerate()
            .map(|(idx, branch)| (branch.id.clone(), idx))
            .collect();
        Self {
            items,
            item_index,
            branches,
            branch_index,
            fields: Vec::new(),
            field_index: HashMap::new(),
        }
    }

    pub fn with_fields(mut self, fields: Vec<FieldItem>) -> Self {
        self.field_index = fields
            .iter()
            .enumerate()
            .map(|(idx, field)| (field.id.clone(), idx))
            .collect();
        self.fields = fields;
        self
    }

    pub fn item(&self, id: &str) -> Option<&MasterDataItem> {
        self.item_index.get(id).map(|&idx| &self.items[idx])
    }

    pub fn items(&self) -> impl Iterator<Item = &MasterDataItem> {
        self.items.iter()
    }

    pub fn branch(&self, id: &str) -> Option<&Branch> {
        self.branch_index.get(id).map(|&idx| &self.branches[idx])
    }

    pub fn branches(&self) -> impl Iterator<Item = &Branch> {
        self.branches.iter()
    }

    pub fn branch_ids(&self) -> Vec<BranchId> {
        self.branches.iter().map(|b| b.id.clone()).collect()
    }

    pub fn contains_branch(&self, id: &str) -> bool {
        self.branch_index.contains_key(id)
    }

    pub fn field(&self, id: &str) -> Option<&FieldItem> {
        self.field_index.get(id).map(|&idx| &self.fields[idx])
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldItem> {
        self.fields.iter()
    }
}
