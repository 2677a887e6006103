//! attrgate: attribute-based access control for logistics master data.
//!
//! Administrators author Attributes (bundles of per-item CRUD grants plus
//! field visibility) and assign them to users; the engine computes effective
//! permission maps, gates row-level access to transaction records, validates
//! attribute mutations with cascading cleanup, and filters which items and
//! attributes are eligible in a given scope.
//!
//! The query-time surface (`permissions`, `scope`) is pure and synchronous
//! over caller-supplied snapshots; the only shared state is [`ConfigStore`],
//! whose mutations are single-lock transactional steps.

pub mod attributes;
pub mod catalog;
pub mod error;
pub mod permissions;
pub mod scope;
pub mod store;
pub mod users;

#[cfg(test)]
pub(crate) mod testing;

pub use attributes::{
    compute_change_summary, preview_changes, Attribute, AttributeDraft, AttributeError,
    AttributeId, BranchSelection, ChangeSummary, CrudPermission, FieldMapping, ItemPermission,
    MasterDataMapping, PermissionSet, ALL_CRUD,
};
pub use catalog::{
    Branch, BranchId, Catalog, FieldId, FieldItem, FieldType, ItemId, MasterDataItem,
    MasterDataType, Scope,
};
pub use error::AttrGateError;
pub use permissions::{
    build_permission_map, readable_records, resolve_record_access, visible_fields, PermissionMap,
    RecordAccess, TransactionRecord,
};
pub use scope::{assignable_attributes, eligible_items, needs_default_branch_access, ProspectiveAssignee};
pub use store::{ConfigSnapshot, ConfigStore};
pub use users::{ActorType, User, UserId, UserLevel};
