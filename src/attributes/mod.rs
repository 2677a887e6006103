// attribute authoring: entity types, validation errors and edit diffs

pub mod diff;
pub mod types;

pub use diff::{compute_change_summary, preview_changes, ChangeSummary};
pub use types::{
    Attribute, AttributeDraft, AttributeError, AttributeId, BranchSelection, CrudPermission,
    FieldMapping, ItemPermission, MasterDataMapping, PermissionSet, ALL_CRUD,
};
