pub mod attribute;
pub mod errors;

pub use attribute::{
    Attribute, AttributeDraft, AttributeId, BranchSelection, CrudPermission, FieldMapping,
    ItemPermission, MasterDataMapping, PermissionSet, ALL_CRUD,
};
pub use errors::AttributeError;
