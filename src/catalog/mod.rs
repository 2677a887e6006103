pub mod types;
pub mod view;

pub use types::{
    Branch, BranchId, FieldId, FieldItem, FieldType, ItemId, MasterDataItem, MasterDataType, Scope,
};
pub use view::Catalog;
