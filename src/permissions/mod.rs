// query-time access resolution: permission aggregation and row gating

pub mod aggregator;
pub mod resolver;

pub use aggregator::{build_permission_map, visible_fields, PermissionMap};
pub use resolver::{readable_records, resolve_record_access, RecordAccess, TransactionRecord};
