//! Row-level access resolution for transaction records.
//!
//! A record references several master-data items (route, vehicle type,
//! material, transporter); a row is visible only when the caller holds at
//! least read on ALL of them, and editable only with explicit update on all.

use super::aggregator::PermissionMap;
use crate::attributes::types::AttributeId;
use crate::catalog::{BranchId, ItemId};
use serde::{Deserialize, Serialize};

/// A transactional record (a journey/trip) as seen by the access engine.
///
/// The engine only inspects the referenced item ids; it never mutates
/// records. The `attribute` tag names the attribute that owns the row for
/// caller-side list filtering and plays no part in access resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: String,
    pub branch_id: BranchId,
    pub route_item_id: ItemId,
    pub vehicle_type_item_id: ItemId,
    pub material_item_id: ItemId,
    pub transporter_item_id: ItemId,
    pub attribute: AttributeId,
}

impl TransactionRecord {
    /// The master-data references that gate access to this row.
    pub fn required_item_ids(&self) -> [&ItemId; 4] {
        [
            &self.route_item_id,
            &self.vehicle_type_item_id,
            &self.material_item_id,
            &self.transporter_item_id,
        ]
    }
}

/// Row-level access verdict, with the offending item ids for UI explanation
/// ("update blocked: missing update on X, Y").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordAccess {
    pub can_read_row: bool,
    pub can_update_row: bool,
    pub missing_read_items: Vec<ItemId>,
    pub missing_update_items: Vec<ItemId>,
}

/// Resolves read/update eligibility for one record against a permission map.
///
/// Pure and total: an item id absent from the map is treated as the empty
/// permission set, never as an error.
pub fn resolve_record_access(record: &TransactionRecord, permission_map: &PermissionMap) -> RecordAccess {
    let required = record.required_item_ids();

    let missing_read_items: Vec<ItemId> = required
        .iter()
        .filter(|item_id| !permission_map.get(item_id.as_str()).is_some_and(|p| p.grants_read()))
        .map(|item_id| (*item_id).clone())
        .collect();
    let missing_update_items: Vec<ItemId> = required
        .iter()
        .filter(|item_id| !permission_map.get(item_id.as_str()).is_some_and(|p| p.grants_update()))
        .map(|item_id| (*item_id).clone())
        .collect();

    RecordAccess {
        can_read_row: missing_read_items.is_empty(),
        can_update_row: missing_update_items.is_empty(),
        missing_read_items,
        missing_update_items,
    }
}

/// Convenience filter: only the records whose rows the permission map can
/// read, in their original order.
pub fn readable_records<'a>(
    records: &'a [TransactionRecord],
    permission_map: &PermissionMap,
) -> Vec<&'a TransactionRecord> {
    records
        .iter()
        .filter(|record| resolve_record_access(record, permission_map).can_read_row)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::types::{CrudPermission, PermissionSet};

    fn record(route: &str, vehicle: &str, material: &str, transporter: &str) -> TransactionRecord {
        TransactionRecord {
            id: "JRN-test".to_string(),
            branch_id: "br-1".to_string(),
            route_item_id: route.to_string(),
            vehicle_type_item_id: vehicle.to_string(),
            material_item_id: material.to_string(),
            transporter_item_id: transporter.to_string(),
            attribute: "attr-1".to_string(),
        }
    }

    fn map_of(entries: &[(&str, &[CrudPermission])]) -> PermissionMap {
        entries
            .iter()
            .map(|(id, perms)| (id.to_string(), perms.iter().copied().collect::<PermissionSet>()))
            .collect()
    }

    #[test]
    fn all_references_readable_and_updatable() {
        let map = map_of(&[
            ("md-1", &[CrudPermission::Read, CrudPermission::Update]),
            ("md-40", &[CrudPermission::Update]),
            ("md-30", &[CrudPermission::Update, CrudPermission::Read]),
            ("md-60", &[CrudPermission::Update]),
        ]);
        let access = resolve_record_access(&record("md-1", "md-40", "md-30", "md-60"), &map);
        assert!(access.can_read_row);
        assert!(access.can_update_row);
        assert!(access.missing_read_items.is_empty());
        assert!(access.missing_update_items.is_empty());
    }

    #[test]
    fn one_missing_reference_blocks_the_row() {
        // Read on md-1 only: every other reference blocks the row.
        let map = map_of(&[("md-1", &[CrudPermission::Read])]);
        let access = resolve_record_access(&record("md-1", "md-2", "md-2", "md-2"), &map);
        assert!(!access.can_read_row);
        assert_eq!(
            access.missing_read_items,
            vec!["md-2".to_string(), "md-2".to_string(), "md-2".to_string()]
        );
    }

    #[test]
    fn any_grant_implies_read_but_not_update() {
        let map = map_of(&[
            ("md-1", &[CrudPermission::Delete]),
            ("md-40", &[CrudPermission::Create]),
            ("md-30", &[CrudPermission::Read]),
            ("md-60", &[CrudPermission::Read, CrudPermission::Update]),
        ]);
        let access = resolve_record_access(&record("md-1", "md-40", "md-30", "md-60"), &map);
        assert!(access.can_read_row);
        assert!(!access.can_update_row);
        assert_eq!(
            access.missing_update_items,
            vec!["md-1".to_string(), "md-40".to_string(), "md-30".to_string()]
        );
    }

    #[test]
    fn update_implies_read() {
        // Whatever the map contains, an updatable row must also be readable.
        let maps = vec![
            PermissionMap::new(),
            map_of(&[("md-1", &[CrudPermission::Update])]),
            map_of(&[
                ("md-1", &[CrudPermission::Update]),
                ("md-40", &[CrudPermission::Update]),
                ("md-30", &[CrudPermission::Update]),
                ("md-60", &[CrudPermission::Update]),
            ]),
        ];
        for map in maps {
            let access = resolve_record_access(&record("md-1", "md-40", "md-30", "md-60"), &map);
            assert!(!access.can_update_row || access.can_read_row);
        }
    }

    #[test]
    fn readable_records_filters_rows() {
        let map = map_of(&[
            ("md-1", &[CrudPermission::Read]),
            ("md-40", &[CrudPermission::Read]),
            ("md-30", &[CrudPermission::Read]),
            ("md-60", &[CrudPermission::Read]),
        ]);
        let visible = record("md-1", "md-40", "md-30", "md-60");
        let hidden = record("md-1", "md-40", "md-99", "md-60");
        let records = vec![visible.clone(), hidden];
        let readable = readable_records(&records, &map);
        assert_eq!(readable, vec![&visible]);
    }
}
