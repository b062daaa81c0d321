//! In-memory consignment store.

use parking_lot::RwLock;
use tracing::debug;

use crate::domain::Consignment;
use crate::error::{Error, Result};
use crate::ports::ConsignmentRepository;

/// Append-only, insertion-ordered consignment store.
///
/// Both paths go through one `RwLock`: appends take the write side,
/// listings take the read side and clone out a snapshot.
pub struct MemoryStore {
    consignments: RwLock<Vec<Consignment>>,
    limit: Option<usize>,
}

impl MemoryStore {
    /// Create an empty, unbounded store.
    pub fn new() -> Self {
        Self {
            consignments: RwLock::new(Vec::new()),
            limit: None,
        }
    }

    /// Create an empty store that rejects appends past `limit` entries.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            consignments: RwLock::new(Vec::new()),
            limit: Some(limit),
        }
    }

    /// Number of stored consignments.
    pub fn len(&self) -> usize {
        self.consignments.read().len()
    }

    /// Whether nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.consignments.read().is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsignmentRepository for MemoryStore {
    fn add(&self, consignment: Consignment) -> Result<Consignment> {
        if !consignment.is_assigned() {
            return Err(Error::Invalid("consignment has no vessel assigned".to_string()));
        }

        let mut consignments = self.consignments.write();
        if let Some(limit) = self.limit {
            if consignments.len() >= limit {
                return Err(Error::Invalid(format!(
                    "store is full ({} consignments)",
                    limit
                )));
            }
        }
        consignments.push(consignment.clone());
        debug!(
            total = consignments.len(),
            vessel_id = %consignment.vessel_id,
            "consignment stored"
        );

        Ok(consignment)
    }

    fn list_all(&self) -> Vec<Consignment> {
        self.consignments.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn assigned(weight: i32, vessel: &str) -> Consignment {
        Consignment::new(weight, vec![]).assigned_to(vessel)
    }

    #[test]
    fn test_empty_store() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert!(store.list_all().is_empty());
    }

    #[test]
    fn test_add_preserves_order() {
        let store = MemoryStore::new();
        store.add(assigned(1, "v1")).unwrap();
        store.add(assigned(2, "v2")).unwrap();
        store.add(assigned(1, "v1")).unwrap();

        let all = store.list_all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].weight, 1);
        assert_eq!(all[1].weight, 2);
        // No deduplication
        assert_eq!(all[0], all[2]);
    }

    #[test]
    fn test_rejects_unassigned() {
        let store = MemoryStore::new();
        let err = store.add(Consignment::new(1, vec![])).unwrap_err();
        assert!(matches!(err, Error::Invalid(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_limit() {
        let store = MemoryStore::with_limit(1);
        store.add(assigned(1, "v1")).unwrap();
        let err = store.add(assigned(2, "v1")).unwrap_err();
        assert!(matches!(err, Error::Invalid(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let store = MemoryStore::new();
        store.add(assigned(1, "v1")).unwrap();

        let mut snapshot = store.list_all();
        snapshot[0].vessel_id.clear();
        snapshot.clear();

        assert_eq!(store.list_all()[0].vessel_id, "v1");
    }

    #[test]
    fn test_concurrent_adds() {
        let store = Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for i in 0..100 {
                        store.add(assigned(t * 1000 + i, "v1")).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mut weights: Vec<i32> = store.list_all().iter().map(|c| c.weight).collect();
        assert_eq!(weights.len(), 800);
        weights.sort();
        weights.dedup();
        assert_eq!(weights.len(), 800);
    }
}
