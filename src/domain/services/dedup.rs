//! Deduplication Domain Service
//!
//! Collapses structurally equal capabilities/requirements while keeping the
//! order in which they were first seen. Relies entirely on the `Eq`/`Hash`
//! contract of [`CapReq`].

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entities::CapReq;

/// Insertion-ordered set of records
#[derive(Debug, Clone, Default)]
pub struct CapReqSet {
    ordered: Vec<Arc<CapReq>>,
    seen: HashSet<Arc<CapReq>>,
    duplicates: usize,
}

impl CapReqSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record; returns false (and counts a duplicate) if an equal
    /// record is already present
    pub fn insert(&mut self, record: CapReq) -> bool {
        if self.seen.contains(&record) {
            self.duplicates += 1;
            return false;
        }
        let record = Arc::new(record);
        self.seen.insert(Arc::clone(&record));
        self.ordered.push(record);
        true
    }

    pub fn contains(&self, record: &CapReq) -> bool {
        self.seen.contains(record)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Number of rejected inserts so far
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Records in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &CapReq> {
        self.ordered.iter().map(|r| r.as_ref())
    }

    /// Records of one namespace, in first-seen order
    pub fn by_namespace<'a>(&'a self, namespace: &'a str) -> impl Iterator<Item = &'a CapReq> {
        self.iter().filter(move |r| r.namespace() == namespace)
    }
}

impl Extend<CapReq> for CapReqSet {
    fn extend<I: IntoIterator<Item = CapReq>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl FromIterator<CapReq> for CapReqSet {
    fn from_iter<I: IntoIterator<Item = CapReq>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
