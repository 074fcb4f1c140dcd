//! Identity-to-handle table.
//!
//! Every object synchronized with the host is resolved through
//! [`ProxyRegistry::get_or_assign`]. Entries are keyed by the object's
//! [`ObjectKey`], so two field-identical objects still get distinct handles.

use std::collections::HashMap;

use dlgsync_common::{Handle, ObjectKey, ObjectKind};
use tracing::trace;

use crate::allocator::HandleAllocator;

/// A model object that can be mirrored on the host.
pub trait Proxied {
    const KIND: ObjectKind;

    fn key(&self) -> ObjectKey;
}

/// Per-kind mapping from object identity to handle.
///
/// All kinds share one allocator, so a handle is unique across dialogs,
/// tabs and buttons.
#[derive(Debug, Default)]
pub struct ProxyRegistry {
    allocator: HandleAllocator,
    tables: HashMap<ObjectKind, HashMap<ObjectKey, Handle>>,
}

impl ProxyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the handle for `object`, allocating one on first use.
    pub fn get_or_assign<T: Proxied>(&mut self, object: &T) -> Handle {
        self.get_or_assign_key(T::KIND, object.key())
    }

    pub fn get_or_assign_key(&mut self, kind: ObjectKind, key: ObjectKey) -> Handle {
        let table = self.tables.entry(kind).or_default();
        if let Some(handle) = table.get(&key) {
            return *handle;
        }
        let handle = self.allocator.next_handle();
        table.insert(key, handle);
        trace!(%kind, %key, %handle, "handle assigned");
        handle
    }

    /// Look up an existing handle without allocating.
    pub fn lookup<T: Proxied>(&self, object: &T) -> Option<Handle> {
        self.tables
            .get(&T::KIND)
            .and_then(|table| table.get(&object.key()))
            .copied()
    }

    /// Remove the entry for `object`.
    ///
    /// The allocator is not rewound; the evicted handle is never issued again.
    pub fn evict<T: Proxied>(&mut self, object: &T) -> Option<Handle> {
        self.evict_key(T::KIND, object.key())
    }

    pub fn evict_key(&mut self, kind: ObjectKind, key: ObjectKey) -> Option<Handle> {
        let handle = self.tables.get_mut(&kind)?.remove(&key)?;
        trace!(%kind, %key, %handle, "handle evicted");
        Some(handle)
    }

    /// Number of live entries across all kinds.
    pub fn len(&self) -> usize {
        self.tables.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of live entries of one kind.
    pub fn count(&self, kind: ObjectKind) -> usize {
        self.tables.get(&kind).map_or(0, HashMap::len)
    }

    pub fn allocator(&self) -> &HandleAllocator {
        &self.allocator
    }
}
