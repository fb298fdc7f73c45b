//! IFD node (component C3): an ordered list of values, a chain link, and the bookkeeping the
//! serializer needs to resolve offsets.

use crate::ids::IfdId;
use crate::value::Value;
use std::cell::Cell;

/// One parsed Image File Directory.
///
/// Slots in `values` become `None` after the editor (C9) removes a tag; the serializer skips
/// `None` slots so entry counts re-converge automatically (no shifting/compacting needed).
pub struct Ifd {
    pub id: IfdId,
    pub values: Vec<Option<Value>>,
    /// Sibling link in the chain. Per invariant I4, only PRIMARY uses this, and only to
    /// reach THUMBNAIL.
    pub next: Option<Box<Ifd>>,
    /// Cached total serialized size, filled in by the serializer's probe pass the first time
    /// this node is written as an embedded IFD (see Serializer §4.7, invariant P7). `None`
    /// until probed.
    pub(crate) cached_size: Cell<Option<u32>>,
}

impl Ifd {
    pub(crate) fn new(id: IfdId) -> Self {
        Self { id, values: Vec::new(), next: None, cached_size: Cell::new(None) }
    }

    /// Number of live (non-removed) entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the live values in file order.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.values.iter().filter_map(|v| v.as_ref())
    }

    /// Find a live value by tag.
    #[must_use]
    pub fn get(&self, tag: u16) -> Option<&Value> {
        self.iter().find(|v| v.tag == tag)
    }

    pub(crate) fn push(&mut self, v: Value) {
        self.values.push(Some(v));
    }

    /// Null the slot holding `tag`, if present. Returns whether a slot was cleared.
    pub(crate) fn remove_tag(&mut self, tag: u16) -> bool {
        for slot in &mut self.values {
            if matches!(slot, Some(v) if v.tag == tag) {
                *slot = None;
                return true;
            }
        }
        false
    }
}
