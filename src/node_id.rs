//! A Module with some utilities for working with NodeIds

use crate::NodeId;
use std::hash::{BuildHasherDefault, Hasher};

/// A specialized [`HashMap`](hashbrown::HashMap) for NodeIds with a faster Hasher
pub type NodeIdMap<V> = hashbrown::HashMap<NodeId, V, BuildHasherDefault<NodeIdHasher>>;
/// A specialized [`HashSet`](hashbrown::HashSet) for NodeIds with a faster Hasher
pub type NodeIdSet = hashbrown::HashSet<NodeId, BuildHasherDefault<NodeIdHasher>>;

/// A [`Hasher`] specialized on NodeIds.
///
/// NodeIds are small integers already, so the Hasher simply widens them instead
/// of scrambling bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct NodeIdHasher(u64);

impl Hasher for NodeIdHasher {
    /// panics, since only NodeIds are supposed to be used
    fn write(&mut self, _: &[u8]) {
        unreachable!("This Hasher only works with NodeIds")
    }
    /// Writes a single NodeId into this hasher.
    fn write_u32(&mut self, id: NodeId) {
        self.0 = id as u64
    }
    fn finish(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_roundtrip() {
        let mut map = NodeIdMap::default();
        map.insert(7, "seven");
        map.insert(42, "forty-two");

        assert_eq!(map.get(&7), Some(&"seven"));
        assert_eq!(map.get(&42), Some(&"forty-two"));
        assert_eq!(map.get(&8), None);
    }

    #[test]
    fn set_membership() {
        let mut set = NodeIdSet::default();
        assert!(set.insert(3));
        assert!(!set.insert(3));
        assert!(set.contains(&3));
    }
}
