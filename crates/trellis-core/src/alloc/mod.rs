//! Allocation and collection types shared across Trellis crates.
//!
//! - AHash-backed hash collections
//! - [`SparseSet`](sparse_set::SparseSet), a generational arena used to store
//!   widgets behind stable handles

pub mod sparse_set;

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashmap_ahash() {
        let mut map = HashMap::new();
        map.insert(1u8, true);
        assert_eq!(map.get(&1), Some(&true));
        assert_eq!(map.get(&2), None);
    }

    #[test]
    fn test_hashset_ahash() {
        let mut set = HashSet::new();
        set.insert("row");
        assert!(set.contains("row"));
    }
}
