//! Generational arena.
//!
//! Values are addressed through an [`IndexSlot`] that packs the storage index
//! together with the generation of the entry at the time of insertion. Removing
//! a value bumps the generation, so slots handed out earlier stop resolving
//! instead of aliasing whatever is stored there next.

use crate::profiling::profile_function;
use std::num::NonZeroU64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndexSlot(NonZeroU64);

impl IndexSlot {
    pub fn new(generation: u32, idx: u32) -> Self {
        let raw = ((generation as u64) << 32) | (idx as u64 + 1);
        // raw is never zero: the low half is offset by one.
        Self(NonZeroU64::new(raw).unwrap_or(NonZeroU64::MIN))
    }

    pub fn generation(&self) -> u32 {
        (self.0.get() >> 32) as u32
    }

    pub fn index(&self) -> u32 {
        ((self.0.get() & u32::MAX as u64) as u32).wrapping_sub(1)
    }

    /// Raw packed value, stable for the lifetime of the slot.
    pub fn to_bits(&self) -> u64 {
        self.0.get()
    }
}

struct Entry<T> {
    generation: u32,
    data: Option<T>,
}

pub struct SparseSet<T> {
    vec: Vec<Entry<T>>,
    free: Vec<u32>,
    len: usize,
}

impl<T> SparseSet<T> {
    pub const fn new() -> Self {
        Self {
            vec: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    pub fn push(&mut self, data: T) -> IndexSlot {
        self.push_with(|_| data)
    }

    /// Insert a value built from the slot it will occupy, for values that
    /// keep a handle to themselves.
    pub fn push_with(&mut self, build: impl FnOnce(IndexSlot) -> T) -> IndexSlot {
        profile_function!();
        self.len += 1;
        if let Some(idx) = self.free.pop() {
            let entry = &mut self.vec[idx as usize];
            let slot = IndexSlot::new(entry.generation, idx);
            entry.data = Some(build(slot));
            slot
        } else {
            let idx = self.vec.len() as u32;
            let slot = IndexSlot::new(0, idx);
            self.vec.push(Entry {
                generation: 0,
                data: Some(build(slot)),
            });
            slot
        }
    }

    fn entry(&self, idx: IndexSlot) -> Option<&Entry<T>> {
        self.vec
            .get(idx.index() as usize)
            .filter(|entry| entry.generation == idx.generation())
    }

    pub fn get(&self, idx: IndexSlot) -> Option<&T> {
        self.entry(idx).and_then(|entry| entry.data.as_ref())
    }

    pub fn get_mut(&mut self, idx: IndexSlot) -> Option<&mut T> {
        self.vec
            .get_mut(idx.index() as usize)
            .filter(|entry| entry.generation == idx.generation())
            .and_then(|entry| entry.data.as_mut())
    }

    pub fn contains(&self, idx: IndexSlot) -> bool {
        self.get(idx).is_some()
    }

    /// Remove the value behind `idx`. Stale or unknown slots yield `None`.
    pub fn remove(&mut self, idx: IndexSlot) -> Option<T> {
        profile_function!();
        let index = idx.index();
        let entry = self
            .vec
            .get_mut(index as usize)
            .filter(|entry| entry.generation == idx.generation())?;
        let data = entry.data.take()?;
        entry.generation = entry.generation.wrapping_add(1);
        self.free.push(index);
        self.len -= 1;
        Some(data)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate live values in storage order together with their slots.
    pub fn iter(&self) -> impl Iterator<Item = (IndexSlot, &T)> {
        self.vec.iter().enumerate().filter_map(|(idx, entry)| {
            entry
                .data
                .as_ref()
                .map(|data| (IndexSlot::new(entry.generation, idx as u32), data))
        })
    }
}

impl<T> Default for SparseSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_eq_size!(IndexSlot, Option<IndexSlot>);
