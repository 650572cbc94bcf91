//! Generational handles
//!
//! Handles name a slot plus the generation it was issued for. Freeing a
//! slot bumps its generation, so handles kept past cancellation go stale
//! instead of aliasing whatever reuses the slot.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

/// A typed handle: lower 32 bits index, upper 32 bits generation
#[repr(transparent)]
pub struct Handle<T> {
    bits: u64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    /// Create a new handle from index and generation
    #[inline]
    pub const fn new(index: u32, generation: u32) -> Self {
        Self {
            bits: (generation as u64) << 32 | index as u64,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub const fn index(&self) -> u32 {
        self.bits as u32
    }

    #[inline]
    pub const fn generation(&self) -> u32 {
        (self.bits >> 32) as u32
    }
}

// Manual impls so `T` needs no bounds
impl<T> Clone for Handle<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<T> Eq for Handle<T> {}

impl<T> Hash for Handle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({}v{})", self.index(), self.generation())
    }
}

/// Slot storage addressed by `Handle<K>`
pub struct HandleMap<K, V> {
    generations: Vec<u32>,
    values: Vec<Option<V>>,
    free_list: Vec<u32>,
    _marker: PhantomData<fn() -> K>,
}

impl<K, V> HandleMap<K, V> {
    pub fn new() -> Self {
        Self {
            generations: Vec::new(),
            values: Vec::new(),
            free_list: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Insert a value and get a handle to it
    pub fn insert(&mut self, value: V) -> Handle<K> {
        if let Some(index) = self.free_list.pop() {
            self.values[index as usize] = Some(value);
            Handle::new(index, self.generations[index as usize])
        } else {
            let index = self.values.len() as u32;
            self.generations.push(0);
            self.values.push(Some(value));
            Handle::new(index, 0)
        }
    }

    /// Remove a value; stale handles return `None`
    pub fn remove(&mut self, handle: Handle<K>) -> Option<V> {
        if !self.contains(handle) {
            return None;
        }
        let index = handle.index() as usize;
        self.generations[index] = self.generations[index].wrapping_add(1);
        self.free_list.push(handle.index());
        self.values[index].take()
    }

    /// Check if a handle still refers to a live value
    pub fn contains(&self, handle: Handle<K>) -> bool {
        let index = handle.index() as usize;
        index < self.values.len()
            && self.generations[index] == handle.generation()
            && self.values[index].is_some()
    }

    pub fn len(&self) -> usize {
        self.values.len() - self.free_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over all live handles and mutable values
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Handle<K>, &mut V)> {
        let gens = &self.generations;
        self.values
            .iter_mut()
            .enumerate()
            .filter_map(move |(i, slot)| {
                slot.as_mut().map(|v| (Handle::new(i as u32, gens[i]), v))
            })
    }

    /// Drop every value, invalidating all outstanding handles
    pub fn clear(&mut self) {
        for (index, slot) in self.values.iter_mut().enumerate() {
            if slot.take().is_some() {
                self.generations[index] = self.generations[index].wrapping_add(1);
                self.free_list.push(index as u32);
            }
        }
    }
}

impl<K, V> Default for HandleMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;

    #[test]
    fn test_handle_map() {
        let mut map: HandleMap<Marker, &str> = HandleMap::new();
        let h1 = map.insert("hello");
        let h2 = map.insert("world");

        assert!(map.contains(h1));
        assert!(map.contains(h2));

        assert_eq!(map.remove(h1), Some("hello"));
        assert!(!map.contains(h1));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_reused_slot_rejects_stale_handle() {
        let mut map: HandleMap<Marker, u32> = HandleMap::new();
        let old = map.insert(1);
        map.remove(old);

        let new = map.insert(2);
        assert_eq!(new.index(), old.index());
        assert_ne!(new.generation(), old.generation());
        assert!(!map.contains(old));
        assert_eq!(map.remove(old), None);
        assert_eq!(map.remove(new), Some(2));
    }

    #[test]
    fn test_clear_invalidates_everything() {
        let mut map: HandleMap<Marker, u32> = HandleMap::new();
        let a = map.insert(1);
        let b = map.insert(2);
        map.clear();

        assert!(map.is_empty());
        assert!(!map.contains(a));
        assert!(!map.contains(b));
    }
}
