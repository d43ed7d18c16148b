//! Insertion-ordered set of object ids.
//!
//! Order matters: habits that track "the first found object" rely on it.
//! Sets stay small (a handful of objects near one guard), so membership is
//! a linear scan over a `Vec`.

use sn_core::ObjectId;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectSet {
    items: Vec<ObjectId>,
}

impl ObjectSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contains(&self, id: ObjectId) -> bool {
        self.items.contains(&id)
    }

    /// Append `id` unless present.  Returns whether it was added.
    pub fn insert(&mut self, id: ObjectId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.items.push(id);
        true
    }

    /// Remove `id`, keeping the order of the rest.  Returns whether it was
    /// present.
    pub fn remove(&mut self, id: ObjectId) -> bool {
        match self.items.iter().position(|&x| x == id) {
            Some(i) => {
                self.items.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Option<ObjectId> {
        self.items.first().copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[ObjectId] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.items.iter().copied()
    }
}
