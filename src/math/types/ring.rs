// src/math/types/ring.rs

use rand::Rng;
use std::ops::Index;

/// Zyklische Sequenz: das Element nach dem letzten ist wieder das erste.
///
/// Die Nachbarschaft wird nicht über Zeiger gespeichert, sondern aus dem Index
/// berechnet (`(i ± 1) mod n`). Knoten sind daher nur geliehene Sichten
/// ([`RingNode`]) auf einen Slot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ring<T> {
    items: Vec<T>,
}

/// Sicht auf einen Slot eines [`Ring`].
#[derive(Debug)]
pub struct RingNode<'a, T> {
    ring: &'a Ring<T>,
    index: usize,
}

impl<T> Clone for RingNode<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RingNode<'_, T> {}

impl<'a, T> RingNode<'a, T> {
    /// Position im Ring, immer in `0..len`.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn data(&self) -> &'a T {
        &self.ring.items[self.index]
    }

    pub fn next(&self) -> RingNode<'a, T> {
        RingNode {
            ring: self.ring,
            index: (self.index + 1) % self.ring.len(),
        }
    }

    pub fn prev(&self) -> RingNode<'a, T> {
        let len = self.ring.len();
        RingNode {
            ring: self.ring,
            index: (self.index + len - 1) % len,
        }
    }
}

impl<T> Ring<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Hängt ein Element hinter dem letzten (also vor dem ersten) an.
    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn wrap(&self, index: isize) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }
        Some(index.rem_euclid(self.items.len() as isize) as usize)
    }

    /// Element an `index` modulo Länge; negative und zu große Indizes laufen um.
    pub fn at(&self, index: isize) -> Option<&T> {
        self.wrap(index).map(|i| &self.items[i])
    }

    pub fn node(&self, index: isize) -> Option<RingNode<'_, T>> {
        self.wrap(index).map(|index| RingNode { ring: self, index })
    }

    pub fn first(&self) -> Option<RingNode<'_, T>> {
        self.node(0)
    }

    /// Erster Knoten, dessen Daten `predicate(data, value)` erfüllen.
    pub fn find_node<V: ?Sized>(
        &self,
        value: &V,
        predicate: impl Fn(&T, &V) -> bool,
    ) -> Option<RingNode<'_, T>> {
        self.items
            .iter()
            .position(|item| predicate(item, value))
            .map(|index| RingNode { ring: self, index })
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Vec<U> {
        self.items.iter().map(f).collect()
    }

    /// Überlebende Elemente in ursprünglicher Reihenfolge.
    pub fn filter(&self, mut predicate: impl FnMut(&T) -> bool) -> Vec<T>
    where
        T: Clone,
    {
        self.items
            .iter()
            .filter(|item| predicate(*item))
            .cloned()
            .collect()
    }

    /// Besucht jeden Knoten genau einmal, beginnend beim ersten.
    pub fn for_each(&self, mut f: impl FnMut(RingNode<'_, T>, usize)) {
        for index in 0..self.items.len() {
            f(RingNode { ring: self, index }, index);
        }
    }

    pub fn some(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        self.items.iter().any(predicate)
    }

    pub fn every(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        self.items.iter().all(predicate)
    }

    pub fn random_node(&self, rng: &mut impl Rng) -> Option<RingNode<'_, T>> {
        if self.items.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.items.len());
        Some(RingNode { ring: self, index })
    }

    pub fn nodes(&self) -> impl Iterator<Item = RingNode<'_, T>> {
        (0..self.items.len()).map(move |index| RingNode { ring: self, index })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }
}

/// Zyklischer Index wie [`Ring::at`]; panikt nur bei einem leeren Ring.
impl<T> Index<isize> for Ring<T> {
    type Output = T;

    fn index(&self, index: isize) -> &T {
        match self.at(index) {
            Some(item) => item,
            None => panic!("index {index} into an empty ring"),
        }
    }
}

impl<T> From<Vec<T>> for Ring<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Ring<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Ring<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Ring<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
