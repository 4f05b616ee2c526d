use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Dense id interner for arbitrary keys.
#[derive(Debug, Clone)]
pub struct Interner<K>
where
    K: Clone + Eq + Hash,
{
    entries: Vec<K>,
    key_to_id: HashMap<K, usize>,
}

impl<K> Default for Interner<K>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            key_to_id: HashMap::new(),
        }
    }
}

impl<K> Interner<K>
where
    K: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the key if needed and return its stable dense id.
    pub fn intern(&mut self, key: K) -> usize {
        if let Some(id) = self.key_to_id.get(&key) {
            return *id;
        }

        let id = self.entries.len();
        self.entries.push(key.clone());
        self.key_to_id.insert(key, id);
        id
    }

    pub fn get(&self, id: usize) -> Option<&K> {
        self.entries.get(id)
    }

    pub fn key_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.key_to_id.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
