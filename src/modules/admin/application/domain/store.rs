use super::entity::AdminEntity;

/// The authoritative in-memory list behind one admin page.
///
/// Lookups by a missing id leave the list untouched and report it through
/// the return value; nothing here fails.
#[derive(Debug, Clone)]
pub struct EntityStore<E> {
    items: Vec<E>,
}

impl<E: AdminEntity> EntityStore<E> {
    pub fn new(seed: Vec<E>) -> Self {
        Self { items: seed }
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&E> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn prepend(&mut self, item: E) {
        self.items.insert(0, item);
    }

    /// Replaces the record stored under `id`, keeping its position.
    pub fn replace(&mut self, id: &str, item: E) -> bool {
        match self.items.iter_mut().find(|existing| existing.id() == id) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<E> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    pub fn modify<F>(&mut self, id: &str, change: F) -> Option<&E>
    where
        F: FnOnce(&mut E),
    {
        let item = self.items.iter_mut().find(|item| item.id() == id)?;
        change(&mut *item);
        Some(&*item)
    }

    /// `candidate` if no other record uses it, otherwise the first free
    /// `candidate-2`, `candidate-3`, ... The record under `except` (the one
    /// being replaced) does not count as a collision.
    pub fn unique_id(&self, candidate: &str, except: Option<&str>) -> String {
        let taken = |id: &str| {
            self.items
                .iter()
                .any(|item| item.id() == id && Some(id) != except)
        };

        if !taken(candidate) {
            return candidate.to_string();
        }

        (2..)
            .map(|n| format!("{}-{}", candidate, n))
            .find(|id| !taken(id))
            .unwrap_or_else(|| candidate.to_string())
    }
}
