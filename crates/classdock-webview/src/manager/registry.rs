use std::collections::HashMap;

use classdock_common::ViewId;
use tracing::{debug, warn};

use super::types::ManagedView;

/// Owns every managed view, keyed by id, remembering insertion order.
pub struct ViewRegistry<S> {
    views: HashMap<ViewId, ManagedView<S>>,
    order: Vec<ViewId>,
}

impl<S> ViewRegistry<S> {
    pub fn new() -> Self {
        Self {
            views: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn get(&self, id: &ViewId) -> Option<&ManagedView<S>> {
        self.views.get(id)
    }

    pub fn get_mut(&mut self, id: &ViewId) -> Option<&mut ManagedView<S>> {
        self.views.get_mut(id)
    }

    pub fn contains(&self, id: &ViewId) -> bool {
        self.views.contains_key(id)
    }

    /// Register a view. Refuses and returns `false` if the id is taken.
    pub fn insert(&mut self, view: ManagedView<S>) -> bool {
        if self.views.contains_key(&view.id) {
            warn!(id = %view.id, "view already registered, ignoring insert");
            return false;
        }
        debug!(id = %view.id, "view registered");
        self.order.push(view.id.clone());
        self.views.insert(view.id.clone(), view);
        true
    }

    pub fn remove(&mut self, id: &ViewId) -> Option<ManagedView<S>> {
        let view = self.views.remove(id)?;
        self.order.retain(|existing| existing != id);
        debug!(id = %id, "view unregistered");
        Some(view)
    }

    /// Ids in insertion order.
    pub fn ids(&self) -> Vec<ViewId> {
        self.order.clone()
    }

    /// Remove every view, in insertion order.
    pub fn drain(&mut self) -> Vec<ManagedView<S>> {
        let order = std::mem::take(&mut self.order);
        let mut drained = Vec::with_capacity(order.len());
        for id in order {
            if let Some(view) = self.views.remove(&id) {
                drained.push(view);
            }
        }
        drained
    }

    pub fn clear(&mut self) {
        self.drain();
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

impl<S> Default for ViewRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(id: &str) -> ManagedView<u32> {
        ManagedView::new(ViewId::from(id), 0, format!("https://{id}.example/"), false)
    }

    #[test]
    fn insert_refuses_duplicates() {
        let mut reg = ViewRegistry::new();
        assert!(reg.insert(view("mail")));
        let mut dup = view("mail");
        dup.surface = 7;
        assert!(!reg.insert(dup));
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get(&ViewId::from("mail")).unwrap().surface, 0);
    }

    #[test]
    fn ids_keep_insertion_order() {
        let mut reg = ViewRegistry::new();
        for id in ["cloud", "lms", "mail"] {
            reg.insert(view(id));
        }
        reg.remove(&ViewId::from("lms"));
        reg.insert(view("lms"));
        let ids: Vec<String> = reg.ids().iter().map(|id| id.to_string()).collect();
        assert_eq!(ids, vec!["cloud", "mail", "lms"]);
    }

    #[test]
    fn remove_absent_is_none() {
        let mut reg: ViewRegistry<u32> = ViewRegistry::new();
        assert!(reg.remove(&ViewId::from("nope")).is_none());
    }

    #[test]
    fn drain_empties_in_order() {
        let mut reg = ViewRegistry::new();
        reg.insert(view("a"));
        reg.insert(view("b"));
        let drained: Vec<String> = reg.drain().into_iter().map(|v| v.id.to_string()).collect();
        assert_eq!(drained, vec!["a", "b"]);
        assert!(reg.is_empty());
        assert!(reg.ids().is_empty());
    }
}
