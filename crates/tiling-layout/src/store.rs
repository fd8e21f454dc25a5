// Store: owns the current layout tree and threads every action through the
// reducer, notifying subscribers when the tree changes.

use std::sync::Arc;

use crate::action::Action;
use crate::ids::{IdSource, SequentialIds};
use crate::node::TilesPanel;
use crate::reducer::{reduce, Transition};

pub type SubscriptionId = u64;

type Listener<T> = Box<dyn FnMut(&Transition<T>)>;

pub struct TilesStore<T> {
    tree: Arc<TilesPanel<T>>,
    ids: Box<dyn IdSource>,
    listeners: Vec<(SubscriptionId, Listener<T>)>,
    next_subscription: SubscriptionId,
}

impl<T: Clone> TilesStore<T> {
    pub fn new(tree: TilesPanel<T>) -> Self {
        Self::with_ids(Arc::new(tree), SequentialIds::default())
    }

    pub fn with_ids(tree: Arc<TilesPanel<T>>, ids: impl IdSource + 'static) -> Self {
        Self {
            tree,
            ids: Box::new(ids),
            listeners: Vec::new(),
            next_subscription: 1,
        }
    }

    /// Current tree. Cheap to clone; never mutated in place.
    pub fn state(&self) -> &Arc<TilesPanel<T>> {
        &self.tree
    }

    /// Reduce `action` against the current tree. Listeners run after the
    /// new tree is in place, and only if it changed.
    pub fn dispatch(&mut self, action: Action<T>) -> Transition<T> {
        let transition = reduce(&self.tree, &action, self.ids.as_mut());
        if transition.changed {
            self.tree = Arc::clone(&transition.tree);
            for (_, listener) in &mut self.listeners {
                listener(&transition);
            }
        }
        transition
    }

    /// Dispatch a batch in order, returning every transition.
    pub fn dispatch_all(
        &mut self,
        actions: impl IntoIterator<Item = Action<T>>,
    ) -> Vec<Transition<T>> {
        actions.into_iter().map(|action| self.dispatch(action)).collect()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&Transition<T>) + 'static) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    /// Adopt a tree produced elsewhere (e.g. a restored session). Listeners
    /// are not notified.
    pub fn replace(&mut self, tree: Arc<TilesPanel<T>>) {
        log::debug!("store: replacing layout with root {}", tree.id());
        self.tree = tree;
    }
}
