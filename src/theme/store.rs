//! Single source of truth for the active theme mode.
//!
//! The store is an explicit, constructed object handed to consumers by
//! reference rather than a process-wide global, so independent viewer
//! instances never interfere. It follows the single-threaded cooperative
//! model of the UI loop: `toggle` mutates the mode and notifies every live
//! subscriber synchronously, in registration order, before returning.

use super::ThemeMode;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener = Box<dyn FnMut(ThemeMode)>;

struct Entry {
    id: u64,
    listener: Rc<RefCell<Listener>>,
}

struct Inner {
    mode: ThemeMode,
    next_id: u64,
    entries: Vec<Entry>,
}

/// Holder of the current [`ThemeMode`] plus its subscriber list.
///
/// Cheap to clone; clones share the same underlying state, so a clone can be
/// moved into a listener or an input loop while the original keeps toggling.
#[derive(Clone)]
pub struct ThemeStore {
    inner: Rc<RefCell<Inner>>,
}

impl ThemeStore {
    /// Create a store starting in `initial` mode.
    pub fn new(initial: ThemeMode) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                mode: initial,
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Current mode. Pure read, never fails.
    pub fn mode(&self) -> ThemeMode {
        self.inner.borrow().mode
    }

    /// Flip `Dark ⇄ Light` and notify every live subscriber with the new
    /// mode, synchronously and in registration order, before returning.
    pub fn toggle(&self) {
        let mode = {
            let mut inner = self.inner.borrow_mut();
            inner.mode = inner.mode.flipped();
            inner.mode
        };
        tracing::debug!(mode = %mode, "theme toggled");

        // Snapshot the subscriber list so listeners run with no borrow held;
        // a listener may subscribe or unsubscribe reentrantly.
        let snapshot: Vec<(u64, Rc<RefCell<Listener>>)> = self
            .inner
            .borrow()
            .entries
            .iter()
            .map(|entry| (entry.id, Rc::clone(&entry.listener)))
            .collect();
        for (id, listener) in snapshot {
            if self.is_registered(id) {
                (listener.borrow_mut())(mode);
            }
        }
    }

    /// Register a listener invoked on every toggle with the new mode.
    ///
    /// The returned handle unsubscribes on [`Subscription::unsubscribe`] or
    /// when dropped.
    pub fn subscribe(&self, listener: impl FnMut(ThemeMode) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.entries.push(Entry {
            id,
            listener: Rc::new(RefCell::new(Box::new(listener))),
        });
        Subscription {
            inner: Rc::downgrade(&self.inner),
            id,
            live: true,
        }
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    fn is_registered(&self, id: u64) -> bool {
        self.inner.borrow().entries.iter().any(|entry| entry.id == id)
    }
}

impl Default for ThemeStore {
    /// Fresh stores start in dark mode.
    fn default() -> Self {
        Self::new(ThemeMode::Dark)
    }
}

/// Handle tying one listener registration to the store.
pub struct Subscription {
    inner: Weak<RefCell<Inner>>,
    id: u64,
    live: bool,
}

impl Subscription {
    /// Remove the listener; subsequent toggles no longer invoke it.
    pub fn unsubscribe(mut self) {
        self.remove();
    }

    fn remove(&mut self) {
        if !self.live {
            return;
        }
        self.live = false;
        if let Some(inner) = self.inner.upgrade() {
            inner.borrow_mut().entries.retain(|entry| entry.id != self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn fresh_store_defaults_to_dark() {
        let store = ThemeStore::default();
        assert_eq!(store.mode(), ThemeMode::Dark);
    }

    #[test]
    fn toggle_flips_and_double_toggle_restores() {
        let store = ThemeStore::default();
        store.toggle();
        assert_eq!(store.mode(), ThemeMode::Light);
        store.toggle();
        assert_eq!(store.mode(), ThemeMode::Dark);
    }

    #[test]
    fn every_subscriber_is_notified_exactly_once_per_toggle() {
        let store = ThemeStore::default();
        let a = Rc::new(Cell::new(0u32));
        let b = Rc::new(Cell::new(0u32));
        let a_hits = Rc::clone(&a);
        let b_hits = Rc::clone(&b);
        let _sub_a = store.subscribe(move |_| a_hits.set(a_hits.get() + 1));
        let _sub_b = store.subscribe(move |_| b_hits.set(b_hits.get() + 1));

        store.toggle();
        assert_eq!(a.get(), 1);
        assert_eq!(b.get(), 1);
    }

    #[test]
    fn listeners_run_in_subscription_order_with_new_mode() {
        let store = ThemeStore::default();
        let order = Rc::new(RefCell::new(Vec::new()));
        let first = Rc::clone(&order);
        let second = Rc::clone(&order);
        let _sub_a = store.subscribe(move |mode| first.borrow_mut().push(("a", mode)));
        let _sub_b = store.subscribe(move |mode| second.borrow_mut().push(("b", mode)));

        store.toggle();
        assert_eq!(
            order.borrow().as_slice(),
            &[("a", ThemeMode::Light), ("b", ThemeMode::Light)]
        );
    }

    #[test]
    fn unsubscribe_stops_notifications_for_that_handle_only() {
        let store = ThemeStore::default();
        let a = Rc::new(Cell::new(0u32));
        let b = Rc::new(Cell::new(0u32));
        let a_hits = Rc::clone(&a);
        let b_hits = Rc::clone(&b);
        let sub_a = store.subscribe(move |_| a_hits.set(a_hits.get() + 1));
        let _sub_b = store.subscribe(move |_| b_hits.set(b_hits.get() + 1));

        store.toggle();
        sub_a.unsubscribe();
        store.toggle();

        assert_eq!(a.get(), 1);
        assert_eq!(b.get(), 2);
        assert_eq!(store.subscriber_count(), 1);
    }

    #[test]
    fn dropping_the_handle_unsubscribes() {
        let store = ThemeStore::default();
        let hits = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&hits);
        {
            let _sub = store.subscribe(move |_| counter.set(counter.get() + 1));
            store.toggle();
        }
        store.toggle();
        assert_eq!(hits.get(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn listener_unsubscribing_a_peer_mid_notification_is_safe() {
        let store = ThemeStore::default();
        let b = Rc::new(Cell::new(0u32));
        let b_hits = Rc::clone(&b);

        // `a` removes `b` before `b` runs for this toggle.
        let sub_b_slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let slot = Rc::clone(&sub_b_slot);
        let _sub_a = store.subscribe(move |_| {
            if let Some(sub) = slot.borrow_mut().take() {
                sub.unsubscribe();
            }
        });
        let sub_b = store.subscribe(move |_| b_hits.set(b_hits.get() + 1));
        *sub_b_slot.borrow_mut() = Some(sub_b);

        store.toggle();
        assert_eq!(b.get(), 0);
        assert_eq!(store.subscriber_count(), 1);
    }

    #[test]
    fn clones_share_state() {
        let store = ThemeStore::default();
        let handle = store.clone();
        handle.toggle();
        assert_eq!(store.mode(), ThemeMode::Light);
    }
}
