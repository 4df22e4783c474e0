use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

use crate::frame::FrameScheduler;

struct Slot<H> {
    generation: u64,
    _handle: H,
}

/// Keeps at most one pending frame callback per key.
///
/// Scheduling under a key that already has a pending callback cancels the
/// older one, so only the most recent request for that key ever runs.
/// Keys never affect each other.
pub struct Coalescer<K, S: FrameScheduler> {
    scheduler: S,
    slots: Rc<RefCell<HashMap<K, Slot<S::Handle>>>>,
    next_generation: Cell<u64>,
}

impl<K, S> Coalescer<K, S>
where
    K: Eq + Hash + Clone + 'static,
    S: FrameScheduler,
    S::Handle: 'static,
{
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            slots: Rc::new(RefCell::new(HashMap::new())),
            next_generation: Cell::new(0),
        }
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn schedule(&self, key: K, callback: impl FnOnce() + 'static) {
        // Dropped outside the borrow: a handle's drop may call back into the host.
        let previous = self.slots.borrow_mut().remove(&key);
        drop(previous);

        let generation = self.next_generation.get().wrapping_add(1);
        self.next_generation.set(generation);

        let slots = Rc::downgrade(&self.slots);
        let slot_key = key.clone();
        let handle = self.scheduler.request(Box::new(move || {
            if let Some(slots) = slots.upgrade() {
                let finished = {
                    let mut slots = slots.borrow_mut();
                    let current = slots.get(&slot_key).map(|slot| slot.generation);
                    if current == Some(generation) {
                        slots.remove(&slot_key)
                    } else {
                        None
                    }
                };
                drop(finished);
            }
            callback();
        }));
        self.slots.borrow_mut().insert(
            key,
            Slot {
                generation,
                _handle: handle,
            },
        );
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.slots.borrow().contains_key(key)
    }

    pub fn pending_count(&self) -> usize {
        self.slots.borrow().len()
    }

    /// Cancels the pending callback for `key`. Returns whether one existed.
    pub fn cancel(&self, key: &K) -> bool {
        let removed = self.slots.borrow_mut().remove(key);
        removed.is_some()
    }

    pub fn cancel_all(&self) {
        let drained: Vec<_> = self.slots.borrow_mut().drain().collect();
        drop(drained);
    }
}
