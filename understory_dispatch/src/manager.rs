// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event manager implementation.

use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

/// An observer callback. Observers receive no arguments; they read whatever state they need.
pub type Observer = Rc<dyn Fn()>;

/// Handle returned by [`EventManager::add_event_listener`], used to unsubscribe.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ListenerId(u64);

/// Named-event publish/subscribe hub.
///
/// All methods take `&self`. Share the manager behind an `Rc` so observers can dispatch or
/// subscribe while another dispatch is running.
pub struct EventManager<E> {
    lists: RefCell<BTreeMap<E, Vec<(ListenerId, Observer)>>>,
    next_id: Cell<u64>,
}

impl<E: core::fmt::Debug> core::fmt::Debug for EventManager<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let lists = self.lists.borrow();
        let mut map = f.debug_map();
        for (name, observers) in lists.iter() {
            map.entry(name, &observers.len());
        }
        map.finish()
    }
}

impl<E: Ord> Default for EventManager<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Ord> EventManager<E> {
    /// Create a manager with no registered events.
    pub fn new() -> Self {
        Self {
            lists: RefCell::new(BTreeMap::new()),
            next_id: Cell::new(0),
        }
    }

    /// Create an empty observer list for `name`.
    ///
    /// Registering a name that already exists replaces its list; existing observers are dropped.
    pub fn register_event(&self, name: E) {
        self.lists.borrow_mut().insert(name, Vec::new());
    }

    /// Returns true if `name` has been registered.
    pub fn is_registered(&self, name: &E) -> bool {
        self.lists.borrow().contains_key(name)
    }

    /// Number of observers currently subscribed to `name` (zero when unregistered).
    pub fn listener_count(&self, name: &E) -> usize {
        self.lists.borrow().get(name).map_or(0, Vec::len)
    }

    /// Append `observer` to the list for `name`.
    ///
    /// Returns `None` and drops the observer if `name` was never registered.
    pub fn add_event_listener(&self, name: &E, observer: impl Fn() + 'static) -> Option<ListenerId> {
        let mut lists = self.lists.borrow_mut();
        let list = lists.get_mut(name)?;
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        list.push((id, Rc::new(observer)));
        Some(id)
    }

    /// Remove a previously added observer. Returns true if it was found.
    pub fn remove_event_listener(&self, name: &E, id: ListenerId) -> bool {
        let mut lists = self.lists.borrow_mut();
        let Some(list) = lists.get_mut(name) else {
            return false;
        };
        let before = list.len();
        list.retain(|(other, _)| *other != id);
        list.len() != before
    }

    /// Call every observer of `name`, in subscription order.
    ///
    /// Unregistered names are ignored.
    pub fn dispatch_event(&self, name: &E) {
        // Snapshot so observers can mutate the list without invalidating this walk.
        let snapshot: Vec<Observer> = match self.lists.borrow().get(name) {
            Some(list) => list.iter().map(|(_, o)| o.clone()).collect(),
            None => return,
        };
        for observer in snapshot {
            observer();
        }
    }

    /// Dispatch each name in order, sequentially.
    pub fn dispatch_events<'a>(&self, names: impl IntoIterator<Item = &'a E>)
    where
        E: 'a,
    {
        for name in names {
            self.dispatch_event(name);
        }
    }
}
