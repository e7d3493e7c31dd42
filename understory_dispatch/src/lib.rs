// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Dispatch: a synchronous, `no_std` named-event dispatcher.
//!
//! ## Overview
//!
//! This crate provides [`EventManager`], a small publish/subscribe hub keyed by event name.
//! It knows nothing about what the events mean. A state engine (for example a slider model)
//! decides which names to dispatch, and a wiring layer registers the names and subscribes
//! observers once up front.
//!
//! ## Semantics
//!
//! - [`EventManager::register_event`] creates an empty observer list. Registering a name twice
//!   replaces its list and drops the existing observers.
//! - [`EventManager::add_event_listener`] appends an observer. Unregistered names are ignored.
//! - [`EventManager::dispatch_event`] calls every observer of a name in subscription order.
//! - [`EventManager::dispatch_events`] dispatches several names one after another. It does not
//!   batch: observers of an earlier name run to completion before the next name is looked up.
//!
//! ## Re-entrancy
//!
//! Dispatch is depth-first on the call stack. Observers may dispatch, subscribe, or unsubscribe
//! while a dispatch is in progress. Each dispatch iterates a snapshot of the observer list taken
//! when it starts, so list mutation only affects later dispatches.
//!
//! ## Minimal example
//!
//! ```
//! use core::cell::RefCell;
//! use std::rc::Rc;
//! use understory_dispatch::EventManager;
//!
//! let events: EventManager<&str> = EventManager::new();
//! events.register_event("moved");
//! events.register_event("resized");
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let l = log.clone();
//! events.add_event_listener(&"moved", move || l.borrow_mut().push("moved"));
//! let l = log.clone();
//! events.add_event_listener(&"resized", move || l.borrow_mut().push("resized"));
//!
//! events.dispatch_events(&["resized", "moved"]);
//! assert_eq!(*log.borrow(), ["resized", "moved"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod manager;

pub use manager::{EventManager, ListenerId, Observer};
