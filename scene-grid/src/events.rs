//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Grid event notifications

use crate::index::TileIndex;
use std::collections::HashMap;
use std::fmt;

/// Event published to grid listeners
#[derive(PartialEq, Clone, Debug)]
pub struct GridEvent {
    pub event_type: String,
    /// Tile the event refers to, if any
    pub index: Option<TileIndex>,
}

impl GridEvent {
    pub fn new(event_type: &str) -> GridEvent {
        GridEvent {
            event_type: event_type.to_string(),
            index: None,
        }
    }
    pub fn for_tile(event_type: &str, index: TileIndex) -> GridEvent {
        GridEvent {
            event_type: event_type.to_string(),
            index: Some(index),
        }
    }
}

pub type Listener = Box<dyn FnMut(&GridEvent) + Send>;

/// Handle returned on registration, used for removal
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct ListenerId(u64);

/// Publish/subscribe capability
pub trait EventTarget {
    fn add_event_listener(&mut self, event_type: &str, listener: Listener) -> ListenerId;
    fn has_event_listener(&self, event_type: &str, id: ListenerId) -> bool;
    fn remove_event_listener(&mut self, event_type: &str, id: ListenerId) -> bool;
    fn dispatch_event(&mut self, event: &GridEvent);
}

/// Listener registry keyed by event type
pub struct EventDispatcher {
    listeners: HashMap<String, Vec<(ListenerId, Listener)>>,
    next_id: u64,
}

impl EventDispatcher {
    pub fn new() -> EventDispatcher {
        EventDispatcher {
            listeners: HashMap::new(),
            next_id: 0,
        }
    }
}

impl Default for EventDispatcher {
    fn default() -> EventDispatcher {
        EventDispatcher::new()
    }
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<&str, usize> = self
            .listeners
            .iter()
            .map(|(event_type, list)| (event_type.as_str(), list.len()))
            .collect();
        f.debug_struct("EventDispatcher")
            .field("listeners", &counts)
            .finish()
    }
}

impl EventTarget for EventDispatcher {
    fn add_event_listener(&mut self, event_type: &str, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners
            .entry(event_type.to_string())
            .or_insert_with(Vec::new)
            .push((id, listener));
        id
    }
    fn has_event_listener(&self, event_type: &str, id: ListenerId) -> bool {
        self.listeners
            .get(event_type)
            .map_or(false, |list| list.iter().any(|(lid, _)| *lid == id))
    }
    fn remove_event_listener(&mut self, event_type: &str, id: ListenerId) -> bool {
        match self.listeners.get_mut(event_type) {
            Some(list) => {
                let len = list.len();
                list.retain(|(lid, _)| *lid != id);
                len != list.len()
            }
            None => false,
        }
    }
    fn dispatch_event(&mut self, event: &GridEvent) {
        if let Some(list) = self.listeners.get_mut(&event.event_type) {
            debug!(
                "Dispatching '{}' to {} listener(s)",
                event.event_type,
                list.len()
            );
            for (_, listener) in list.iter_mut() {
                listener(event);
            }
        }
    }
}
