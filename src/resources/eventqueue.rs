//! Fixed-capacity circular event queue.
//!
//! `head` is the next write slot and `tail` the next read slot. The queue is
//! empty when they are equal and full when advancing `head` would make them
//! equal, so one slot always stays unused and at most `CAPACITY - 1` events
//! are pending at once. Overflowing events are dropped.

use bevy_ecs::prelude::Resource;
use log::trace;

use crate::events::gameevent::GameEvent;

pub const EVENT_QUEUE_CAPACITY: usize = 20;

#[derive(Resource, Debug, Clone)]
pub struct EventQueue {
    slots: [Option<GameEvent>; EVENT_QUEUE_CAPACITY],
    head: usize,
    tail: usize,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self {
            slots: [None; EVENT_QUEUE_CAPACITY],
            head: 0,
            tail: 0,
        }
    }
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `event` at the head. Returns `false` and drops it when full.
    pub fn queue_event(&mut self, event: GameEvent) -> bool {
        if self.is_full() {
            trace!("event queue full, dropping {}", event.name());
            return false;
        }
        self.slots[self.head] = Some(event);
        self.head = (self.head + 1) % EVENT_QUEUE_CAPACITY;
        true
    }

    /// Pop the oldest event, or `None` when empty.
    pub fn dequeue_event(&mut self) -> Option<GameEvent> {
        if self.is_queue_empty() {
            return None;
        }
        let event = self.slots[self.tail].take();
        self.tail = (self.tail + 1) % EVENT_QUEUE_CAPACITY;
        event
    }

    pub fn is_queue_empty(&self) -> bool {
        self.head == self.tail
    }

    pub fn is_full(&self) -> bool {
        (self.head + 1) % EVENT_QUEUE_CAPACITY == self.tail
    }

    pub fn len(&self) -> usize {
        (self.head + EVENT_QUEUE_CAPACITY - self.tail) % EVENT_QUEUE_CAPACITY
    }

    pub fn is_empty(&self) -> bool {
        self.is_queue_empty()
    }

    /// Number of events the queue can hold at once.
    pub fn capacity(&self) -> usize {
        EVENT_QUEUE_CAPACITY - 1
    }

    /// Drop everything pending and rewind to slot 0.
    pub fn reset(&mut self) {
        self.slots = [None; EVENT_QUEUE_CAPACITY];
        self.head = 0;
        self.tail = 0;
    }
}
