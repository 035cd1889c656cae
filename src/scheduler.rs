//! Deterministic event scheduler for the simulation.
//!
//! Pending events are kept in a min-heap keyed by:
//! 1. Event time (earlier first)
//! 2. Insertion sequence (FIFO for equal times)
//!
//! The sequence number makes ordering total, so a fixed seed always replays
//! the same event order.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{Result, SimulationError};
use crate::types::{EventKind, SimTime};

/// Slack allowed when an event is scheduled marginally before the clock.
pub const TIME_TOLERANCE: f64 = 1e-9;

/// Key for ordering events in the queue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventKey {
    /// When this event should be processed.
    pub time: SimTime,
    /// Sequence number for deterministic FIFO ordering.
    pub sequence: u64,
}

impl Eq for EventKey {}

impl Ord for EventKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.time.total_cmp(&other.time) {
            Ordering::Equal => {}
            ord => return ord,
        }

        self.sequence.cmp(&other.sequence)
    }
}

impl PartialOrd for EventKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A pending event together with its ordering key
#[derive(Debug, Clone)]
pub struct ScheduledEvent {
    pub key: EventKey,
    pub kind: EventKind,
}

impl ScheduledEvent {
    pub fn time(&self) -> SimTime {
        self.key.time
    }
}

impl PartialEq for ScheduledEvent {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for ScheduledEvent {}

impl PartialOrd for ScheduledEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScheduledEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; reverse so the earliest key surfaces first
        other.key.cmp(&self.key)
    }
}

/// Time-ordered queue of pending simulation events
#[derive(Debug, Default)]
pub struct EventScheduler {
    heap: BinaryHeap<ScheduledEvent>,
    next_sequence: u64,
    last_popped: SimTime,
}

impl EventScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an event at `time`.
    ///
    /// Fails with [`SimulationError::InvalidTime`] if `time` is not finite or
    /// lies before the time of the most recently extracted event.
    pub fn schedule(&mut self, time: SimTime, kind: EventKind) -> Result<()> {
        let floor = self.last_popped - TIME_TOLERANCE;
        if !time.is_finite() || time < floor {
            return Err(SimulationError::InvalidTime {
                time,
                floor: self.last_popped,
            }
            .into());
        }

        let key = EventKey {
            time,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.heap.push(ScheduledEvent { key, kind });
        Ok(())
    }

    /// Remove and return the earliest pending event, or `None` when drained.
    pub fn pop_earliest(&mut self) -> Option<ScheduledEvent> {
        let event = self.heap.pop()?;
        self.last_popped = self.last_popped.max(event.time());
        Some(event)
    }

    /// Time of the earliest pending event without removing it.
    pub fn peek_time(&self) -> Option<SimTime> {
        self.heap.peek().map(ScheduledEvent::time)
    }

    /// Time of the most recently extracted event.
    pub fn last_popped_time(&self) -> SimTime {
        self.last_popped
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
