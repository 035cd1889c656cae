//! FIFO waiting lists, one per queue type

use std::collections::{BTreeMap, VecDeque};

use crate::types::{PlayerId, QueueEntry, QueueType, SimTime};

/// Waiting list for a single queue type, oldest joiner first
#[derive(Debug, Clone, Default)]
pub struct MatchQueue {
    entries: VecDeque<QueueEntry>,
}

impl MatchQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, player_id: PlayerId, join_time: SimTime) {
        self.entries.push_back(QueueEntry {
            player_id,
            join_time,
        });
    }

    /// Remove and return up to `count` of the oldest entries
    pub fn pop_oldest(&mut self, count: usize) -> Vec<QueueEntry> {
        let count = count.min(self.entries.len());
        self.entries.drain(..count).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueueEntry> {
        self.entries.iter()
    }
}

/// All waiting lists of a run
#[derive(Debug, Clone)]
pub struct QueueSet {
    queues: BTreeMap<QueueType, MatchQueue>,
}

impl QueueSet {
    pub fn new() -> Self {
        Self {
            queues: QueueType::ALL
                .iter()
                .map(|qt| (*qt, MatchQueue::new()))
                .collect(),
        }
    }

    pub fn get(&self, queue_type: QueueType) -> Option<&MatchQueue> {
        self.queues.get(&queue_type)
    }

    pub fn get_mut(&mut self, queue_type: QueueType) -> &mut MatchQueue {
        self.queues.entry(queue_type).or_default()
    }

    /// Number of entries waiting in each queue type
    pub fn lengths(&self) -> BTreeMap<QueueType, usize> {
        self.queues.iter().map(|(qt, q)| (*qt, q.len())).collect()
    }

    pub fn total_waiting(&self) -> usize {
        self.queues.values().map(MatchQueue::len).sum()
    }
}

impl Default for QueueSet {
    fn default() -> Self {
        Self::new()
    }
}
