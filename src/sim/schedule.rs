//! Deferred events on the wall clock
//!
//! Events are never run from a timer thread. The tick drains whatever is due
//! at its own start, so a deferred action lands on the first tick boundary
//! after its delay. Nothing scheduled before a `clear` is ever delivered.

#[derive(Debug, Clone)]
struct Entry<E> {
    /// Insertion order, breaks ties between equal due times
    seq: u64,
    due_ms: f64,
    event: E,
}

/// One-shot timer queue keyed by wall-clock milliseconds
#[derive(Debug, Clone)]
pub struct Timers<E> {
    entries: Vec<Entry<E>>,
    next_seq: u64,
}

impl<E> Default for Timers<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }
}

impl<E> Timers<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `event` on the first drain at or after `now_ms + delay_ms`
    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64, event: E) {
        self.entries.push(Entry {
            seq: self.next_seq,
            due_ms: now_ms + delay_ms,
            event,
        });
        self.next_seq += 1;
    }

    /// Remove and return every due event, earliest first
    pub fn take_due(&mut self, now_ms: f64) -> Vec<E> {
        if self.entries.iter().all(|e| e.due_ms > now_ms) {
            return Vec::new();
        }
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.entries.drain(..).partition(|e| e.due_ms <= now_ms);
        self.entries = pending;
        due.sort_by(|a, b| {
            a.due_ms
                .partial_cmp(&b.due_ms)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.seq.cmp(&b.seq))
        });
        due.into_iter().map(|e| e.event).collect()
    }

    /// Drop everything pending
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
