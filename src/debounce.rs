//! Trailing-edge debounce bookkeeping.
//!
//! Every [`Debouncer::call`] supersedes the previous one. The host schedules
//! a timer per call carrying the returned ticket; when a timer fires it asks
//! [`Debouncer::fire`] whether its ticket is still the latest.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    generation: u64,
    pending: bool,
}

impl Debouncer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new call, invalidating any earlier ticket.
    pub fn call(&mut self) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        self.pending = true;
        Ticket(self.generation)
    }

    /// `true` exactly once, and only for the latest ticket.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if ticket.0 != self.generation || !self.pending {
            return false;
        }
        self.pending = false;
        true
    }
}
