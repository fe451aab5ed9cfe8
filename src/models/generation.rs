use leptos::prelude::*;

/// Ticket counter for async requests that replace each other's results.
///
/// Each request takes a ticket before it starts and checks it when the
/// response arrives; only the holder of the newest ticket may write.
#[derive(Clone, Copy)]
pub struct Generation(StoredValue<u64>);

impl Generation {
    pub fn new() -> Self {
        Self(StoredValue::new(0))
    }

    /// Start a new request. Every earlier ticket becomes stale.
    pub fn next(&self) -> u64 {
        self.0.update_value(|g| *g += 1);
        self.0.get_value()
    }

    /// Ticket for a request that continues the current one (e.g. the next
    /// page of the same listing).
    pub fn current(&self) -> u64 {
        self.0.get_value()
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.get_value() == ticket
    }
}

impl Default for Generation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_ticket_invalidates_older() {
        let generation = Generation::new();
        let first = generation.next();
        assert!(generation.is_current(first));

        let second = generation.next();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn continuation_shares_the_ticket_until_replaced() {
        let generation = Generation::new();
        let listing = generation.next();
        let more = generation.current();
        assert_eq!(listing, more);
        assert!(generation.is_current(more));

        // The listing switched while the next page was in flight
        generation.next();
        assert!(!generation.is_current(more));
    }

    #[test]
    fn copies_share_the_counter() {
        let generation = Generation::new();
        let copy = generation;
        let ticket = generation.next();
        assert!(copy.is_current(ticket));
        copy.next();
        assert!(!generation.is_current(ticket));
    }
}
