//! Ordering for async image loads

/// Hands out a ticket per started load. Only the most recent ticket is
/// current, so a slow read that finishes after a newer one is discarded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSequence {
    latest: u64,
}

impl LoadSequence {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_is_current() {
        let mut loads = LoadSequence::default();
        let ticket = loads.issue();
        assert!(loads.is_current(ticket));
    }

    #[test]
    fn test_slow_load_is_superseded() {
        let mut loads = LoadSequence::default();
        let large = loads.issue();
        let small = loads.issue();
        // small finishes first, then large
        assert!(loads.is_current(small));
        assert!(!loads.is_current(large));
    }

    #[test]
    fn test_no_ticket_is_current_before_issue() {
        let loads = LoadSequence::default();
        assert!(!loads.is_current(1));
    }
}
