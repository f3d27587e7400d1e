use std::fmt::Display;

/// Hit/miss counters produced by one worker and merged by the coordinator.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub hits: u64,
    pub misses: u64,
}

impl Tally {
    pub fn record(&mut self, hit: bool) {
        if hit {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
    }

    pub fn merge(&self, other: &Self) -> Self {
        Tally {
            hits: self.hits + other.hits,
            misses: self.misses + other.misses,
        }
    }

    pub fn total(&self) -> u64 {
        self.hits + self.misses
    }
}

impl Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} hits / {} misses ({} tests)",
            self.hits,
            self.misses,
            self.total()
        )
    }
}
