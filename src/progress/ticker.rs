use std::time::{Duration, Instant};

/// Ticks owed after a stall are dropped past this many
pub const MAX_CATCH_UP: u32 = 10;

/// Fixed-interval deadline for the UI loop.
///
/// The loop waits on input for at most [`Ticker::timeout`], then asks
/// [`Ticker::fire`] how many ticks fell due in the meantime.
pub struct Ticker {
    interval: Duration,
    deadline: Instant,
}

impl Ticker {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Ticker {
            interval,
            deadline: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn timeout(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }

    pub fn fire(&mut self, now: Instant) -> u32 {
        if now < self.deadline || self.interval.is_zero() {
            return 0;
        }

        let overdue = now - self.deadline;
        let due = 1 + (overdue.as_nanos() / self.interval.as_nanos()) as u32;

        match due > MAX_CATCH_UP {
            true => {
                self.deadline = now + self.interval;
                MAX_CATCH_UP
            }
            false => {
                self.deadline += self.interval * due;
                due
            }
        }
    }
}
