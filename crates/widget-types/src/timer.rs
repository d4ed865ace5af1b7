use std::time::Duration;

/// Identifies one scheduled one-shot timer.
///
/// Tokens are never reused within a widget, so a firing that arrives after its
/// timer was cancelled or replaced can be recognised and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl TimerToken {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Hands out fresh tokens.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenSource {
    next: u64,
}

impl TokenSource {
    pub fn issue(&mut self) -> TimerToken {
        self.next += 1;
        TimerToken(self.next)
    }
}

/// Deterministic timer queue driven by explicit time advancement.
///
/// Used where no real clock is wanted: tests and headless hosts.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    pending: Vec<(Duration, TimerToken)>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the queue was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn schedule(&mut self, token: TimerToken, delay: Duration) {
        self.pending.push((self.now + delay, token));
    }

    /// Returns `true` when the timer was still pending.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        let before = self.pending.len();
        self.pending.retain(|(_, t)| *t != token);
        self.pending.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Pop the earliest timer due at or before `now + by`, advancing the clock
    /// to its deadline. When nothing is due the clock moves to `now + by` and
    /// `None` is returned.
    pub fn advance_next(&mut self, by: Duration) -> Option<TimerToken> {
        let limit = self.now + by;
        let next = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, (due, _))| *due <= limit)
            .min_by_key(|(_, (due, token))| (*due, *token))
            .map(|(i, _)| i);

        match next {
            Some(i) => {
                let (due, token) = self.pending.remove(i);
                self.now = due;
                Some(token)
            }
            None => {
                self.now = limit;
                None
            }
        }
    }
}
