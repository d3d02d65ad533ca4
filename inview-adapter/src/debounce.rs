/// A cancellable debounce timer driven by injected timestamps.
///
/// "Debounce" here means deferring an action until a quiet period of
/// `delay_ms` has elapsed since the last trigger: every [`trigger`] call
/// supersedes the pending deadline, so a burst of triggers results in a
/// single firing after the burst ends.
///
/// There is no real timer. The owner calls [`poll`] with the current time
/// (e.g. once per frame or per event-queue turn); `poll` reports `true`
/// exactly once per scheduled firing.
///
/// [`trigger`]: Debouncer::trigger
/// [`poll`]: Debouncer::poll
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Debouncer {
    delay_ms: u64,
    deadline_ms: Option<u64>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            deadline_ms: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Schedules (or reschedules) the deadline at `now_ms + delay_ms`.
    ///
    /// A pending deadline is cancelled and replaced; triggers never stack.
    pub fn trigger(&mut self, now_ms: u64) {
        self.deadline_ms = Some(now_ms.saturating_add(self.delay_ms));
    }

    /// Fires the pending deadline if it has been reached, clearing it.
    ///
    /// With `delay_ms = 0`, a trigger fires on the next poll at the same
    /// timestamp.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }

    /// Drops the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }
}
