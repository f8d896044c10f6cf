use std::time::Duration;

/// Fixed-period trigger advanced by frame deltas.
///
/// The frame loop feeds elapsed time in; `advance` reports how many whole
/// periods completed, at most `max_catch_up` per call. Once cancelled it
/// never fires again.
#[derive(Clone, Debug)]
pub struct Periodic {
    period: Duration,
    accum: Duration,
    max_catch_up: u32,
    cancelled: bool,
}

impl Periodic {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            accum: Duration::ZERO,
            max_catch_up: u32::MAX,
            cancelled: false,
        }
    }

    /// Limit the fires reported by a single `advance`. Periods past the
    /// limit are dropped, not carried into later calls.
    pub fn with_catch_up_limit(mut self, max_fires: u32) -> Self {
        self.max_catch_up = max_fires;
        self
    }

    /// Accumulate `dt` and return the number of periods that elapsed.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if self.cancelled || self.period.is_zero() {
            return 0;
        }
        self.accum += dt;
        let period_ns = self.period.as_nanos();
        let elapsed_ns = self.accum.as_nanos();
        self.accum = Duration::from_nanos((elapsed_ns % period_ns) as u64);
        let whole = elapsed_ns / period_ns;
        if whole > u128::from(self.max_catch_up) {
            log::debug!("dropped {} periods past the catch-up limit", whole - u128::from(self.max_catch_up));
        }
        whole.min(u128::from(self.max_catch_up)) as u32
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.accum = Duration::ZERO;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

/// Repeat-until-deadline primitive driven by wall-clock polling.
///
/// `poll(now)` answers whether the repeated work should run for this frame.
/// It does so while `now <= end` and the repeat has not been cancelled; the
/// first poll past the deadline finishes the repeat for good.
#[derive(Clone, Debug)]
pub struct DeadlineRepeat {
    end_ms: f64,
    finished: bool,
}

impl DeadlineRepeat {
    pub fn start(now_ms: f64, duration_ms: f64) -> Self {
        Self {
            end_ms: now_ms + duration_ms,
            finished: false,
        }
    }

    pub fn poll(&mut self, now_ms: f64) -> bool {
        if self.finished {
            return false;
        }
        if now_ms > self.end_ms {
            self.finished = true;
            return false;
        }
        true
    }

    pub fn cancel(&mut self) {
        self.finished = true;
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn end_ms(&self) -> f64 {
        self.end_ms
    }
}
