use std::thread;
use std::time::Duration;

use backoff::backoff::Backoff;

use crate::constants::defaults;

/// Source of blocking waits between attempts.
pub trait Clock {
    fn sleep(&self, duration: Duration);
}

impl<C: Clock + ?Sized> Clock for &C {
    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration);
    }
}

/// Sleeps the calling thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub interval: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            attempts: defaults::RETRY_ATTEMPTS,
            interval: defaults::RETRY_INTERVAL,
        }
    }
}

impl RetryPolicy {
    pub fn backoff(&self) -> FixedInterval {
        FixedInterval::new(*self)
    }
}

/// Yields the same delay a fixed number of times, then gives up.
#[derive(Clone, Debug)]
pub struct FixedInterval {
    policy: RetryPolicy,
    remaining: u32,
}

impl FixedInterval {
    pub fn new(policy: RetryPolicy) -> Self {
        FixedInterval {
            policy,
            remaining: policy.attempts,
        }
    }
}

impl Backoff for FixedInterval {
    fn reset(&mut self) {
        self.remaining = self.policy.attempts;
    }

    fn next_backoff(&mut self) -> Option<Duration> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.policy.interval)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Acquisition<T> {
    Ready(T),
    TimedOut { attempts: u32 },
}

/// Repeatedly waits and then probes until the probe yields a value or the
/// backoff is exhausted. The wait comes before each probe, so a `TimedOut`
/// result means the whole budget has been spent.
pub fn acquire<T, B, C, F>(backoff: &mut B, clock: &C, mut probe: F) -> Acquisition<T>
where
    B: Backoff,
    C: Clock,
    F: FnMut(u32) -> Option<T>,
{
    let mut attempts = 0;
    while let Some(delay) = backoff.next_backoff() {
        clock.sleep(delay);
        attempts += 1;
        if let Some(value) = probe(attempts) {
            return Acquisition::Ready(value);
        }
        log::debug!("Attempt {} did not succeed; retrying", attempts);
    }
    Acquisition::TimedOut { attempts }
}
