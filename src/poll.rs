//! Wall-clock polling.

use crate::error::Result;
use crate::traits::Clock;
use log::debug;
use std::time::{Duration, Instant};

/// [`Clock`] backed by [`Instant::now`] and [`std::thread::sleep`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Call `probe` until it yields a value or more than `timeout` has elapsed
/// since `start`.
///
/// `probe` runs at least once.  Between attempts the clock sleeps for
/// `interval`.  Returns `Ok(None)` once the deadline has passed, and stops at
/// the first error `probe` returns.  There is no bound on the number of
/// attempts other than the deadline.
pub fn poll_until<C, T, F>(
    clock: &C,
    interval: Duration,
    timeout: Duration,
    start: Instant,
    mut probe: F,
) -> Result<Option<T>>
where
    C: Clock,
    F: FnMut() -> Result<Option<T>>,
{
    let mut attempt = 0u32;
    loop {
        attempt += 1;
        if let Some(value) = probe()? {
            debug!("poll succeeded after {} attempt(s)", attempt);
            return Ok(Some(value));
        }
        if clock.now().duration_since(start) > timeout {
            debug!("poll gave up after {} attempt(s)", attempt);
            return Ok(None);
        }
        clock.sleep(interval);
    }
}
