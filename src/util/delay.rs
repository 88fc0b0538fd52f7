//! Artificial latency for the mock data functions.
//!
//! In the browser this waits on a `setTimeout` timer. Native builds (unit
//! tests) use a thread-backed timer that works under any executor.

use std::time::Duration;

#[cfg(feature = "csr")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(feature = "csr"))]
pub async fn sleep(duration: Duration) {
    futures_timer::Delay::new(duration).await;
}
