// libpn532/src/utils/timeout.rs

use std::time::Duration;

/// Response timeout used by device-level commands that are expected to
/// answer promptly (firmware, SAM, registers, card I/O).
pub const DEFAULT_COMMAND_TIMEOUT_MS: u64 = 1000;

/// Passed as a response timeout: wait until the chip answers.
pub const WAIT_FOREVER: u64 = 0;

/// Millisecond count as a `Duration`.
pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Number of poll intervals that fit in `timeout_ms`, `None` when unbounded.
pub fn poll_budget(timeout_ms: u64, interval_ms: u64) -> Option<u64> {
    (timeout_ms != WAIT_FOREVER).then(|| timeout_ms.div_ceil(interval_ms.max(1)))
}
