use std::sync::atomic::{AtomicI32, Ordering};

static NEXT_ID: AtomicI32 = AtomicI32::new(1);

/// Returns a process-unique counter value for factory defaults.
///
/// Keeps generated subjects and names unique across factories within a test
/// run without coordinating between tests.
pub fn next_id() -> i32 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}
