//! Process-wide scale configuration.

use crate::defs::DEFAULT_SCALE;
use core::sync::atomic::{AtomicUsize, Ordering};

static SCALE: AtomicUsize = AtomicUsize::new(DEFAULT_SCALE);

/// Returns the maximum number of fractional digits retained by operations.
pub fn scale() -> usize {
    SCALE.load(Ordering::Relaxed)
}

/// Sets the maximum number of fractional digits retained by operations.
///
/// Existing values are not affected; only the results of subsequent
/// operations are rounded to the new scale.
///
/// ## Panics
///
/// Panics if `scale` is zero.
pub fn set_scale(scale: usize) {
    assert!(scale > 0, "scale must be positive");
    SCALE.store(scale, Ordering::Relaxed);
}

// The scale is global, so tests that depend on it run serialized.
#[cfg(test)]
pub(crate) fn scale_lock() -> std::sync::MutexGuard<'static, ()> {
    use lazy_static::lazy_static;
    use std::sync::Mutex;

    lazy_static! {
        static ref LOCK: Mutex<()> = Mutex::new(());
    }

    LOCK.lock().unwrap_or_else(|e| e.into_inner())
}
