//! Cached constants with progressive refinement.
//!
//! Each constant keeps the value computed so far together with the count of
//! fractional digits it is good for. A request within that precision is
//! served from the cache; a request beyond it recomputes the constant with a
//! few guard digits and refines the cache.

mod e;
mod ln10;
mod pi;

use crate::ctx;
use crate::num::DecimalNumber;
use crate::ops::consts::e::ECache;
use crate::ops::consts::ln10::Ln10Cache;
use crate::ops::consts::pi::PiCache;
use lazy_static::lazy_static;
use std::sync::{Mutex, MutexGuard};

lazy_static! {
    static ref PI: Mutex<PiCache> = Mutex::new(PiCache::new());
    static ref E: Mutex<ECache> = Mutex::new(ECache::new());
    static ref LN10: Mutex<Ln10Cache> = Mutex::new(Ln10Cache::new());
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|e| e.into_inner())
}

/// Returns π rounded to `decimals` fractional digits.
pub(crate) fn pi_to(decimals: usize) -> DecimalNumber {
    lock(&PI).for_scale(decimals)
}

/// Returns e rounded to `decimals` fractional digits.
pub(crate) fn e_to(decimals: usize) -> DecimalNumber {
    lock(&E).for_scale(decimals)
}

/// Returns ln(10) rounded to `decimals` fractional digits.
pub(crate) fn ln10_to(decimals: usize) -> DecimalNumber {
    lock(&LN10).for_scale(decimals)
}

impl DecimalNumber {
    /// Returns π rounded to the current scale.
    pub fn pi() -> Self {
        pi_to(ctx::scale())
    }

    /// Returns Euler's number rounded to the current scale.
    pub fn e() -> Self {
        e_to(ctx::scale())
    }
}
