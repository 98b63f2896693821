//! Shared boolean switches
//!
//! A [`Flag`] is a handle to a boolean cell. Cloning the handle shares the
//! cell, so a flag installed in several emitters (or held by an argument
//! parser) is toggled for all of them at once. Emitters read the value at
//! call time; nothing is snapshotted.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Handle to a shared, mutable boolean
///
/// Accesses use relaxed ordering: a toggle racing with an emit may be observed
/// one call late, which is fine for output policy.
#[derive(Clone, Default)]
pub struct Flag(Arc<AtomicBool>);

impl Flag {
    /// Create a new, unshared flag holding `value`
    pub fn new(value: bool) -> Self {
        Self(Arc::new(AtomicBool::new(value)))
    }

    /// Current value
    pub fn get(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Store `value`, returning what was there before
    ///
    /// Every handle sharing this cell observes the change.
    pub fn set(&self, value: bool) -> bool {
        self.0.swap(value, Ordering::Relaxed)
    }

    /// Whether both handles point at the same cell
    pub fn shares(&self, other: &Flag) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Flag").field(&self.get()).finish()
    }
}
