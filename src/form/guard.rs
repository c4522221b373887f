//! Scoped guards around an in-flight request
//!
//! `InFlightClaim` marks an orchestrator busy from the moment a trigger is
//! accepted. `LoadingGuard` shows the loading indicator and disables the
//! submit control for the lifetime of the request. Both release on drop, so
//! every exit path (success, error, panic, dropped future) restores the form.

use crate::form::FormView;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Exclusive right to run one request on an orchestrator
#[derive(Debug)]
pub struct InFlightClaim {
    flag: Arc<AtomicBool>,
}

impl InFlightClaim {
    /// Claims the flag, or returns `None` if it is already held
    pub(crate) fn try_acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self {
                flag: Arc::clone(flag),
            })
    }

    pub(crate) fn belongs_to(&self, flag: &Arc<AtomicBool>) -> bool {
        Arc::ptr_eq(&self.flag, flag)
    }
}

impl Drop for InFlightClaim {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Loading indicator shown and submit disabled while held
pub struct LoadingGuard<'a, V: FormView + ?Sized> {
    view: &'a mut V,
}

impl<'a, V: FormView + ?Sized> LoadingGuard<'a, V> {
    pub fn engage(view: &'a mut V) -> Self {
        view.set_loading(true);
        view.set_submit_enabled(false);
        Self { view }
    }
}

impl<V: FormView + ?Sized> Deref for LoadingGuard<'_, V> {
    type Target = V;

    fn deref(&self) -> &V {
        self.view
    }
}

impl<V: FormView + ?Sized> DerefMut for LoadingGuard<'_, V> {
    fn deref_mut(&mut self) -> &mut V {
        self.view
    }
}

impl<V: FormView + ?Sized> Drop for LoadingGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_submit_enabled(true);
        self.view.set_loading(false);
    }
}
