//! Per-thread, one-shot overrides for the next log call.
//!
//! Each thread keeps its own map of overlays, keyed by printer, so nothing here
//! needs a lock and two printers used from the same thread never see each
//! other's pending overrides. The printer takes the whole overlay at once when a
//! call passes the level filter, which leaves the thread with nothing pending.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Settings that supersede the config for exactly one log call on this thread.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlay {
    pub tag: Option<String>,
    /// Signed on purpose: a negative value is a caller bug the printer reports loudly.
    pub method_count: Option<i32>,
    pub print_to_file: Option<bool>,
    /// Pre-formatted blocks rendered above the message, separated by dividers.
    pub fragments: Vec<String>,
}

impl Overlay {
    /// True when nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tag.is_none()
            && self.method_count.is_none()
            && self.print_to_file.is_none()
            && self.fragments.is_empty()
    }
}

/// Identifies one printer's slot in every thread's overlay map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct OverlayKey(u64);

impl OverlayKey {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

thread_local! {
    static OVERLAYS: RefCell<HashMap<OverlayKey, Overlay>> = RefCell::new(HashMap::new());
}

/// Overrides set while the thread is tearing down its locals are dropped.
fn with_overlay(key: OverlayKey, f: impl FnOnce(&mut Overlay)) {
    let _ = OVERLAYS.try_with(|map| f(map.borrow_mut().entry(key).or_default()));
}

pub(crate) fn set_tag(key: OverlayKey, tag: &str) {
    with_overlay(key, |o| o.tag = Some(tag.to_string()));
}

pub(crate) fn set_method_count(key: OverlayKey, count: i32) {
    with_overlay(key, |o| o.method_count = Some(count));
}

pub(crate) fn set_print_to_file(key: OverlayKey, enabled: bool) {
    with_overlay(key, |o| o.print_to_file = Some(enabled));
}

pub(crate) fn push_fragment(key: OverlayKey, fragment: String) {
    with_overlay(key, |o| o.fragments.push(fragment));
}

/// Removes and returns everything pending on this thread for `key`.
///
/// Logging from another thread-local's destructor can run after the map is
/// gone; that call sees nothing pending.
pub(crate) fn take(key: OverlayKey) -> Overlay {
    OVERLAYS
        .try_with(|map| map.borrow_mut().remove(&key))
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// A copy of what is pending on this thread for `key`, without consuming it.
pub(crate) fn pending(key: OverlayKey) -> Overlay {
    OVERLAYS
        .try_with(|map| map.borrow().get(&key).cloned())
        .ok()
        .flatten()
        .unwrap_or_default()
}
