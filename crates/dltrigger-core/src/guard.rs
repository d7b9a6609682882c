use std::{cell::Cell, rc::Rc};

/// Per-control flag marking a download in flight.
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct InFlight(Rc<Cell<bool>>);

impl InFlight {
    /// Marks the control busy, returns `None` if it already is.
    pub fn try_begin(&self) -> Option<InFlightGuard> {
        if self.0.replace(true) {
            return None;
        }
        Some(InFlightGuard(Rc::clone(&self.0)))
    }

    pub fn is_active(&self) -> bool {
        self.0.get()
    }
}

/// Clears the in-flight flag when dropped.
#[derive(Debug)]
pub struct InFlightGuard(Rc<Cell<bool>>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.set(false);
    }
}
