// ============================================================================
// REQUEST GENERATION - last-started request wins
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

/// Ticket handed out when a request starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// Monotonic counter shared by every in-flight request of one kind.
///
/// A response may only be applied while its ticket is still the latest
/// one issued; anything older is stale and gets dropped.
#[derive(Clone, Default)]
pub struct RequestGeneration {
    latest: Rc<Cell<u64>>,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request, superseding every earlier ticket
    pub fn begin(&self) -> Generation {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        Generation(next)
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.latest.get() == generation.0
    }
}

impl PartialEq for RequestGeneration {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.latest, &other.latest)
    }
}
