use std::cell::Cell;
use std::rc::Rc;

/// Cancellation token for one feed subscription.
///
/// Cloned into the stream task; `close()` flips the shared flag and every
/// message observed afterwards is dropped before it can touch session state.
/// A symbol change or unmount closes the old token before a new one exists.
#[derive(Debug, Clone, Default)]
pub struct FeedSubscription {
    closed: Rc<Cell<bool>>,
}

impl FeedSubscription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn close(&self) {
        self.closed.set(true);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }
}
