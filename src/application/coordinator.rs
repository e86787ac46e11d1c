use crate::application::session::ChartSession;
use std::cell::RefCell;

// Global session instance (thread-local for WASM)
thread_local! {
    static GLOBAL_SESSION: RefCell<Option<ChartSession>> = const { RefCell::new(None) };
}

/// Install a session as the global one, replacing any previous session.
pub fn install_global_session(session: ChartSession) {
    GLOBAL_SESSION.with(|global| {
        *global.borrow_mut() = Some(session);
    });
}

/// Drop the global session entirely (unmount).
pub fn take_global_session() -> Option<ChartSession> {
    GLOBAL_SESSION.with(|global| global.borrow_mut().take())
}

/// Read access to the global session.
pub fn with_session<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&ChartSession) -> R,
{
    GLOBAL_SESSION.with(|global| global.borrow().as_ref().map(f))
}

/// Mutable access to the global session.
pub fn with_session_mut<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut ChartSession) -> R,
{
    GLOBAL_SESSION.with(|global| global.borrow_mut().as_mut().map(f))
}
