pub mod coordinator;
pub mod session;

pub use coordinator::{install_global_session, take_global_session, with_session, with_session_mut};
pub use session::ChartSession;
