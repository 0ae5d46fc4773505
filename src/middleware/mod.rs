pub mod session;

pub use session::{require_session, MaybeSession, SessionProvider, SESSION_COOKIE};
