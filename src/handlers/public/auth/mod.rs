// handlers/public/auth/mod.rs - Session endpoints for API clients
//
// The page forms at /login and /logout share the same SessionProvider;
// these are the JSON equivalents.

pub mod login;
pub mod logout;
pub mod session;

pub use login::login_post;
pub use logout::logout_post;
pub use session::session_get;
