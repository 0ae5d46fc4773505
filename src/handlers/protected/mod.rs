// handlers/protected/mod.rs - Protected handlers (session required)
//
// Every route here sits behind `middleware::require_session`, so handlers
// receive the caller's `Extension<Session>` and never see anonymous requests.

pub mod products;
