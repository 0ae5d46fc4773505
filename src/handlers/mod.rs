// handlers/mod.rs - Handler tiers
//
// Public (no session) → Protected (session required, 401 otherwise).
// Pages render HTML and handle their own sign-in redirects.

pub mod pages;
pub mod protected;
pub mod public;
