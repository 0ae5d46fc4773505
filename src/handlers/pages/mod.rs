// handlers/pages/mod.rs - HTML page handlers
//
// Pages never answer 401: a missing session either changes what is rendered
// (navbar) or redirects to /login with a callbackUrl.

pub mod assets;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod products;

/// Only same-origin paths are followed after sign-in
pub(crate) fn local_redirect_target(target: Option<&str>) -> &str {
    match target {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => {
            path
        }
        _ => "/",
    }
}
