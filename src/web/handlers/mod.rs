pub mod fragments;

use actix_web::web;

/// Configure the non-Leptos routes. Leptos page routes are registered by the binary.
pub fn configure(cfg: &mut web::ServiceConfig) {
    fragments::configure(cfg);
}
