// =============================================================================
// OffGriid Web - Main Library Entry Point
// =============================================================================
// Table of Contents:
// 1. Module Declarations
// 2. Re-exports
// 3. WASM Entry Point
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Module Declarations
// -----------------------------------------------------------------------------

pub mod app;
pub mod components;
pub mod config;
pub mod contact;
pub mod effects;
pub mod error;
pub mod pages;
pub mod services;
pub mod staging;
pub mod state;
pub mod utils;

// -----------------------------------------------------------------------------
// 2. Re-exports
// -----------------------------------------------------------------------------

pub use app::App;
pub use state::AppState;

// -----------------------------------------------------------------------------
// 3. WASM Entry Point (for library usage)
// -----------------------------------------------------------------------------

use wasm_bindgen::prelude::*;

/// Install the panic hook and console logger at the environment's level.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    // Already initialized when both entry points run.
    let _ = console_log::init_with_level(config::Environment::current().log_level());
}

/// Mount the Leptos app to the DOM (for external callers).
#[wasm_bindgen]
pub fn mount() {
    init_logging();
    log::info!("Mounting OffGriid web app...");
    leptos::mount::mount_to_body(app::App);
}
