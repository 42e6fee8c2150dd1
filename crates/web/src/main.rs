// =============================================================================
// OffGriid Web - WASM Entry Point
// =============================================================================
// This is the main entry point for the WASM binary.
// Trunk compiles this and injects it into index.html.
// =============================================================================

use offgriid_web::App;

fn main() {
    offgriid_web::init_logging();

    log::info!("Starting OffGriid web...");

    // Mount the Leptos app to the body
    leptos::mount::mount_to_body(App);
}
