// ============================================================================
// SPORTBOOK ADMIN - PANEL DE GESTIÓN DE INSTALACIONES DEPORTIVAS
// ============================================================================

mod components;
mod config;
mod hooks;
mod models;
mod services;
mod state;
mod utils;

use components::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    console_error_panic_hook::set_once();
    log::info!("🚀 SportBook Admin starting...");

    yew::Renderer::<App>::new().render();
}
