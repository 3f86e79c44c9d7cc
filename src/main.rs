use job_portal_web::config::CONFIG;
use job_portal_web::App;

fn main() {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        let level = if CONFIG.is_production() { log::Level::Info } else { log::Level::Debug };
        wasm_logger::init(wasm_logger::Config::new(level));
    }
    log::info!("🚀 Job portal starting ({})...", CONFIG.environment);

    yew::Renderer::<App>::new().render();
}
