pub mod domain;
pub mod infrastructure;
pub mod application;
pub mod presentation;

/// Install the panic hook, console logger and clock when the module loads
#[cfg(not(feature = "logic-only"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn initialize() {
    use crate::domain::logging::{LogComponent, init_logger, init_time_provider};
    use crate::infrastructure::services::{ClockTimeProvider, ConsoleLogger};

    console_error_panic_hook::set_once();

    init_logger(Box::new(ConsoleLogger::new_development()));
    init_time_provider(Box::new(ClockTimeProvider::new()));

    log_info!(LogComponent::Api("Initialize"), "CSV chart parsers ready");
}
