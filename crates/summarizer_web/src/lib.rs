//! Browser front end for the summarize form.
//!
//! Binds to the page's URL/PDF form, validates the active input on submit,
//! and only lets the native submission through when it is valid. State and
//! rules live in `summarizer_core`; this crate owns the DOM side: element
//! lookup, event wiring, rendering and effect execution.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { mount_with_config, unmount } from './pkg/summarizer_web.js';
//!
//! await init(); // mounts on DOMContentLoaded with the embedded or default config
//!
//! mount_with_config('{"form": {"max_pdf_bytes": 10485760}}'); // rebind with overrides
//! unmount(); // detach every listener
//! ```

mod platform;

use wasm_bindgen::prelude::*;

pub use platform::config::{DomBindings, PageConfig};
pub use platform::ui::constants;
pub use platform::ui::render::render;
pub use platform::ui::{DomCommand, Role};

use platform::logging::{self, LogDestination};

/// Called automatically by wasm-bindgen when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logging::initialize(if cfg!(target_arch = "wasm32") {
        LogDestination::Console
    } else {
        LogDestination::Terminal
    });
    platform::app::boot();
}

/// Re-mounts the form with a JSON config (`{"form": {..}, "dom": {..}}`).
///
/// Never throws: an invalid config is logged and the defaults are mounted.
/// Cancels the automatic mount if the page is still loading.
#[wasm_bindgen]
pub fn mount_with_config(config_json: &str) {
    platform::app::mount_page(Some(config_json));
}

/// Detaches the form from the page, including a mount still waiting for
/// DOMContentLoaded.
#[wasm_bindgen]
pub fn unmount() {
    platform::app::unmount_page();
}
