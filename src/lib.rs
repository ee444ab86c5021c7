#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

//! Page runtime for the DALEXOR marketing site.
//!
//! Drawing and timing logic is target independent and tested on the host.
//! Everything that touches the DOM lives in [`wasm`], which only compiles for
//! wasm32.

pub mod anim;
pub mod config;
pub mod counter;
pub mod error;
pub mod form;
pub mod geom;
pub mod nav;
pub mod paint;
pub mod reveal;
pub mod rng;
pub mod visual;

pub use anim::{AnimationLoop, Visual};
pub use config::SiteConfig;
pub use error::SiteError;

// Only compile browser bindings when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    use crate::config::SiteConfig;
    use crate::error::{Result, SiteError};
    use crate::visual::{Mesh, Orbit, WaveField};

    pub mod dom;
    pub mod forms;
    pub mod render;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or(SiteError::NoWindow)?;
        let document = window.document().ok_or(SiteError::NoDocument)?;
        let cfg = SiteConfig::default();
        log::info!("wiring page features");

        report("navigation", dom::navigation(&window, &document, &cfg));
        report("scroll reveal", dom::scroll_reveal(&window, &document, &cfg));
        report(
            "hero canvas",
            render::mount(&window, &document, cfg.hero_canvas, Mesh::new(cfg.mesh.clone())),
        );
        report(
            "platform canvas",
            render::mount(&window, &document, cfg.platform_canvas, Orbit::new(cfg.orbit.clone())),
        );
        report(
            "metrics canvas",
            render::mount(&window, &document, cfg.metrics_canvas, WaveField::new(cfg.waves.clone())),
        );
        report("smooth scroll", dom::smooth_scroll(&document));
        report("forms", forms::wire(&window, &document, &cfg.form));
        Ok(())
    }

    // One broken feature must not take the rest of the page down.
    fn report(feature: &str, result: Result<()>) {
        if let Err(err) = result {
            log::warn!("{feature} disabled: {err}");
        }
    }
}
