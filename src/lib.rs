//! Cursor trail and click burst effects drawn with pooled `<div>` elements.
//!
//! The effect logic in `core` is platform-free; the wasm build binds it to
//! the page's `mousemove`/`click` events and the browser's timers.

pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod runtime;
#[cfg(target_arch = "wasm32")]
mod timers;

#[cfg(target_arch = "wasm32")]
pub use wasm::start;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use crate::constants::{PARTICLE_CLASS, TRAIL_CLASS};
    use crate::core::{CursorEffects, EffectsConfig};
    use crate::runtime::Runtime;
    use crate::{dom, events};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys as web;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("cursor-fx starting");

        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }

    async fn init() -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        // Pools go into <body>, so wait for it.
        dom::document_ready(&document).await?;
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("document has no <body>"))?;

        let config = EffectsConfig::default();
        let trail =
            dom::create_pool_elements(&document, &body, TRAIL_CLASS, config.trail.pool_size)?;
        let particles =
            dom::create_pool_elements(&document, &body, PARTICLE_CLASS, config.burst.pool_size)?;
        log::info!(
            "[pools] trail={} particles={}",
            trail.len(),
            particles.len()
        );

        let effects = CursorEffects::new(trail, particles, config, StdRng::from_entropy())?;
        let runtime = Runtime::new(window, effects);
        events::wire_input_handlers(&document, runtime);
        Ok(())
    }
}
