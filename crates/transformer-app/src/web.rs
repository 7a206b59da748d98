//! WASM entry point.
//!
//! Binds a DOM element inside a container to a transformer and writes the
//! element's CSS geometry whenever its state changes.

use transformer_core::{
    CssCursor, DomHost, HostBinding, TransformState, Transformer, TransformerConfig,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Write `state` as percent-based CSS on `element`.
fn apply_style(element: &HtmlElement, state: &TransformState) {
    let style = element.style();
    let properties = [
        ("left", format!("{}%", state.position.x)),
        ("top", format!("{}%", state.position.y)),
        ("width", format!("{}%", state.size.width)),
        ("height", format!("{}%", state.size.height)),
        ("transform", format!("rotate({}deg)", state.rotation)),
    ];
    for (name, value) in &properties {
        if let Err(e) = style.set_property(name, value) {
            log::warn!("Failed to set {}: {:?}", name, e);
        }
    }
    let selected = element.class_list().toggle_with_force("selected", state.selected);
    if let Err(e) = selected {
        log::warn!("Failed to toggle selected class: {:?}", e);
    }
}

/// A transformer bound to a DOM element.
#[wasm_bindgen]
pub struct WebTransformer {
    binding: HostBinding<DomHost>,
}

#[wasm_bindgen]
impl WebTransformer {
    /// Bind the element `element_id` inside the container `container_id`.
    /// `config_json` may be empty or a partial config.
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: &str, element_id: &str, config_json: &str) -> Result<WebTransformer, JsValue> {
        let config = if config_json.trim().is_empty() {
            TransformerConfig::interactive()
        } else {
            TransformerConfig::from_json(config_json).map_err(js_error)?
        };

        let host = DomHost::from_id(container_id);
        let cursor = host
            .container()
            .and_then(|c| c.clone().dyn_into::<HtmlElement>().ok())
            .map(CssCursor::new);
        let element = host
            .container()
            .and_then(|c| c.owner_document())
            .and_then(|d| d.get_element_by_id(element_id))
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| js_error(format!("Element #{} not found", element_id)))?;

        let mut transformer = Transformer::new(config, cursor);
        apply_style(&element, transformer.state());
        transformer.subscribe(move |state| apply_style(&element, state));

        let mut binding = HostBinding::new(host, transformer);
        binding.start();
        log::info!(
            "Transformer {} bound to #{}",
            binding.transformer().borrow().id(),
            element_id
        );
        Ok(Self { binding })
    }

    /// Current state as JSON.
    pub fn state(&self) -> Result<String, JsValue> {
        let transformer = self.binding.transformer();
        let state = *transformer.borrow().state();
        serde_json::to_string(&state).map_err(js_error)
    }

    /// Replace the state from JSON.
    #[wasm_bindgen(js_name = setState)]
    pub fn set_state(&mut self, json: &str) -> Result<(), JsValue> {
        let state: TransformState = serde_json::from_str(json).map_err(js_error)?;
        self.binding.transformer().borrow_mut().set_state(state);
        Ok(())
    }

    #[wasm_bindgen(js_name = resetRotation)]
    pub fn reset_rotation(&mut self) {
        self.binding.transformer().borrow_mut().reset_rotation();
    }

    /// Detach every DOM listener. Also happens when the object is freed.
    pub fn detach(&mut self) {
        self.binding.stop();
    }
}

#[wasm_bindgen(start)]
pub fn run_wasm() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&js_error(e));
    }

    log::info!("Transformer (WASM) ready");
}
