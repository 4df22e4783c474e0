use gloo::console;
use js_sys::{Reflect, JSON};
use kurabe_core::{ConfigError, SliderConfig};
use wasm_bindgen::JsValue;

/// Page global a host can set before the module loads, either as an
/// object or as a JSON string.
pub(crate) const CONFIG_GLOBAL: &str = "__KURABE_CONFIG";

pub(crate) fn load_page_config() -> SliderConfig {
    match read_page_config() {
        Ok(Some(config)) => config,
        Ok(None) => SliderConfig::default(),
        Err(err) => {
            console::warn!("kurabe: ignoring page config", err.to_string());
            SliderConfig::default()
        }
    }
}

fn read_page_config() -> Result<Option<SliderConfig>, ConfigError> {
    let Some(raw) = page_config_json() else {
        return Ok(None);
    };
    SliderConfig::from_json(&raw).map(Some)
}

fn page_config_json() -> Option<String> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)).ok()?;
    if value.is_null() || value.is_undefined() {
        return None;
    }
    if let Some(raw) = value.as_string() {
        return Some(raw);
    }
    JSON::stringify(&value).ok().map(String::from)
}
