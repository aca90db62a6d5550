use crate::console::console_error;
use arbiswap_header_types::HeaderConfig;
use web_sys::window;

/// Id of the `<script type="application/json">` element holding the config.
const CONFIG_ELEMENT_ID: &str = "arbiswap-config";

fn config_json() -> Option<String> {
    window()?.document()?.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()
}

pub(crate) fn load_config() -> HeaderConfig {
    let (config, err) = HeaderConfig::from_json_or_default(config_json().as_deref());
    if let Some(err) = err {
        console_error!("{}, using defaults", err);
    }
    config
}
