use shared::TrackerConfig;

/// Id of the optional `<script type="application/json">` block with overrides
pub const CONFIG_ELEMENT_ID: &str = "tracker-config";

/// Settings from the host page, or the defaults when it has none
pub fn load_config() -> TrackerConfig {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => match TrackerConfig::from_json(&raw) {
            Ok(config) => {
                log::debug!("loaded settings from #{}", CONFIG_ELEMENT_ID);
                config
            }
            Err(e) => {
                log::warn!("ignoring invalid #{}: {:#}", CONFIG_ELEMENT_ID, e);
                TrackerConfig::default()
            }
        },
        _ => TrackerConfig::default(),
    }
}
