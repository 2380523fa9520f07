use shared::constants::WHEEL_CONFIG_STORAGE_KEY;
use shared::shared_spin_wheel::WheelConfig;
use web_sys::window;

/// Wheel settings, optionally overridden by a JSON blob in local storage.
/// Anything missing or invalid falls back to the defaults.
pub fn get_wheel_config() -> WheelConfig {
    let stored = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(WHEEL_CONFIG_STORAGE_KEY).ok().flatten());

    let Some(raw) = stored else {
        return WheelConfig::default();
    };

    match serde_json::from_str::<WheelConfig>(&raw).map(WheelConfig::checked) {
        Ok(Ok(config)) => {
            log::info!("Using wheel config from local storage: {:?}", config);
            config
        }
        Ok(Err(e)) => {
            log::warn!("Ignoring stored wheel config: {}", e);
            WheelConfig::default()
        }
        Err(e) => {
            log::warn!("Failed to parse stored wheel config: {}", e);
            WheelConfig::default()
        }
    }
}
