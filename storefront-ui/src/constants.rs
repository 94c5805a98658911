// SPDX-License-Identifier: MIT OR Apache-2.0

use anyhow::anyhow;
use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use storefront_core::carousel::{HERO_INTERVAL_MS, TESTIMONIAL_INTERVAL_MS};
use storefront_core::{truthy, DEFAULT_REVEAL_THRESHOLD};
use wasm_bindgen::JsValue;

/// Delay before the loading overlay starts fading out.
pub const LOADING_SCREEN_MS: u32 = 2000;

/// Fade-out time of the loading overlay before it is removed.
pub const LOADING_FADE_MS: u32 = 500;

/// Cross-fade time of the product gallery's main image.
pub const GALLERY_FADE_MS: u32 = 300;

/// Page-level settings injected by the hosting page as `window.__APP_CONFIG`.
///
/// Every field is optional; the storefront runs fine with no config at all.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "heroIntervalMs")]
    #[serde(default)]
    pub hero_interval_ms: Option<u32>,
    #[serde(rename = "testimonialIntervalMs")]
    #[serde(default)]
    pub testimonial_interval_ms: Option<u32>,
    #[serde(rename = "loadingScreenMs")]
    #[serde(default)]
    pub loading_screen_ms: Option<u32>,
    #[serde(rename = "revealThreshold")]
    #[serde(default)]
    pub reveal_threshold: Option<f64>,
    #[serde(rename = "debugLogging")]
    #[serde(default)]
    pub debug_logging: Option<String>,
}

pub fn app_config() -> anyhow::Result<RuntimeConfig> {
    let win = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Err(anyhow!(
            "Runtime configuration not found (window.__APP_CONFIG missing)"
        ));
    }
    from_js_value::<RuntimeConfig>(config)
        .map_err(|e| anyhow!("Failed to parse __APP_CONFIG: {e:?}"))
}

/// Config with defaults substituted for anything missing or malformed.
pub fn runtime_config() -> RuntimeConfig {
    app_config().unwrap_or_else(|e| {
        log::debug!("using default runtime config: {e:#}");
        RuntimeConfig::default()
    })
}

fn positive(value: Option<u32>) -> Option<u32> {
    value.filter(|ms| *ms > 0)
}

pub fn hero_interval_ms() -> u32 {
    positive(runtime_config().hero_interval_ms).unwrap_or(HERO_INTERVAL_MS)
}

pub fn testimonial_interval_ms() -> u32 {
    positive(runtime_config().testimonial_interval_ms).unwrap_or(TESTIMONIAL_INTERVAL_MS)
}

pub fn loading_screen_ms() -> u32 {
    runtime_config()
        .loading_screen_ms
        .unwrap_or(LOADING_SCREEN_MS)
}

pub fn reveal_threshold() -> f64 {
    runtime_config()
        .reveal_threshold
        .filter(|t| (0.0..=1.0).contains(t))
        .unwrap_or(DEFAULT_REVEAL_THRESHOLD)
}

pub fn debug_logging() -> bool {
    truthy(runtime_config().debug_logging.as_deref())
}
