use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Shape of `./config.json` next to the bundle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

pub const DEFAULT_API_BASE_URL: &str = "http://garage1.localhost:8000";
pub const API_PORT: u16 = 8000;

const ENV_GLOBAL: &str = "__GADISEWA_ENV";
const CONFIG_GLOBAL: &str = "__GADISEWA_CONFIG";

static API_BASE_URL: OnceLock<String> = OnceLock::new();

/// Reads the first non-empty string among `keys` on `window[global]`.
fn read_global(global: &str, keys: &[&str]) -> Option<String> {
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
        .filter_map(|value| value.as_string())
        .find(|value| !value.trim().is_empty())
}

fn snapshot_from_globals() -> Option<String> {
    // window.__GADISEWA_ENV = { API_BASE_URL: "..." } from env.js wins over config.json.
    read_global(ENV_GLOBAL, &["API_BASE_URL", "api_base_url"])
        .or_else(|| read_global(CONFIG_GLOBAL, &["api_base_url", "API_BASE_URL"]))
}

fn cache_base_url(value: &str) -> String {
    let value = value.trim_end_matches('/').to_string();
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

fn write_window_config(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"api_base_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&window, &CONFIG_GLOBAL.into(), &obj);
}

fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

fn page_hostname() -> Option<String> {
    web_sys::window()?.location().hostname().ok()
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let url = format!("{}/config.json", page_origin()?);
    let resp = reqwest::get(&url).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

/// Backend origin for a page served from `hostname`.
///
/// Tenants live on subdomains (`garage1.localhost`) and the API answers on
/// the same host at port 8000.
pub fn base_url_for_host(hostname: &str) -> String {
    let host = hostname.trim();
    if host.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        format!("http://{}:{}", host, API_PORT)
    }
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(url) = fetch_runtime_config().await.and_then(|cfg| cfg.api_base_url) {
        write_window_config(&url);
        return cache_base_url(&url);
    }
    match page_hostname() {
        Some(hostname) => cache_base_url(&base_url_for_host(&hostname)),
        None => cache_base_url(DEFAULT_API_BASE_URL),
    }
}

pub async fn init() {
    let url = await_api_base_url().await;
    log::info!("API base URL: {}", url);
}
