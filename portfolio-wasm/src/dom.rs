use portfolio_core::SiteConfig;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlElement, Window};

/// Log a message to the browser console.
pub fn log(s: &str) {
    gloo::console::log!(s);
}

pub fn warn(s: &str) {
    gloo::console::warn!(s);
}

/// Uniform sample in `[0, 1)` from the browser's generator.
pub fn random() -> f64 {
    js_sys::Math::random()
}

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// All elements matching `selector` that are `HtmlElement`s.
pub fn query_all(root: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn query(root: &Document, selector: &str) -> Option<HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
}

pub fn by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
}

pub fn set_style(el: &HtmlElement, prop: &str, value: &str) {
    let _ = el.style().set_property(prop, value);
}

pub fn style_of(el: &HtmlElement, prop: &str) -> String {
    el.style().get_property_value(prop).unwrap_or_default()
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let _ = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
}

/// Create a `div` with the given class, not yet attached.
pub fn create_div(document: &Document, class: &str) -> Result<HtmlElement, JsValue> {
    let el = document.create_element("div")?.dyn_into::<HtmlElement>()?;
    el.set_class_name(class);
    Ok(el)
}

pub fn viewport_size(window: &Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h)
}

/// Resolve a config path against `window.__BASE_URL` (default `/`).
/// Absolute `http(s):` and `data:` URLs pass through.
pub fn asset_url(window: &Window, path: &str) -> String {
    let path = path.trim();
    if ["http://", "https://", "data:"]
        .iter()
        .any(|scheme| path.starts_with(scheme))
    {
        return path.to_string();
    }
    let base = js_sys::Reflect::get(window, &JsValue::from_str("__BASE_URL"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| "/".to_string());
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

async fn fetch_text(window: &Window, url: &str) -> Result<String, JsValue> {
    let resp: web_sys::Response = JsFuture::from(window.fetch_with_str(url))
        .await?
        .dyn_into()?;
    if !resp.ok() {
        return Err(JsValue::from_str(&format!("HTTP {}", resp.status())));
    }
    JsFuture::from(resp.text()?)
        .await?
        .as_string()
        .ok_or_else(|| JsValue::from_str("response body is not text"))
}

/// First URL in `urls` that fetches successfully.
pub async fn fetch_first(window: &Window, urls: &[&str]) -> Option<String> {
    for url in urls {
        match fetch_text(window, url).await {
            Ok(text) => return Some(text),
            Err(e) => warn(&format!("fetch {} failed: {:?}", url, e)),
        }
    }
    None
}

/// Value of `key` in a `?a=b&c=d` query string, `+` and percent escapes
/// decoded.
pub fn get_query_param(search: &str, key: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| match pair.split_once('=') {
            Some((k, v)) => Some((k, v)),
            None if !pair.is_empty() => Some((pair, "")),
            None => None,
        })
        .find(|(k, _)| *k == key)
        .map(|(_, v)| {
            percent_encoding::percent_decode_str(&v.replace('+', " "))
                .decode_utf8_lossy()
                .into_owned()
        })
}

/// Inline config from `window.__PORTFOLIO_CONFIG`, given either as a JSON
/// string or as a plain object.
fn inline_config_text(window: &Window) -> Option<String> {
    let v = js_sys::Reflect::get(window, &JsValue::from_str("__PORTFOLIO_CONFIG")).ok()?;
    if v.is_undefined() || v.is_null() {
        return None;
    }
    if let Some(s) = v.as_string() {
        return Some(s);
    }
    js_sys::JSON::stringify(&v).ok()?.as_string()
}

/// Resolve the page config: `?config=<path>` wins over the inline global, and
/// anything missing or invalid falls back to the defaults. `?fx=off` turns the
/// decorative animations off.
pub async fn load_config(window: &Window) -> SiteConfig {
    let search = window.location().search().unwrap_or_default();
    let text = match get_query_param(&search, "config") {
        Some(path) => {
            let fetched = fetch_first(window, &[&asset_url(window, &path), path.as_str()]).await;
            if fetched.is_none() {
                warn(&format!("config '{}' could not be fetched", path));
            }
            fetched
        }
        None => inline_config_text(window),
    };
    let mut cfg = match text {
        Some(t) => SiteConfig::from_json(&t).unwrap_or_else(|e| {
            warn(&format!("{e}; using defaults"));
            SiteConfig::default()
        }),
        None => SiteConfig::default(),
    };
    if get_query_param(&search, "fx").as_deref() == Some("off") {
        cfg.effects.disable_motion();
    }
    cfg
}
