//! Visit Reporter
//!
//! Fire-and-forget analytics: collects device/browser/OS classification and
//! a few environment attributes, then POSTs them to the backend. Failures
//! are logged and never surface to the user.

use gloo_net::http::Request;
use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::config::VISIT_LOG_ENDPOINT;
use crate::device::classify_user_agent;

/// Client-observed environment attributes; the backend merges the caller IP
/// into this object before storing.
#[derive(Debug, Serialize)]
struct LocationData {
    timezone: String,
    language: String,
    screen_resolution: String,
    viewport: String,
}

#[derive(Debug, Serialize)]
struct VisitPayload {
    user_agent: String,
    device_type: String,
    browser: String,
    os: String,
    page_url: String,
    referrer: String,
    location_data: LocationData,
}

#[derive(Debug)]
pub enum VisitLogError {
    Env(String),
    Http(String),
}

impl std::fmt::Display for VisitLogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VisitLogError::Env(msg) => write!(f, "environment unavailable: {}", msg),
            VisitLogError::Http(msg) => write!(f, "visit endpoint failed: {}", msg),
        }
    }
}

fn browser_timezone() -> String {
    let format = js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &js_sys::Object::new());
    let options = format.resolved_options();
    js_sys::Reflect::get(&options, &JsValue::from_str("timeZone"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

fn collect_payload() -> Result<VisitPayload, VisitLogError> {
    let window = web_sys::window().ok_or_else(|| VisitLogError::Env("no window".into()))?;
    let navigator = window.navigator();
    let document = window
        .document()
        .ok_or_else(|| VisitLogError::Env("no document".into()))?;

    let user_agent = navigator
        .user_agent()
        .map_err(|_| VisitLogError::Env("no user agent".into()))?;
    let device = classify_user_agent(&user_agent);

    let page_url = window
        .location()
        .href()
        .map_err(|_| VisitLogError::Env("no location".into()))?;
    let referrer = document.referrer();

    let screen_resolution = window
        .screen()
        .ok()
        .and_then(|s| Some(format!("{}x{}", s.width().ok()?, s.height().ok()?)))
        .unwrap_or_default();
    let viewport = {
        let w = window.inner_width().ok().and_then(|v| v.as_f64());
        let h = window.inner_height().ok().and_then(|v| v.as_f64());
        match (w, h) {
            (Some(w), Some(h)) => format!("{}x{}", w as i64, h as i64),
            _ => String::new(),
        }
    };

    Ok(VisitPayload {
        user_agent,
        device_type: device.device_type,
        browser: device.browser,
        os: device.os,
        page_url,
        referrer,
        location_data: LocationData {
            timezone: browser_timezone(),
            language: navigator.language().unwrap_or_default(),
            screen_resolution,
            viewport,
        },
    })
}

/// Record one visit. Called once on page mount.
pub async fn report_visit() -> Result<(), VisitLogError> {
    let payload = collect_payload()?;
    let response = Request::post(VISIT_LOG_ENDPOINT)
        .json(&payload)
        .map_err(|err| VisitLogError::Http(err.to_string()))?
        .send()
        .await
        .map_err(|err| VisitLogError::Http(err.to_string()))?;
    if !response.ok() {
        return Err(VisitLogError::Http(format!(
            "status {}",
            response.status()
        )));
    }
    Ok(())
}
