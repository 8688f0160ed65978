use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Build API base URL. The backend listens on port 8000 next to whatever
/// host serves the frontend bundle.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8000", protocol, hostname)
}

/// CSRF token the backend session sets; sent back as X-CSRFToken on writes.
pub fn csrf_token() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let html_doc: web_sys::HtmlDocument = document.dyn_into().ok()?;
    let cookies = html_doc.cookie().ok()?;
    cookies.split(';').find_map(|part| {
        let (name, value) = part.trim().split_once('=')?;
        (name == "csrftoken").then(|| value.to_string())
    })
}

async fn fetch(request: &Request) -> Result<Response, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    Ok(resp)
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = format!("{}{}", api_base(), path);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let resp = fetch(&request).await?;
    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    serde_json::from_str(&text).map_err(|e| format!("{e}"))
}

/// PUT a JSON body; the response body, if any, is discarded.
pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let payload = serde_json::to_string(body).map_err(|e| format!("{e}"))?;

    let opts = RequestInit::new();
    opts.set_method("PUT");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&wasm_bindgen::JsValue::from_str(&payload));

    let url = format!("{}{}", api_base(), path);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    let headers = request.headers();
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{e:?}"))?;
    headers
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;
    if let Some(token) = csrf_token() {
        headers
            .set("X-CSRFToken", &token)
            .map_err(|e| format!("{e:?}"))?;
    }

    fetch(&request).await?;
    Ok(())
}
