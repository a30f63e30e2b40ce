//! REST Gateway
//!
//! Frontend bindings to the `/api` endpoints, organized by domain. Every
//! operation resolves to the [`Action`](crate::store::Action) that the store
//! must fold in once the server has confirmed the change.

mod bin;
mod category;
mod error;
mod note;
mod user;

use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::config::AppConfig;

pub use error::{GatewayError, Result};

/// Attempts for a GET that fails at the transport level
const GET_ATTEMPTS: u32 = 3;
const RETRY_DELAY_MS: u32 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Handle to the REST API rooted at the configured prefix
#[derive(Debug, Clone, PartialEq)]
pub struct Api {
    config: AppConfig,
}

impl Api {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    // ========================
    // Request Helpers
    // ========================

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let text = self.send(Method::Get, path, None).await?;
        decode(&text)
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let text = self.send(Method::Post, path, Some(encode(body)?)).await?;
        decode(&text)
    }

    /// POST whose response body is not needed
    async fn post_discard<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        self.send(Method::Post, path, Some(encode(body)?)).await.map(|_| ())
    }

    async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let text = self.send(Method::Put, path, Some(encode(body)?)).await?;
        decode(&text)
    }

    async fn delete(&self, path: &str) -> Result<()> {
        self.send(Method::Delete, path, None).await.map(|_| ())
    }

    async fn send(&self, method: Method, path: &str, body: Option<String>) -> Result<String> {
        let url = self.config.api_url(path);
        let attempts = if method == Method::Get { GET_ATTEMPTS } else { 1 };

        let mut attempt = 1;
        loop {
            log::debug!("[NET] {} {} (attempt {})", method.as_str(), url, attempt);
            match fetch_text(method, &url, body.as_deref()).await {
                Err(e) if e.is_retryable() && attempt < attempts => {
                    log::warn!("[NET] {} {} failed, retrying: {}", method.as_str(), url, e);
                    TimeoutFuture::new(RETRY_DELAY_MS).await;
                    attempt += 1;
                }
                result => return result,
            }
        }
    }
}

async fn fetch_text(method: Method, url: &str, body: Option<&str>) -> Result<String> {
    let window = web_sys::window().ok_or(GatewayError::NoWindow)?;

    let headers = Headers::new().map_err(GatewayError::from_js)?;
    headers
        .set("content-type", "application/json")
        .map_err(GatewayError::from_js)?;

    let init = RequestInit::new();
    init.set_method(method.as_str());
    init.set_headers(&headers);
    if let Some(body) = body {
        init.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &init).map_err(GatewayError::from_js)?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(GatewayError::from_js)?
        .dyn_into()
        .map_err(GatewayError::from_js)?;

    check_status(method, url, response.status())?;

    let text = JsFuture::from(response.text().map_err(GatewayError::from_js)?)
        .await
        .map_err(GatewayError::from_js)?;
    Ok(text.as_string().unwrap_or_default())
}

fn check_status(method: Method, url: &str, status: u16) -> Result<()> {
    match status {
        200..=299 => Ok(()),
        401 | 403 => Err(GatewayError::Unauthorized {
            method: method.as_str(),
            url: url.to_string(),
        }),
        _ => Err(GatewayError::Status {
            method: method.as_str(),
            url: url.to_string(),
            status,
        }),
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String> {
    serde_json::to_string(body).map_err(GatewayError::Encode)
}

/// An empty body decodes as JSON `null`
fn decode<T: DeserializeOwned>(text: &str) -> Result<T> {
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(GatewayError::Decode)
}
