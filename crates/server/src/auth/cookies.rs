use axum::http::{header, HeaderMap, HeaderValue};
use cookie::Cookie;
use std::fmt;
use std::sync::{Arc, Mutex};

/// The browser's cookie header for the current request, forwarded verbatim
/// to the auth service and backend API.
///
/// The application never inspects session tokens itself; it only relays them.
#[derive(Clone, Default, PartialEq)]
pub struct Credentials {
    cookie_header: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self
            .cookie_header
            .as_deref()
            .map(|raw| {
                Cookie::split_parse(raw)
                    .filter_map(Result::ok)
                    .map(|c| c.name().to_string())
                    .collect()
            })
            .unwrap_or_default();
        f.debug_struct("Credentials").field("cookies", &names).finish()
    }
}

impl Credentials {
    pub fn none() -> Self {
        Self::default()
    }

    /// Join every `Cookie` header on the request into one value.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let joined = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .collect::<Vec<_>>()
            .join("; ");
        Self::from_cookie_header(joined)
    }

    pub fn from_cookie_header(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self {
            cookie_header: (!raw.trim().is_empty()).then_some(raw),
        }
    }

    pub fn cookie_header(&self) -> Option<&str> {
        self.cookie_header.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.cookie_header.is_none()
    }

    /// Attach the cookie header to an outbound request, if there is one.
    pub fn apply(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.cookie_header {
            Some(raw) => builder.header(header::COOKIE, raw.as_str()),
            None => builder,
        }
    }
}

/// Shared slot for server functions to hand `Set-Cookie` values from the
/// auth service back to the browser. The session middleware drains it onto
/// the response.
#[derive(Clone, Debug, Default)]
pub struct CookieSlot(pub Arc<Mutex<Vec<String>>>);

impl CookieSlot {
    pub fn push_all(&self, cookies: impl IntoIterator<Item = String>) {
        if let Ok(mut pending) = self.0.lock() {
            pending.extend(cookies);
        }
    }

    pub fn take(&self) -> Vec<String> {
        self.0
            .lock()
            .map(|mut pending| std::mem::take(&mut *pending))
            .unwrap_or_default()
    }

    /// Append every pending cookie to the response headers. Values that are
    /// not valid header text are dropped.
    pub fn apply_to(&self, headers: &mut HeaderMap) {
        for raw in self.take() {
            match HeaderValue::from_str(&raw) {
                Ok(value) => {
                    headers.append(header::SET_COOKIE, value);
                }
                Err(e) => tracing::warn!(error = %e, "Dropping invalid Set-Cookie from upstream"),
            }
        }
    }
}

/// Schedule upstream `Set-Cookie` values for the current server function's
/// response. No-op outside a fullstack request.
pub fn schedule_set_cookies(cookies: Vec<String>) {
    if cookies.is_empty() {
        return;
    }
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        if let Some(slot) = parts.extensions.get::<CookieSlot>() {
            slot.push_all(cookies);
        }
    }
}

/// Credentials for the current server function call, as inserted by the
/// session middleware. Falls back to the raw request headers.
pub fn current_credentials() -> Credentials {
    let Some(ctx) = dioxus::fullstack::FullstackContext::current() else {
        return Credentials::none();
    };
    let parts = ctx.parts_mut();
    parts
        .extensions
        .get::<Credentials>()
        .cloned()
        .unwrap_or_else(|| Credentials::from_headers(&parts.headers))
}
