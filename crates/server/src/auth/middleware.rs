use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use super::cookies::{CookieSlot, Credentials};

/// Permissive session middleware.
///
/// On each request:
/// 1. Captures the browser's cookies as `Credentials` for outbound calls
/// 2. Inserts a `CookieSlot` so server functions can relay upstream cookies
/// 3. After the handler runs, appends any scheduled `Set-Cookie` values
///
/// Does NOT resolve or reject sessions; extractors and the dashboard guard
/// decide authorization.
pub async fn session_middleware(mut req: Request, next: Next) -> Response {
    let credentials = Credentials::from_headers(req.headers());
    let cookie_slot = CookieSlot::default();

    req.extensions_mut().insert(credentials);
    req.extensions_mut().insert(cookie_slot.clone());

    let mut response = next.run(req).await;
    cookie_slot.apply_to(response.headers_mut());
    response
}
