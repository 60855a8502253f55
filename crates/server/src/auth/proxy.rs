use axum::{
    body::{Body, Bytes},
    extract::{Path, State},
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};

use super::client::AuthClient;
use super::cookies::Credentials;
use crate::error_convert::ReqwestErrorExt;

/// Relays `/api/auth/{*path}` to the auth service so the browser talks to a
/// single origin.
///
/// Forwards method, query, `Cookie`, `Content-Type` and body. Relays status,
/// `Content-Type`, `Set-Cookie` and body. An unreachable auth service yields
/// `502` with an `AppError` body.
#[tracing::instrument(skip(auth, headers, body), fields(path = %path))]
pub async fn auth_proxy(
    State(auth): State<AuthClient>,
    Path(path): Path<String>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let mut target = auth.api().url(&path);
    if let Some(query) = uri.query() {
        target.push('?');
        target.push_str(query);
    }

    let mut outbound = Credentials::from_headers(&headers).apply(auth.api().http().request(method, target));
    if let Some(content_type) = headers.get(header::CONTENT_TYPE) {
        outbound = outbound.header(header::CONTENT_TYPE, content_type.clone());
    }
    if !body.is_empty() {
        outbound = outbound.body(body);
    }

    let upstream = match outbound.send().await {
        Ok(response) => response,
        Err(e) => return e.into_app_error().into_response(),
    };

    let status = upstream.status();
    let mut relayed = HeaderMap::new();
    if let Some(content_type) = upstream.headers().get(header::CONTENT_TYPE) {
        relayed.insert(header::CONTENT_TYPE, content_type.clone());
    }
    for cookie in upstream.headers().get_all(header::SET_COOKIE) {
        relayed.append(header::SET_COOKIE, cookie.clone());
    }

    let bytes = match upstream.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => return e.into_app_error().into_response(),
    };

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    *response.headers_mut() = relayed;
    response
}
