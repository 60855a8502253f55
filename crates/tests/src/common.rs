use axum::{
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use server::auth::client::AuthClient;
use server::auth::cookies::Credentials;
use server::auth::session::SessionResolver;
use server::services::ApiClient;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Session cookie sent by every authenticated test call.
pub const SESSION_COOKIE: &str = "better-auth.session_token=tok_123";

/// One request as the mock upstream saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub cookie: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct Mock {
    status: StatusCode,
    body: String,
    set_cookie: Option<String>,
    seen: Arc<Mutex<Vec<Recorded>>>,
}

/// Handle onto a running mock upstream.
pub struct Upstream {
    pub base: String,
    seen: Arc<Mutex<Vec<Recorded>>>,
}

impl Upstream {
    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<Recorded> {
        self.seen.lock().unwrap().clone()
    }

    pub fn last(&self) -> Recorded {
        self.requests().pop().expect("upstream received no request")
    }
}

async fn reply(
    State(mock): State<Mock>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    mock.seen.lock().unwrap().push(Recorded {
        method,
        path: uri.path().to_string(),
        cookie: headers
            .get(header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });

    let mut response = (mock.status, mock.body.clone()).into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );
    if let Some(cookie) = &mock.set_cookie {
        response
            .headers_mut()
            .insert(header::SET_COOKIE, cookie.parse().unwrap());
    }
    response
}

async fn serve(mock: Mock) -> Upstream {
    let seen = mock.seen.clone();
    let router = Router::new().fallback(reply).with_state(mock);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Upstream {
        base: format!("http://{addr}"),
        seen,
    }
}

/// Spawn an upstream that answers every request with `status` and `body`.
pub async fn canned(status: u16, body: &str) -> Upstream {
    serve(Mock {
        status: StatusCode::from_u16(status).unwrap(),
        body: body.to_string(),
        set_cookie: None,
        seen: Arc::default(),
    })
    .await
}

/// Like [`canned`], also sending one `Set-Cookie` header.
pub async fn canned_with_cookie(status: u16, body: &str, cookie: &str) -> Upstream {
    serve(Mock {
        status: StatusCode::from_u16(status).unwrap(),
        body: body.to_string(),
        set_cookie: Some(cookie.to_string()),
        seen: Arc::default(),
    })
    .await
}

/// A base URL nothing listens on.
pub fn unreachable_base() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn client(base: &str) -> ApiClient {
    ApiClient::new(base, Duration::from_secs(5)).unwrap()
}

pub fn auth_client(base: &str) -> AuthClient {
    AuthClient::new(client(base))
}

pub fn resolver(base: &str) -> SessionResolver {
    SessionResolver::new(client(base))
}

pub fn signed_in() -> Credentials {
    Credentials::from_cookie_header(SESSION_COOKIE)
}
