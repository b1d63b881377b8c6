use axum::{
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    Router,
};
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};
use tokio::net::TcpListener;

/// A request as it reached the canned server.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub uri: String,
    pub headers: HeaderMap,
    pub body: String,
}

impl Recorded {
    /// Method and path with query, e.g. `GET /api/times`.
    pub fn request_line(&self) -> String {
        format!("{} {}", self.method, self.uri)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

#[derive(Default)]
struct Canned {
    responses: Mutex<VecDeque<(u16, &'static str)>>,
    recorded: Mutex<Vec<Recorded>>,
}

/// Local backend answering every request with the next canned response,
/// in order. Once the script runs out it answers 503.
pub struct CannedServer {
    pub url: String,
    canned: Arc<Canned>,
}

async fn answer(
    State(canned): State<Arc<Canned>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], &'static str) {
    canned.recorded.lock().unwrap().push(Recorded {
        method,
        uri: uri.to_string(),
        headers,
        body,
    });
    let (status, body) = canned
        .responses
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or((503, ""));
    (
        StatusCode::from_u16(status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
}

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/api", listener.local_addr().unwrap());
    tokio::spawn(async move { axum::serve(listener, router).await });
    url
}

impl CannedServer {
    pub async fn start(responses: Vec<(u16, &'static str)>) -> Self {
        let canned = Arc::new(Canned {
            responses: Mutex::new(responses.into()),
            ..Default::default()
        });
        let router = Router::new().fallback(answer).with_state(canned.clone());
        let url = serve(router).await;
        Self { url, canned }
    }

    /// Accepts requests and never answers.
    pub async fn silent() -> Self {
        let router = Router::new().fallback(|| async {
            std::future::pending::<()>().await;
            StatusCode::OK
        });
        let url = serve(router).await;
        Self {
            url,
            canned: Arc::default(),
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.canned.recorded.lock().unwrap().clone()
    }
}

/// An address nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api", addr)
}
