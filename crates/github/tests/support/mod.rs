//! A minimal scripted HTTP/1.1 server for exercising the adapter end to end.
//!
//! Each route answers a fixed status and body for one `(method, path)` pair;
//! anything else gets a 404. Every request is recorded so tests can assert on
//! paths, headers and bodies. Connections are closed after one response.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

#[derive(Debug, Clone)]
pub struct Route {
    pub method: &'static str,
    pub path: String,
    pub status: u16,
    pub body: String,
    pub headers: Vec<(&'static str, String)>,
    pub delay: Option<Duration>,
}

impl Route {
    pub fn new(method: &'static str, path: impl Into<String>, status: u16) -> Self {
        Self {
            method,
            path: path.into(),
            status,
            body: String::new(),
            headers: Vec::new(),
            delay: None,
        }
    }

    pub fn json(mut self, body: &Value) -> Self {
        self.body = body.to_string();
        self
    }

    pub fn raw_body(mut self, body: &str) -> Self {
        self.body = body.to_owned();
        self
    }

    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

pub struct MockServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    task: JoinHandle<()>,
}

impl MockServer {
    pub async fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let routes = Arc::new(routes);

        let recorded = requests.clone();
        let task = tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let routes = routes.clone();
                let recorded = recorded.clone();
                tokio::spawn(async move {
                    let _ = serve(stream, &routes, &recorded).await;
                });
            }
        });

        Self {
            addr,
            requests,
            task,
        }
    }

    /// Base URL of the server, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, prefix: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path.starts_with(prefix))
            .collect()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Returns a URL on which nothing is listening.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

async fn serve(
    mut stream: TcpStream,
    routes: &[Route],
    recorded: &Mutex<Vec<RecordedRequest>>,
) -> std::io::Result<()> {
    let Some(request) = read_request(&mut stream).await? else {
        return Ok(());
    };
    recorded.lock().unwrap().push(request.clone());

    let route = routes
        .iter()
        .find(|r| r.method == request.method && r.path == request.path);

    let (status, body, headers) = match route {
        Some(route) => {
            if let Some(delay) = route.delay {
                tokio::time::sleep(delay).await;
            }
            (route.status, route.body.clone(), route.headers.clone())
        }
        None => (
            404,
            json!({ "message": "Not Found" }).to_string(),
            Vec::new(),
        ),
    };

    let mut response = format!(
        "HTTP/1.1 {status} Scripted\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n",
        body.len()
    );
    for (name, value) in headers {
        response.push_str(&format!("{name}: {value}\r\n"));
    }
    response.push_str("\r\n");
    response.push_str(&body);

    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await
}

async fn read_request(stream: &mut TcpStream) -> std::io::Result<Option<RecordedRequest>> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Ok(None);
        }
        buf.extend_from_slice(&chunk[..n]);
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).into_owned();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next().unwrap_or_default().split_whitespace();
    let method = request_line.next().unwrap_or_default().to_owned();
    let path = request_line.next().unwrap_or_default().to_owned();

    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(name, value)| (name.trim().to_ascii_lowercase(), value.trim().to_owned()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(name, _)| name == "content-length")
        .and_then(|(_, value)| value.parse::<usize>().ok())
        .unwrap_or(0);

    let mut body = buf[header_end + 4..].to_vec();
    while body.len() < content_length {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..n]);
    }

    Ok(Some(RecordedRequest {
        method,
        path,
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    }))
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A successful profile query response for `octocat` owning `repos`, in the
/// given order, with one calendar week spanning 2024-05-27..2024-06-02.
pub fn profile_response(repos: &[&str]) -> Value {
    let counts = [1, 0, 2, 0, 0, 3, 0];
    let dates = [
        "2024-05-27",
        "2024-05-28",
        "2024-05-29",
        "2024-05-30",
        "2024-05-31",
        "2024-06-01",
        "2024-06-02",
    ];
    let days: Vec<Value> = dates
        .iter()
        .zip(counts)
        .enumerate()
        .map(|(weekday, (date, count))| {
            json!({ "date": date, "weekday": weekday, "contributionCount": count })
        })
        .collect();
    let nodes: Vec<Value> = repos
        .iter()
        .enumerate()
        .map(|(i, name)| {
            json!({
                "name": name,
                "stargazerCount": (repos.len() - i) * 10,
                "forkCount": i,
                "isArchived": false,
                "hasIssuesEnabled": true,
                "defaultBranchRef": { "target": { "history": { "totalCount": 12 } } }
            })
        })
        .collect();

    json!({
        "data": {
            "user": {
                "name": "The Octocat",
                "login": "octocat",
                "bio": "Friendly mascot",
                "location": "San Francisco",
                "createdAt": "2011-01-25T18:44:36Z",
                "followers": { "totalCount": 1200 },
                "following": { "totalCount": 9 },
                "contributionsCollection": {
                    "contributionCalendar": {
                        "totalContributions": 6,
                        "weeks": [{ "contributionDays": days }]
                    }
                },
                "repositories": { "nodes": nodes }
            }
        }
    })
}
