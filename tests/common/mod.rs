//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Start a mock monitored endpoint. The closure produces the `X-App-Pool`
/// header value for each request; returning `None` omits the header.
pub async fn start_mock_endpoint<F>(addr: SocketAddr, pool: F)
where
    F: Fn() -> Option<String> + Send + Sync + 'static,
{
    let listener = TcpListener::bind(addr).await.unwrap();
    let pool = Arc::new(pool);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let pool = pool.clone();
                    tokio::spawn(async move {
                        let mut buf = [0u8; 1024];
                        let _ = socket.read(&mut buf).await;

                        let pool_header = match pool() {
                            Some(p) => format!("X-App-Pool: {}\r\n", p),
                            None => String::new(),
                        };
                        let response_str = format!(
                            "HTTP/1.1 200 OK\r\n{}Content-Length: 2\r\nConnection: close\r\n\r\nok",
                            pool_header
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });
}

/// Start a programmable mock webhook. The closure receives each POSTed
/// body and returns the status code to answer with.
pub async fn start_mock_webhook<F>(addr: SocketAddr, f: F)
where
    F: Fn(String) -> u16 + Send + Sync + 'static,
{
    let listener = TcpListener::bind(addr).await.unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let body = read_request_body(&mut socket).await;
                        let status = f(body);
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            429 => "429 Too Many Requests",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Length: 2\r\nConnection: close\r\n\r\nok",
                            status_text
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });
}

/// Read a full HTTP request and return its body (assumes Content-Length).
async fn read_request_body(socket: &mut tokio::net::TcpStream) -> String {
    let mut raw = Vec::new();
    let mut buf = [0u8; 1024];

    loop {
        match socket.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) => {
                raw.extend_from_slice(&buf[..n]);
                if let Some(split) = find_header_end(&raw) {
                    let headers = String::from_utf8_lossy(&raw[..split]).to_string();
                    let content_length = headers
                        .lines()
                        .find_map(|line| {
                            let (name, value) = line.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())?
                        })
                        .unwrap_or(0);
                    if raw.len() >= split + 4 + content_length {
                        let body = &raw[split + 4..split + 4 + content_length];
                        return String::from_utf8_lossy(body).to_string();
                    }
                }
            }
            Err(_) => break,
        }
    }

    String::new()
}

fn find_header_end(raw: &[u8]) -> Option<usize> {
    raw.windows(4).position(|w| w == b"\r\n\r\n")
}
