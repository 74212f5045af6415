//! One-shot HTTP responder for exercising the HTTP source without a
//! network.

use anyhow::{Context, Result};
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::mpsc::{Receiver, channel};
use std::thread;
use std::time::Duration;

/// Serves exactly one request on a loopback port, then closes.
pub struct OneShotServer {
    base_url: String,
    request: Receiver<String>,
}

impl OneShotServer {
    /// `status` is the part of the status line after the version,
    /// e.g. `"500 Internal Server Error"`.
    pub fn respond(status: &str, body: &str) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").context("Failed to bind loopback port")?;
        let base_url = format!("http://{}", listener.local_addr()?);
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );

        let (tx, rx) = channel();
        thread::spawn(move || {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let Ok(read_half) = stream.try_clone() else {
                return;
            };
            let mut reader = BufReader::new(read_half);

            let mut request_line = String::new();
            if reader.read_line(&mut request_line).is_err() {
                return;
            }
            // Drain headers; GET has no body
            loop {
                let mut line = String::new();
                match reader.read_line(&mut line) {
                    Ok(0) | Err(_) => break,
                    Ok(_) if line == "\r\n" => break,
                    Ok(_) => {}
                }
            }

            let _ = stream.write_all(response.as_bytes());
            let _ = tx.send(request_line.trim_end().to_string());
        });

        Ok(Self {
            base_url,
            request: rx,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request line as received, e.g. `GET /a.txt HTTP/1.1`.
    pub fn request_line(&self) -> Result<String> {
        self.request
            .recv_timeout(Duration::from_secs(5))
            .context("No request reached the server")
    }
}
