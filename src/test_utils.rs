//! Test utilities and fixtures for animal-cards tests.
//!
//! Record factories, temp-file writers and a one-shot HTTP server for
//! exercising the API client without the network.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use serde_json::{Value, json};

use crate::animals::dto::RawAnimal;

/// Build a raw record from a JSON literal.
///
/// ```ignore
/// let owl = animal(json!({"name": "Owl", "taxonomy": {"kingdom": "Animalia"}}));
/// ```
pub fn animal(value: Value) -> RawAnimal {
    serde_json::from_value(value).expect("fixture should match the DTO shape")
}

/// A complete fox record with `skin_type: Fur`.
pub fn fox() -> RawAnimal {
    animal(json!({
        "name": "Red Fox",
        "taxonomy": {
            "kingdom": "Animalia",
            "phylum": "Chordata",
            "class": "Mammalia"
        },
        "locations": ["Africa", "Asia", "Europe"],
        "characteristics": {
            "prey": "Rabbits, Rodents",
            "diet": "Omnivore",
            "type": "Mammal",
            "lifespan": "2 - 5 years",
            "skin_type": "Fur"
        }
    }))
}

/// Write a corpus file into `dir` and return its path.
pub fn write_corpus(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("animals_data.json");
    std::fs::write(&path, json).expect("Failed to write corpus");
    path
}

/// Write a template file into `dir` and return its path.
pub fn write_template(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("animals_template.html");
    std::fs::write(&path, contents).expect("Failed to write template");
    path
}

/// Serve exactly one HTTP response on a random local port.
///
/// Returns the base URL and a handle yielding the raw request head.
pub fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test server");
    let url = format!("http://{}/", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("Failed to accept");
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).expect("Failed to read request");
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }
        stream.write_all(response.as_bytes()).expect("Failed to write response");
        stream.flush().ok();
        String::from_utf8_lossy(&head).into_owned()
    });

    (url, handle)
}

/// Accept one connection and never answer, to trigger client timeouts.
pub fn serve_silent() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test server");
    let url = format!("http://{}/", listener.local_addr().unwrap());
    thread::spawn(move || {
        if let Ok((_stream, _)) = listener.accept() {
            thread::sleep(Duration::from_secs(5));
        }
    });
    url
}
