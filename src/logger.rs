// Logging module
// Plain stdout/stderr logging: timestamped access lines plus tagged
// warning/error lines

use chrono::Local;
use hyper::{Method, Uri, Version};
use std::net::SocketAddr;

use crate::config::Config;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Cocktail relay server started");
    println!("Listening on: http://{addr}");
    println!("Upstream API: {}", config.upstream.base_url);
    println!("Upstream timeout: {}s", config.upstream.timeout_secs);
    println!("Log level: {}", config.logging.level);
    println!("Static directory: {}", config.resources.static_dir);
    if config.server.debug {
        println!("Debug mode: on");
    }
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

/// Access log line with a local timestamp, common-log style
pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    let time = Local::now().format("%d/%b/%Y:%H:%M:%S %z");
    println!("[{time}] \"{method} {uri} {version:?}\"");
}

pub fn log_response(status: u16, size: usize) {
    println!("[Response] {status} ({size} bytes)");
}

pub fn log_headers_count(count: usize, show: bool) {
    if show {
        println!("[Headers] Count: {count}");
    }
}

pub fn log_api_request(method: &str, path: &str, status: u16) {
    println!("[API] {method} {path} - {status}");
}

pub fn log_upstream_request(url: &str) {
    println!("[Upstream] GET {url}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_shutdown() {
    println!("\n[Shutdown] Signal received, stopping server");
}
