//! Tests de integración para el servidor
//! tests/integration_test.rs
//!
//! Cada test levanta su propio servidor en un puerto efímero y le habla
//! por TCP como lo haría un navegador.

use roll_server::config::{Config, ServeMode};
use roll_server::pages::Page;
use roll_server::server::Server;
use std::io::{Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream};
use std::thread;
use std::time::Duration;

/// Helper: levanta un servidor en background y retorna su dirección
fn start_server(page: Page, mode: ServeMode, read_timeout_ms: u64, seed: u64) -> SocketAddr {
    let mut config = Config::default();
    config.host = "127.0.0.1".to_string();
    config.port = 0;
    config.page = page;
    config.mode = mode;
    config.read_timeout_ms = read_timeout_ms;
    config.seed = Some(seed);

    let mut server = Server::new(config).expect("valid config");
    let addr = server.bind().expect("bind");

    thread::spawn(move || {
        let _ = server.run();
    });

    addr
}

fn connect(addr: SocketAddr) -> TcpStream {
    let stream = TcpStream::connect(addr).expect("connect");
    stream.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
    stream.set_write_timeout(Some(Duration::from_secs(5))).unwrap();
    stream
}

/// Helper: envía bytes crudos y retorna todo lo recibido hasta el cierre
fn send_raw(addr: SocketAddr, raw: &[u8]) -> String {
    let mut stream = connect(addr);
    stream.write_all(raw).unwrap();
    stream.flush().unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).expect("server closes the connection");
    String::from_utf8_lossy(&response).into_owned()
}

/// Helper: extrae el body de una response HTTP
fn extract_body(response: &str) -> &str {
    match response.find("\r\n\r\n") {
        Some(pos) => &response[pos + 4..],
        None => "",
    }
}

fn roll_values(body: &str) -> Vec<i64> {
    body.lines()
        .filter_map(|line| line.trim().strip_prefix("<p>")?.strip_suffix("</p>")?.parse().ok())
        .collect()
}

#[test]
fn test_counter_end_to_end() {
    let addr = start_server(Page::Counter, ServeMode::Sequential, 0, 1);
    let response = send_raw(addr, b"GET /?number=5 HTTP/1.1\r\n");

    assert!(response.starts_with("HTTP/1.0 200 OK\r\nContent-Type: text/html\r\n\r\n"));
    let body = extract_body(&response);
    assert!(body.contains("The current number is 5."), "got: {}", body);
    assert!(body.contains("number=6"));
    assert!(body.contains("number=4"));
}

#[test]
fn test_dice_end_to_end() {
    let addr = start_server(Page::Dice, ServeMode::Sequential, 0, 2);
    let response = send_raw(addr, b"GET /?rolls=3&sides=6 HTTP/1.1\r\n");

    let rolls = roll_values(extract_body(&response));
    assert_eq!(rolls.len(), 3, "got: {}", response);
    assert!(rolls.iter().all(|n| (1..=6).contains(n)));
}

#[test]
fn test_favicon_gets_zero_bytes() {
    let addr = start_server(Page::Dice, ServeMode::Sequential, 0, 3);
    let response = send_raw(addr, b"GET /favicon.ico HTTP/1.1\r\n");

    assert!(response.is_empty());
}

#[test]
fn test_always_200_for_garbage() {
    let addr = start_server(Page::Dice, ServeMode::Sequential, 0, 4);
    let response = send_raw(addr, b"???\r\n");

    assert!(response.starts_with("HTTP/1.0 200 OK\r\n"));
}

#[test]
fn test_headers_after_request_line_are_ignored() {
    let addr = start_server(Page::Counter, ServeMode::Sequential, 0, 5);
    let response = send_raw(
        addr,
        b"GET /?number=1 HTTP/1.1\r\nHost: localhost\r\nUser-Agent: test\r\n\r\n",
    );

    let body = extract_body(&response);
    assert!(body.contains("The current number is 1."));
    assert!(!body.contains("User-Agent"));
}

#[test]
fn test_multiple_requests_sequentially() {
    let addr = start_server(Page::Counter, ServeMode::Sequential, 0, 6);

    for i in 0..5 {
        let response = send_raw(addr, format!("GET /?number={} HTTP/1.1\r\n", i).as_bytes());
        assert!(
            response.contains(&format!("The current number is {}.", i)),
            "Request {} failed",
            i
        );
    }
}

#[test]
fn test_bad_connections_do_not_stop_server() {
    let addr = start_server(Page::Counter, ServeMode::Sequential, 0, 7);

    // Cliente que cierra sin mandar nada
    drop(connect(addr));

    // Cliente que manda bytes inválidos
    let invalid = send_raw(addr, b"\xff\xfe\xfd\r\n");
    assert!(invalid.is_empty());

    // Cliente que manda la request line y desaparece antes de leer
    let mut stream = connect(addr);
    stream.write_all(b"GET /?rolls=1 HTTP/1.1\r\n").unwrap();
    stream.shutdown(Shutdown::Both).unwrap();
    drop(stream);

    let response = send_raw(addr, b"GET /?number=9 HTTP/1.1\r\n");
    assert!(response.contains("The current number is 9."));
}

#[test]
fn test_read_timeout_drops_silent_client() {
    let addr = start_server(Page::Counter, ServeMode::Sequential, 200, 8);

    // Cliente silencioso: el servidor lo corta al vencer el timeout
    let mut silent = connect(addr);
    let mut buf = Vec::new();
    silent.read_to_end(&mut buf).unwrap();
    assert!(buf.is_empty());

    let response = send_raw(addr, b"GET /?number=2 HTTP/1.1\r\n");
    assert!(response.contains("The current number is 2."));
}

#[test]
fn test_threaded_mode_serves_while_another_client_hangs() {
    let addr = start_server(Page::Counter, ServeMode::Threaded, 0, 9);

    // Queda abierto sin mandar la request line
    let _hanging = connect(addr);

    let response = send_raw(addr, b"GET /?number=3 HTTP/1.1\r\n");
    assert!(response.contains("The current number is 3."));
}

#[test]
fn test_same_seed_same_rolls() {
    let first = start_server(Page::Dice, ServeMode::Sequential, 0, 42);
    let second = start_server(Page::Dice, ServeMode::Sequential, 0, 42);
    let request = b"GET /?rolls=10&sides=100 HTTP/1.1\r\n";

    let a = roll_values(extract_body(&send_raw(first, request)));
    let b = roll_values(extract_body(&send_raw(second, request)));

    assert_eq!(a.len(), 10);
    assert_eq!(a, b);
}
