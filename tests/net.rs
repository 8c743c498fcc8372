// tests/net.rs
//
// HttpFetcher against a loopback server that answers canned responses in order.
mod common;

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use common::options;
use sample_scrape::config::options::{NetOptions, ScrapeOptions};
use sample_scrape::core::net::{Fetch, HttpFetcher};
use sample_scrape::error::ScrapeError;
use sample_scrape::progress::Progress;
use sample_scrape::specs::listing::{is_not_found, NOT_FOUND_MARKER};
use sample_scrape::{Query, Scraper};

struct Server {
    base: String,
    hits: Arc<AtomicUsize>,
}

impl Server {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
    fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Answer one connection per response, then stop listening.
fn serve(responses: Vec<String>) -> Server {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);

    thread::spawn(move || {
        for response in responses {
            let Ok((mut stream, _)) = listener.accept() else { return };
            read_request(&stream);
            counter.fetch_add(1, Ordering::SeqCst);
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });

    Server { base, hits }
}

fn read_request(stream: &TcpStream) {
    let mut reader = BufReader::new(stream);
    let mut line = String::new();
    while reader.read_line(&mut line).map(|n| n > 0).unwrap_or(false) {
        if line == "\r\n" {
            break;
        }
        line.clear();
    }
}

fn response(status: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

fn ok(body: &str) -> String {
    response("200 OK", body)
}

/// Promises 1000 bytes, sends three, hangs up.
fn truncated() -> String {
    String::from("HTTP/1.1 200 OK\r\nContent-Length: 1000\r\nConnection: close\r\n\r\nabc")
}

fn fetcher(retries: u32, pause_ms: u64) -> HttpFetcher {
    HttpFetcher::new(&NetOptions {
        retries,
        backoff_ms: 0,
        pause_ms,
        jitter_ms: 0,
        connect_timeout_secs: 2,
        read_timeout_secs: 2,
        ..NetOptions::default()
    })
}

#[test]
fn server_error_is_retried_until_success() {
    let server = serve(vec![response("503 Service Unavailable", ""), ok("<html>fine</html>")]);

    let page = fetcher(3, 0).fetch(&server.url("/Nas/Halftime/")).unwrap();

    assert_eq!(page.status, 200);
    assert_eq!(page.body, "<html>fine</html>");
    assert_eq!(server.hits(), 2);
}

#[test]
fn not_found_comes_back_as_a_page() {
    let body = format!("<html><p>{NOT_FOUND_MARKER}</p></html>");
    let server = serve(vec![response("404 Not Found", &body)]);

    let page = fetcher(3, 0).fetch(&server.url("/Nobody/Nothing/")).unwrap();

    assert_eq!(page.status, 404);
    assert!(is_not_found(&page));
    assert_eq!(server.hits(), 1);
}

#[test]
fn forbidden_is_a_transport_error_without_retry() {
    // A retry would get the 200
    let server = serve(vec![response("403 Forbidden", "blocked"), ok("<html></html>")]);

    let err = fetcher(3, 0).fetch(&server.url("/Nas/Halftime/")).unwrap_err();

    match err {
        ScrapeError::Transport { reason, .. } => assert!(reason.contains("403"), "{reason}"),
        other => panic!("expected Transport, got {other:?}"),
    }
    assert_eq!(server.hits(), 1);
}

#[test]
fn truncated_body_is_retried() {
    let server = serve(vec![truncated(), ok("<html>whole</html>")]);

    let page = fetcher(2, 0).fetch(&server.url("/Nas/Halftime/")).unwrap();

    assert_eq!(page.body, "<html>whole</html>");
    assert_eq!(server.hits(), 2);
}

#[test]
fn exhausted_retries_give_transport() {
    let unavailable = || response("503 Service Unavailable", "");
    // One attempt plus two retries; the fourth answer is never reached
    let server = serve(vec![unavailable(), unavailable(), unavailable(), ok("<html></html>")]);

    let err = fetcher(2, 0).fetch(&server.url("/Nas/Halftime/")).unwrap_err();

    assert!(matches!(err, ScrapeError::Transport { .. }), "{err:?}");
    assert_eq!(server.hits(), 3);
}

#[test]
fn requests_are_paced() {
    let server = serve(vec![ok("<html>1</html>"), ok("<html>2</html>")]);
    let http = fetcher(0, 150);

    let started = Instant::now();
    http.fetch(&server.url("/a/")).unwrap();
    http.fetch(&server.url("/b/")).unwrap();

    assert!(started.elapsed() >= Duration::from_millis(150), "{:?}", started.elapsed());
    assert_eq!(server.hits(), 2);
}

#[derive(Default)]
struct Failures(Vec<usize>);

impl Progress for Failures {
    fn item_done(&mut self, index: usize, _q: &Query, records: usize) {
        panic!("query {index} reported done with {records} records");
    }
    fn item_failed(&mut self, index: usize, _q: &Query, error: &ScrapeError) {
        assert!(matches!(error, ScrapeError::Transport { .. }), "{error:?}");
        self.0.push(index);
    }
}

#[test]
fn blocked_search_fails_the_query_instead_of_finding_nothing() {
    let server = serve(vec![response("403 Forbidden", "blocked")]);
    let scrape = ScrapeOptions { base_url: server.base.clone(), ..options() };
    let http = fetcher(3, 0);
    let scraper = Scraper::new(&http, scrape);

    let mut failures = Failures::default();
    let records = scraper.scrape(&[Query::new("Halftime", Some("Nas"))], Some(&mut failures));

    assert!(records.is_empty());
    assert_eq!(failures.0, vec![0]);
    assert_eq!(server.hits(), 1);
}
