//! `ItunesClient` against a local one-shot HTTP server.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use tunesearch::{FetchError, ItunesClient, SearchClient};

/// Serves a single canned response and reports the request line it saw.
async fn serve_once(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (seen_tx, seen_rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let request = String::from_utf8_lossy(&request);
        let line = request.lines().next().unwrap_or_default().to_string();
        let _ = seen_tx.send(line);

        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.unwrap();
    });

    (format!("http://{addr}/search"), seen_rx)
}

fn client_for(base_url: String) -> ItunesClient {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    ItunesClient::from_parts(http, base_url, "DK", "music")
}

#[tokio::test]
async fn decodes_a_page_and_sends_pagination() {
    let body = r#"{
        "resultCount": 2,
        "results": [
            {"trackName": "Song 2", "artistName": "Blur", "releaseDate": "1997-04-07T07:00:00Z"},
            {"collectionName": "Parklife"}
        ]
    }"#;
    let (url, seen) = serve_once("200 OK", body).await;

    let records = client_for(url).fetch_page("blur", 10, 20).await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title.as_deref(), Some("Song 2"));
    assert_eq!(records[0].subtitle.as_deref(), Some("Blur"));
    assert_eq!(records[1].subtitle, None);

    let line = seen.await.unwrap();
    assert!(line.starts_with("GET /search?"), "{line}");
    for param in ["term=blur", "country=DK", "media=music", "limit=10", "offset=20"] {
        assert!(line.contains(param), "{param} missing from {line}");
    }
}

#[tokio::test]
async fn term_is_url_encoded() {
    let (url, seen) = serve_once("200 OK", r#"{"resultCount":0,"results":[]}"#).await;

    let records = client_for(url).fetch_page("daft punk", 10, 0).await.unwrap();

    assert!(records.is_empty());
    assert!(seen.await.unwrap().contains("term=daft+punk"));
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let (url, _seen) = serve_once("503 Service Unavailable", "{}").await;

    let err = client_for(url).fetch_page("blur", 10, 0).await.unwrap_err();

    assert!(matches!(err, FetchError::HttpStatus { status: 503 }));
    assert_eq!(err.to_string(), "Search service responded with HTTP 503");
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let (url, _seen) = serve_once("200 OK", "<html>not json</html>").await;

    let err = client_for(url).fetch_page("blur", 10, 0).await.unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(format!("http://{addr}/search"))
        .fetch_page("blur", 10, 0)
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Network(_)));
}
