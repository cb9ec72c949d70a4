//! Mock of the upload API used by the integration tests.
//!
//! Serves `/upload/local` and `/upload/s3` on an ephemeral port, records every
//! multipart part it receives and answers with a canned status and body.

#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode, Uri};
use axum::routing::post;
use axum::Router;
use storage_uploader::upload::SelectedFile;
use storage_uploader::{UploadWidget, UploaderConfig};

#[derive(Debug, Clone)]
pub struct ReceivedPart {
    pub path: String,
    pub field: Option<String>,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Clone)]
struct MockApi {
    status: StatusCode,
    body: String,
    received: Arc<Mutex<Vec<ReceivedPart>>>,
}

async fn handle_upload(
    State(api): State<MockApi>,
    uri: Uri,
    mut multipart: Multipart,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    while let Some(field) = multipart.next_field().await.expect("valid multipart body") {
        let part = ReceivedPart {
            path: uri.path().to_string(),
            field: field.name().map(str::to_string),
            file_name: field.file_name().map(str::to_string),
            content_type: field.content_type().map(str::to_string),
            bytes: field.bytes().await.expect("readable part").to_vec(),
        };
        api.received.lock().unwrap().push(part);
    }

    (
        api.status,
        [(header::CONTENT_TYPE, "application/json")],
        api.body.clone(),
    )
}

pub struct MockServer {
    pub base_url: String,
    received: Arc<Mutex<Vec<ReceivedPart>>>,
}

impl MockServer {
    pub async fn start(status: StatusCode, body: &str) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let api = MockApi {
            status,
            body: body.to_string(),
            received: received.clone(),
        };

        let app = Router::new()
            .route("/upload/local", post(handle_upload))
            .route("/upload/s3", post(handle_upload))
            .with_state(api);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock server");
        let addr = listener.local_addr().expect("mock server address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url: format!("http://{addr}"),
            received,
        }
    }

    pub fn config(&self) -> UploaderConfig {
        UploaderConfig::new(&self.base_url).expect("valid mock url")
    }

    pub fn received(&self) -> Vec<ReceivedPart> {
        self.received.lock().unwrap().clone()
    }
}

/// Base URL of a port nothing listens on.
pub async fn unreachable_config() -> UploaderConfig {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    UploaderConfig::new(&format!("http://{addr}")).unwrap()
}

pub fn write_fixture(dir: &Path, name: &str, content: &[u8]) -> SelectedFile {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content).unwrap();
    SelectedFile::from_path(&path).unwrap()
}

/// Polls the widget like the UI loop does until the in-flight upload settles.
pub async fn wait_until_settled(widget: &mut UploadWidget) {
    for _ in 0..200 {
        if widget.poll() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
    }
    panic!("upload did not settle");
}
