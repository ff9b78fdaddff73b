//! `GithubTarballFetcher` against a local codeload stand-in.
//!
//! The fetcher uses the blocking reqwest client, so every fetch runs on a
//! `spawn_blocking` thread while wiremock serves from the async runtime.

use std::fs;
use std::path::PathBuf;

use flate2::write::GzEncoder;
use flate2::Compression;
use helicone_templates::{
    FetchError, FetchOptions, FetchSummary, GithubTarballFetcher, TemplateFetcher, TemplateSource,
};
use tar::{Builder, Header};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ARCHIVE_PATH: &str = "/acme/starters/tar.gz/HEAD";

fn tarball(files: &[(&str, &str)]) -> Vec<u8> {
    let mut builder = Builder::new(GzEncoder::new(Vec::new(), Compression::default()));
    for (name, contents) in files {
        let mut header = Header::new_gnu();
        header.set_size(contents.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(&mut header, format!("starters-0f1e2d/{name}"), contents.as_bytes())
            .unwrap();
    }
    builder.into_inner().unwrap().finish().unwrap()
}

async fn serve(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(ARCHIVE_PATH))
        .respond_with(response)
        .mount(server)
        .await;
}

async fn fetch_from(server: &MockServer, destination: PathBuf) -> Result<FetchSummary, FetchError> {
    let base_url = server.uri();
    tokio::task::spawn_blocking(move || {
        let fetcher = GithubTarballFetcher::with_base_url(&base_url)?;
        let source = TemplateSource::parse("acme/starters/web")?;
        fetcher.fetch(&source, &destination, FetchOptions { overwrite: true })
    })
    .await
    .unwrap()
}

#[tokio::test]
async fn test_fetch_unpacks_template_subdirectory() {
    let server = MockServer::start().await;
    let body = tarball(&[
        ("README.md", "registry readme"),
        ("web/package.json", "{}"),
        ("web/src/index.ts", "export {}"),
    ]);
    serve(&server, ResponseTemplate::new(200).set_body_bytes(body)).await;
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("my-app");

    let summary = fetch_from(&server, dest.clone()).await.unwrap();

    assert_eq!(summary.files_written, 2);
    assert_eq!(summary.source.to_string(), "acme/starters/web#HEAD");
    assert_eq!(fs::read_to_string(dest.join("package.json")).unwrap(), "{}");
    assert!(dest.join("src/index.ts").exists());
    assert!(!dest.join("README.md").exists());
}

#[tokio::test]
async fn test_not_found_maps_to_not_found() {
    let server = MockServer::start().await;
    serve(&server, ResponseTemplate::new(404)).await;
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("my-app");

    let result = fetch_from(&server, dest.clone()).await;

    match result {
        Err(FetchError::NotFound { url }) => assert!(url.ends_with(ARCHIVE_PATH)),
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert!(!dest.exists());
}

#[tokio::test]
async fn test_server_error_maps_to_status() {
    let server = MockServer::start().await;
    serve(&server, ResponseTemplate::new(502)).await;
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("my-app");

    let result = fetch_from(&server, dest.clone()).await;

    assert!(matches!(result, Err(FetchError::Status { status: 502, .. })));
    assert!(!dest.exists());
}

#[tokio::test]
async fn test_archive_without_subdirectory_is_template_missing() {
    let server = MockServer::start().await;
    let body = tarball(&[("api/main.py", "app = FastAPI()")]);
    serve(&server, ResponseTemplate::new(200).set_body_bytes(body)).await;
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("my-app");

    let result = fetch_from(&server, dest.clone()).await;

    match result {
        Err(FetchError::TemplateMissing { repo, subdir }) => {
            assert_eq!(repo, "acme/starters#HEAD");
            assert_eq!(subdir, "web");
        }
        other => panic!("expected TemplateMissing, got {other:?}"),
    }
    assert!(!dest.exists());
}

#[tokio::test]
async fn test_corrupt_body_is_an_archive_error() {
    let server = MockServer::start().await;
    serve(
        &server,
        ResponseTemplate::new(200).set_body_bytes(b"not a tarball".to_vec()),
    )
    .await;
    let temp = TempDir::new().unwrap();

    let result = fetch_from(&server, temp.path().join("my-app")).await;

    assert!(matches!(result, Err(FetchError::Archive(_))));
}
