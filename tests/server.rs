//! Integration tests for the local server.

mod common;

use common::{RecordingTool, project};
use honeyos_devtools::dist::{Distributor, SettingsBuilder};
use honeyos_devtools::{DevtoolsError, cli, server};
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

fn loopback() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::LOCALHOST, 0))
}

#[tokio::test]
async fn serves_files_and_releases_port_on_cancel() {
    let root = tempfile::tempdir().unwrap();
    std::fs::write(root.path().join("index.html"), "<h1>HoneyOS</h1>").unwrap();
    std::fs::write(root.path().join("honey.wasm"), [0u8, b'a', b's', b'm']).unwrap();
    std::fs::create_dir(root.path().join("js")).unwrap();
    std::fs::write(root.path().join("js/index.js"), "export {};").unwrap();

    let listener = server::bind(loopback()).unwrap();
    let addr = listener.local_addr().unwrap();

    // A live listener keeps the port to itself.
    assert!(matches!(
        server::bind(addr),
        Err(DevtoolsError::Bind { .. })
    ));

    let shutdown = CancellationToken::new();
    let served_root = root.path().to_path_buf();
    let handle = tokio::spawn({
        let shutdown = shutdown.clone();
        async move { server::serve(listener, &served_root, shutdown).await }
    });

    let base = format!("http://{}", addr);
    let client = reqwest::Client::new();

    let index = client.get(format!("{base}/")).send().await.unwrap();
    assert_eq!(index.status(), 200);
    assert_eq!(index.text().await.unwrap(), "<h1>HoneyOS</h1>");

    let wasm = client.get(format!("{base}/honey.wasm")).send().await.unwrap();
    assert_eq!(wasm.status(), 200);
    assert_eq!(wasm.headers()["content-type"], "application/wasm");

    let listing = client.get(format!("{base}/js/")).send().await.unwrap();
    assert_eq!(listing.status(), 200);
    let body = listing.text().await.unwrap();
    assert!(body.contains("Directory listing for /js/"));
    assert!(body.contains("<a href=\"index.js\">index.js</a>"));

    let missing = client.get(format!("{base}/nope.txt")).send().await.unwrap();
    assert_eq!(missing.status(), 404);

    shutdown.cancel();
    handle.await.unwrap().unwrap();

    let rebound = server::bind(addr).unwrap();
    assert_eq!(rebound.local_addr().unwrap(), addr);
}

#[tokio::test]
async fn range_requests_are_honoured() {
    let root = tempfile::tempdir().unwrap();
    std::fs::write(root.path().join("hvm.min.js"), "0123456789").unwrap();

    let listener = server::bind(loopback()).unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = CancellationToken::new();
    let served_root = root.path().to_path_buf();
    let handle = tokio::spawn({
        let shutdown = shutdown.clone();
        async move { server::serve(listener, &served_root, shutdown).await }
    });

    let response = reqwest::Client::new()
        .get(format!("http://{}/hvm.min.js", addr))
        .header("range", "bytes=2-5")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 206);
    assert_eq!(response.text().await.unwrap(), "2345");

    shutdown.cancel();
    handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn serve_starts_after_partial_distribution() {
    let project = project();
    let port = {
        let taken = server::bind(loopback()).unwrap();
        taken.local_addr().unwrap().port()
    };
    let settings = SettingsBuilder::new()
        .project_root(project.path())
        .serve_port(port)
        .build()
        .unwrap();
    let distributor = Distributor::with_toolchains(
        settings,
        RecordingTool::missing("clang"),
        RecordingTool::available("npm"),
    );

    let shutdown = CancellationToken::new();
    let fetch = async {
        let client = reqwest::Client::new();
        let url = format!("http://127.0.0.1:{port}/favicon.ico");
        let mut fetched = None;
        for _ in 0..200 {
            if let Ok(response) = client.get(&url).send().await {
                let status = response.status();
                fetched = Some((status, response.text().await.unwrap()));
                break;
            }
            tokio::time::sleep(Duration::from_millis(25)).await;
        }
        shutdown.cancel();
        fetched
    };

    let (code, fetched) = tokio::join!(cli::serve(&distributor, shutdown.clone()), fetch);

    let (status, body) = fetched.expect("server never answered");
    assert_eq!(status, 200);
    assert_eq!(body, "ICON");
    // The kernel step aborted, so the invocation still reports a failed step.
    assert_eq!(code.unwrap(), cli::EXIT_STEP_FAILED);
    assert!(distributor.settings().hvm_output().is_file());
    assert!(!distributor.settings().kernel_output().exists());
}
