use axum::{Router, extract::ws::WebSocketUpgrade, routing::get};
use std::net::SocketAddr;
use tokio::sync::mpsc;
use tokio::time::{Duration, timeout};
use tokio_tungstenite::{MaybeTlsStream, connect_async};
use wsbench::BenchError;
use wsbench::session::{SessionParams, accept_session};
use wsbench_tokio_producer::AxumWsTransport;
use wsbench_tokio_producer::utils::bind_loopback_listener;

/// Serves a route that reads the session parameters over an
/// [`AxumWsTransport`] and reports the outcome. `upgraded` fires once the
/// socket is live, before the handshake is read.
async fn spawn_handshake_reader() -> (
    SocketAddr,
    mpsc::UnboundedReceiver<()>,
    mpsc::UnboundedReceiver<Result<SessionParams, BenchError>>,
) {
    let (listener, addr) = bind_loopback_listener().await.unwrap();
    let (upgraded_tx, upgraded_rx) = mpsc::unbounded_channel();
    let (result_tx, result_rx) = mpsc::unbounded_channel();

    let app = Router::new().route(
        "/",
        get(move |ws: WebSocketUpgrade| {
            let upgraded_tx = upgraded_tx.clone();
            let result_tx = result_tx.clone();
            async move {
                ws.on_upgrade(move |socket| async move {
                    let _ = upgraded_tx.send(());
                    let mut transport = AxumWsTransport::new(socket);
                    let _ = result_tx.send(accept_session(&mut transport).await);
                })
            }
        }),
    );

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (addr, upgraded_rx, result_rx)
}

#[tokio::test]
async fn consumer_reset_before_handshake_reads_as_connection_closed() {
    let (addr, mut upgraded, mut results) = spawn_handshake_reader().await;

    let (ws, _) = connect_async(format!("ws://{addr}")).await.unwrap();
    timeout(Duration::from_secs(5), upgraded.recv())
        .await
        .expect("socket was never upgraded")
        .unwrap();

    // A zero linger turns the drop into a TCP reset instead of a FIN.
    if let MaybeTlsStream::Plain(stream) = ws.get_ref() {
        stream.set_linger(Some(Duration::ZERO)).unwrap();
    }
    drop(ws);

    let result = timeout(Duration::from_secs(5), results.recv())
        .await
        .expect("session never finished")
        .unwrap();

    assert!(
        matches!(result, Err(BenchError::ConnectionClosed)),
        "expected ConnectionClosed, got {result:?}"
    );
}

#[tokio::test]
async fn consumer_dropping_without_close_frame_reads_as_connection_closed() {
    let (addr, mut upgraded, mut results) = spawn_handshake_reader().await;

    let (ws, _) = connect_async(format!("ws://{addr}")).await.unwrap();
    timeout(Duration::from_secs(5), upgraded.recv())
        .await
        .expect("socket was never upgraded")
        .unwrap();
    drop(ws);

    let result = timeout(Duration::from_secs(5), results.recv())
        .await
        .expect("session never finished")
        .unwrap();

    assert!(
        matches!(result, Err(BenchError::ConnectionClosed)),
        "expected ConnectionClosed, got {result:?}"
    );
}
