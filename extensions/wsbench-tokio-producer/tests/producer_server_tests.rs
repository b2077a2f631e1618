use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::time::{Duration, sleep, timeout};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::protocol::Message as WsMessage;
use wsbench::config::{Compression, ContentMode, PipelineConfig};
use wsbench::run::CancelSignal;
use wsbench_tokio_producer::ProducerServer;
use wsbench_tokio_producer::utils::bind_loopback_listener;

async fn spawn_server(
    config: PipelineConfig,
) -> (String, CancelSignal, tokio::task::JoinHandle<()>) {
    let (listener, addr) = bind_loopback_listener().await.unwrap();
    let server = ProducerServer::new(config).unwrap();
    let cancel = server.cancel_signal();

    let server_task = tokio::spawn(async move {
        let _ = Arc::new(server).serve_with_listener(listener).await;
    });

    (format!("ws://{addr}"), cancel, server_task)
}

/// Reads data messages until the server closes the socket.
async fn collect_messages(url: &str, handshake: &str) -> Vec<WsMessage> {
    let (mut ws, _) = connect_async(url).await.expect("connect failed");
    ws.send(WsMessage::Text(handshake.to_owned().into())).await.unwrap();

    let mut messages = vec![];
    while let Some(Ok(msg)) = ws.next().await {
        match msg {
            WsMessage::Close(_) => break,
            WsMessage::Text(_) | WsMessage::Binary(_) => messages.push(msg),
            _ => {}
        }
    }
    messages
}

#[tokio::test]
async fn streams_raw_binary_frames_then_closes() {
    let config = PipelineConfig::new(100, 1, Compression::None, ContentMode::Fixed, 1).unwrap();
    let (base_url, _cancel, server_task) = spawn_server(config).await;

    let messages = timeout(
        Duration::from_secs(5),
        collect_messages(&format!("{base_url}/ws"), r#"{"num_messages": 5}"#),
    )
    .await
    .expect("server never closed the stream");

    assert_eq!(messages.len(), 5);
    for msg in messages {
        assert_eq!(msg, WsMessage::Binary(vec![b'a'; 100].into()));
    }

    server_task.abort();
}

#[tokio::test]
async fn uncompressed_batches_travel_as_text_on_the_root_route() {
    let config = PipelineConfig::new(3, 2, Compression::None, ContentMode::Fixed, 1).unwrap();
    let (base_url, _cancel, server_task) = spawn_server(config).await;

    let messages = timeout(
        Duration::from_secs(5),
        collect_messages(&base_url, r#"{"num_messages": 3}"#),
    )
    .await
    .expect("server never closed the stream");

    assert_eq!(
        messages,
        vec![
            WsMessage::Text(r#"["YWFh","YWFh"]"#.to_string().into()),
            WsMessage::Text(r#"["YWFh"]"#.to_string().into()),
        ]
    );

    server_task.abort();
}

#[tokio::test]
async fn cancel_signal_shuts_the_server_down() {
    let config = PipelineConfig::default();
    let (_base_url, cancel, server_task) = spawn_server(config).await;

    sleep(Duration::from_millis(50)).await;
    cancel.cancel();

    timeout(Duration::from_secs(5), server_task)
        .await
        .expect("server did not stop after cancellation")
        .unwrap();
}
