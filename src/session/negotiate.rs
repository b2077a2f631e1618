use crate::BenchError;
use crate::pipeline::WireFrame;
use crate::session::SessionParams;
use crate::transport::FrameTransport;

/// Consumer side of the handshake.
///
/// Writes exactly one uncompressed text frame carrying the session
/// parameters. Nothing is read back. Any write failure aborts the run as a
/// [`BenchError::HandshakeFailure`].
pub async fn negotiate<T>(transport: &mut T, target_count: u64) -> Result<(), BenchError>
where
    T: FrameTransport + ?Sized,
{
    let params = SessionParams::new(target_count);
    let body = params
        .to_json()
        .map_err(|err| BenchError::HandshakeFailure(err.to_string()))?;

    transport
        .send_frame(WireFrame::Text(body))
        .await
        .map_err(|err| BenchError::HandshakeFailure(err.to_string()))?;

    tracing::debug!("Sent session parameters: {:?}", params);
    Ok(())
}

/// Producer side of the handshake: reads the first frame as session
/// parameters.
pub async fn accept_session<T>(transport: &mut T) -> Result<SessionParams, BenchError>
where
    T: FrameTransport + ?Sized,
{
    let Some(frame) = transport.recv_frame().await? else {
        return Err(BenchError::ConnectionClosed);
    };

    let params = SessionParams::from_json(frame.as_bytes()).map_err(|err| {
        BenchError::HandshakeFailure(format!("invalid session parameters: {}", err))
    })?;

    tracing::debug!("Received session parameters: {:?}", params);
    Ok(params)
}
