use crate::BenchError;
use crate::config::{Compression, ConfigError, ContentMode, PipelineConfig};
use crate::pipeline::{
    BatchFrameDecoder, BatchFrameEncoder, CompressionStrategy, FixedContent, Gzip,
    RandomMessagePool, SingleFrameDecoder, SingleFrameEncoder, Uncompressed,
};
use crate::run::{
    CancelSignal, ProducerReport, RunReport, SendLimit, drain_frames, stream_frames,
};
use crate::session::{accept_session, negotiate};
use crate::transport::FrameTransport;

/// Wires a validated [`PipelineConfig`] to a concrete producer or consumer
/// pipeline and drives it over one connection.
///
/// The pipeline variant is picked once per session, before the first frame.
/// Each variant is a separate monomorphised loop, so there is no branching
/// on batching, compression or content mode inside the hot loop.
///
/// One controller may serve many connections concurrently; every session
/// builds its own encoder, decoder and message pool.
#[derive(Debug, Clone)]
pub struct RunController {
    config: PipelineConfig,
    cancel: CancelSignal,
    unbounded: bool,
}

impl RunController {
    pub fn new(config: PipelineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            cancel: CancelSignal::new(),
            unbounded: false,
        })
    }

    /// Shares an externally owned cancellation signal with this controller.
    pub fn with_cancel_signal(mut self, cancel: CancelSignal) -> Self {
        self.cancel = cancel;
        self
    }

    /// Makes producer sessions ignore the handshake's message count and
    /// stream until the consumer disconnects.
    pub fn unbounded(mut self) -> Self {
        self.unbounded = true;
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn cancel_signal(&self) -> CancelSignal {
        self.cancel.clone()
    }

    /// Runs the consumer role: sends the session parameters, drains frames
    /// until `target_count` logical messages arrive (or the peer closes, or
    /// the run is cancelled), then releases the channel.
    pub async fn run_consumer<T>(&self, transport: &mut T) -> Result<RunReport, BenchError>
    where
        T: FrameTransport + ?Sized,
    {
        negotiate(transport, self.config.target_count).await?;

        tracing::info!(
            "Consuming {} messages (batch factor {}, compression {})",
            self.config.target_count,
            self.config.batch_factor,
            self.config.compression
        );

        let result = match self.config.compression {
            Compression::None => self.drain_variant::<T, Uncompressed>(transport).await,
            Compression::Gzip => self.drain_variant::<T, Gzip>(transport).await,
        };

        release(transport).await;
        result
    }

    /// Runs the producer role: reads the session parameters, streams frames
    /// until the requested count is sent (or the peer closes, or the run is
    /// cancelled), then releases the channel.
    pub async fn run_producer<T>(&self, transport: &mut T) -> Result<ProducerReport, BenchError>
    where
        T: FrameTransport + ?Sized,
    {
        let params = accept_session(transport).await?;

        let limit = if self.unbounded {
            SendLimit::Unbounded
        } else {
            SendLimit::Messages(params.target_count)
        };

        tracing::info!(
            "Producing {:?} (unit size {}, batch factor {}, compression {}, content {:?})",
            limit,
            self.config.unit_size,
            self.config.batch_factor,
            self.config.compression,
            self.config.content_mode
        );

        let result = match self.config.compression {
            Compression::None => self.stream_variant::<T, Uncompressed>(transport, limit).await,
            Compression::Gzip => self.stream_variant::<T, Gzip>(transport, limit).await,
        };

        release(transport).await;
        result
    }

    async fn drain_variant<T, C>(&self, transport: &mut T) -> Result<RunReport, BenchError>
    where
        T: FrameTransport + ?Sized,
        C: CompressionStrategy,
    {
        let target_count = self.config.target_count;

        if self.config.is_batched() {
            let mut decoder = BatchFrameDecoder::new(C::default(), self.batch_factor());
            drain_frames(transport, &mut decoder, target_count, &self.cancel).await
        } else {
            let mut decoder = SingleFrameDecoder::<C>::default();
            drain_frames(transport, &mut decoder, target_count, &self.cancel).await
        }
    }

    async fn stream_variant<T, C>(
        &self,
        transport: &mut T,
        limit: SendLimit,
    ) -> Result<ProducerReport, BenchError>
    where
        T: FrameTransport + ?Sized,
        C: CompressionStrategy,
    {
        let unit_size = self.config.unit_size as usize;
        let batch_factor = self.batch_factor();
        let cancel = &self.cancel;

        tracing::debug!("Selected {:?} compression pipeline", C::KIND);

        match (self.config.is_batched(), self.config.content_mode) {
            (false, ContentMode::Fixed) => {
                let source = FixedContent::new(unit_size);
                let mut encoder = SingleFrameEncoder::new(source, C::default());
                stream_frames(transport, &mut encoder, limit, cancel).await
            }
            (false, ContentMode::Random) => {
                let pool = RandomMessagePool::new(unit_size, 1);
                let mut encoder = SingleFrameEncoder::new(pool, C::default());
                stream_frames(transport, &mut encoder, limit, cancel).await
            }
            (true, ContentMode::Fixed) => {
                let source = FixedContent::new(unit_size);
                let mut encoder = BatchFrameEncoder::new(source, C::default(), batch_factor);
                stream_frames(transport, &mut encoder, limit, cancel).await
            }
            (true, ContentMode::Random) => {
                let pool = RandomMessagePool::new(unit_size, batch_factor);
                let mut encoder = BatchFrameEncoder::new(pool, C::default(), batch_factor);
                stream_frames(transport, &mut encoder, limit, cancel).await
            }
        }
    }

    fn batch_factor(&self) -> usize {
        self.config.batch_factor as usize
    }
}

async fn release<T>(transport: &mut T)
where
    T: FrameTransport + ?Sized,
{
    if let Err(err) = transport.close().await {
        tracing::debug!("Error while closing transport: {}", err);
    }
}
