mod cancel_signal;
mod consumer;
mod producer;
mod progress;
mod run_controller;

pub use cancel_signal::CancelSignal;
pub use consumer::{drain_frames, drain_frames_with};
pub use producer::{SendLimit, stream_frames};
pub use progress::{ProducerReport, ProgressState, RunReport};
pub use run_controller::RunController;
