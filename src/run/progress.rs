use crate::constants::PROGRESS_LOG_STEPS;
use std::fmt;
use std::time::{Duration, Instant};

/// Consumer-local counters, mutated only by the receive loop.
#[derive(Debug)]
pub struct ProgressState {
    target_count: u64,
    messages_received: u64,
    frames_received: u64,
    start_time: Instant,
    milestone_step: u64,
    next_milestone: u64,
}

impl ProgressState {
    /// Starts the clock.
    pub fn start(target_count: u64) -> Self {
        let milestone_step = (target_count / PROGRESS_LOG_STEPS).max(1);
        Self {
            target_count,
            messages_received: 0,
            frames_received: 0,
            start_time: Instant::now(),
            milestone_step,
            next_milestone: milestone_step,
        }
    }

    /// Records one decoded frame carrying `messages` logical messages.
    pub fn record_frame(&mut self, messages: usize) {
        self.frames_received += 1;
        self.messages_received += messages as u64;

        if self.messages_received >= self.next_milestone {
            tracing::debug!(
                "Received {}/{} messages ({} frames, {:.2?})",
                self.messages_received,
                self.target_count,
                self.frames_received,
                self.start_time.elapsed()
            );
            while self.next_milestone <= self.messages_received {
                self.next_milestone += self.milestone_step;
            }
        }
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.messages_received >= self.target_count
    }

    pub fn messages_received(&self) -> u64 {
        self.messages_received
    }

    /// Stops the clock.
    pub fn finish(self) -> RunReport {
        RunReport::new(
            self.messages_received,
            self.frames_received,
            self.start_time.elapsed(),
        )
    }
}

/// The observable outcome of a consumer run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunReport {
    pub messages_received: u64,
    pub frames_received: u64,
    pub elapsed: Duration,
    /// Logical messages per second.
    pub rate: f64,
}

impl RunReport {
    pub fn new(messages_received: u64, frames_received: u64, elapsed: Duration) -> Self {
        let seconds = elapsed.as_secs_f64();
        let rate = if seconds > 0.0 {
            messages_received as f64 / seconds
        } else {
            0.0
        };
        Self {
            messages_received,
            frames_received,
            elapsed,
            rate,
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "received {} messages in {} frames over {:.3}s ({:.0} msg/s)",
            self.messages_received,
            self.frames_received,
            self.elapsed.as_secs_f64(),
            self.rate
        )
    }
}

/// What a producer session managed to send before it stopped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProducerReport {
    pub frames_sent: u64,
    pub messages_sent: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_is_zero_for_zero_elapsed() {
        let report = RunReport::new(10, 10, Duration::ZERO);
        assert_eq!(report.rate, 0.0);
    }

    #[test]
    fn rate_divides_messages_by_seconds() {
        let report = RunReport::new(500, 5, Duration::from_millis(250));
        assert!((report.rate - 2000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn progress_counts_messages_not_frames() {
        let mut progress = ProgressState::start(10);
        progress.record_frame(4);
        progress.record_frame(4);
        assert!(!progress.is_complete());
        progress.record_frame(2);
        assert!(progress.is_complete());

        let report = progress.finish();
        assert_eq!(report.messages_received, 10);
        assert_eq!(report.frames_received, 3);
    }
}
