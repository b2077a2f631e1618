mod consumer_client;
mod ws_transport;

pub use consumer_client::ConsumerClient;
pub use ws_transport::TungsteniteTransport;
