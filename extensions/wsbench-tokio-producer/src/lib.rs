mod producer_server;
pub mod utils;
mod ws_transport;

pub use producer_server::ProducerServer;
pub use ws_transport::AxumWsTransport;
