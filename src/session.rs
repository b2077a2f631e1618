mod negotiate;
mod session_params;

pub use negotiate::{accept_session, negotiate};
pub use session_params::SessionParams;
