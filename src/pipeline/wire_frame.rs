/// One frame as it travels over the channel.
///
/// The handshake and uncompressed batch arrays are UTF-8 JSON and travel as
/// text; raw payloads and anything compressed travel as binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireFrame {
    Text(String),
    Binary(Vec<u8>),
}

impl WireFrame {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            WireFrame::Text(text) => text.as_bytes(),
            WireFrame::Binary(bytes) => bytes,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, WireFrame::Text(_))
    }
}
