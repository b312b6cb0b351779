//! Base64 boundary encoding
//!
//! The caller receives the document as one base64 line on stdout and decodes
//! it back into file bytes on its side.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}
