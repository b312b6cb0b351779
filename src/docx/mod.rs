//! WordprocessingML package building
//!
//! A `.docx` file is a ZIP archive of OOXML parts. This module turns a
//! [`Document`](crate::document::Document) into that archive, entirely in
//! memory.

pub mod writer;
pub mod xml;

pub use writer::render;
