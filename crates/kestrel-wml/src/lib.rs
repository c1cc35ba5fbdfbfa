//! Lexer and push parser for the **Kestrel Window Markup Language** (`.wml`).
//!
//! This crate is intentionally dependency-free so it can be consumed by
//! editor tooling, linters, and tests without pulling in any UI or canvas
//! code.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`error`] | `ParseError` |
//! | [`lexer`] | `Lexer`, `Token` |
//! | [`reader`] | `WmlReader`, `WmlHandler` |
//! | [`value`] | `PropertyValue`, `ValueKind`, `Vec2i` |
//!
//! # Event model
//!
//! `.wml` is consumed SAX-style: the reader emits `start_element`,
//! `on_property`, and `end_element` events in document order and retains no
//! tree of its own. Property values are tagged ([`PropertyValue`]); bare
//! identifiers are validated against enum sets registered on the reader
//! before the parse.
//!
//! ```wml
//! Window {
//!     title: "Scene Editor"
//!     size: [1280, 720]
//!     Label { text: "Hello"  fontSize: 15 }
//! }
//! ```

pub mod error;
pub mod lexer;
pub mod reader;
pub mod value;

pub use error::ParseError;
pub use reader::{WmlHandler, WmlReader};
pub use value::{PropertyValue, ValueKind, Vec2i};
