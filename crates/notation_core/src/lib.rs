//! # notation_core
//!
//! UI-agnostic editing/sanitization core for the gauss notation input.
//!
//! This crate provides the fundamental building blocks for keeping a text
//! control in sync with an external notation value:
//! - [`sanitize`]: the pure notation sanitizer
//! - [`sanitize_split`]: the caret-preserving edit transform
//! - [`SelectionRange`]: a text selection with start/end byte offsets
//! - [`TextControl`] / [`BufferControl`]: the control contract and a
//!   headless in-memory implementation of it
//!
//! ## Design Principles
//!
//! This crate is intentionally UI-agnostic and does not depend on:
//! - Any widget toolkit or rendering surface
//! - The message bus or the synchronizer runtime
//! - Platform-specific APIs
//!
//! It depends only on `std` and provides pure editing semantics that can be
//! tested independently and reused across different control frontends.

mod control;
mod sanitize;
mod selection;
mod text;

/// Caret position as a byte offset into the control value.
///
/// Always kept on a UTF-8 character boundary. For sanitized notation (pure
/// ASCII) byte and character offsets coincide.
pub type Caret = usize;

pub use control::{BufferControl, TextControl};
pub use sanitize::{is_notation_char, sanitize, sanitize_split};
pub use selection::SelectionRange;
pub use text::{clamp_to_char_boundary, prev_cursor_boundary};
