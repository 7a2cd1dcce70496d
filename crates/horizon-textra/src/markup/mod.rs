//! Markup tokens.
//!
//! Labels accept `{...}` tokens between runs of text. Built-in keywords map to
//! [`InternalToken`]; any other name is a text effect, closed by the same name
//! prefixed with `END`.
//!
//! ```
//! use horizon_textra::markup::{scan, InternalToken, Segment};
//!
//! let segments = scan("Wait for it{WAIT=1}...");
//! assert!(matches!(
//!     segments[1],
//!     Segment::Token { token: InternalToken::Wait, .. }
//! ));
//! ```

mod scan;
mod token;

pub use scan::{Segment, plain_text, scan};
pub use token::{InternalToken, TokenCategory};
