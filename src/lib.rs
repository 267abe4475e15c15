//! # html_scrubber
//!
//! A tree-scrubbing HTML sanitizer: fragments are parsed, walked node by
//! node, and every node or attribute not explicitly permitted is removed or
//! rewritten before serialization.
//!
//! ## Overview
//!
//! Scrubbers implement the [`Scrub`] visitor trait and are driven over the
//! parsed tree by the walk in [`walk`]; sanitizer policies in [`sanitizer`]
//! compose a parse, one scrubbing pass, and a serialization step behind a
//! single [`Sanitizer::sanitize`] call.
//!
//! Built-in policies:
//!
//! - [`FullSanitizer`] -- strip all markup, return plain text.
//! - [`LinkSanitizer`] -- remove anchors and `href` attributes only.
//! - [`SafeListSanitizer`] -- keep only allow-listed tags/attributes, with
//!   URI protocol checks and CSS scrubbing for `style` values.
//!
//! ## Quick start
//!
//! ```rust
//! use html_scrubber::{FullSanitizer, SafeListSanitizer, Sanitizer};
//!
//! let full = FullSanitizer::new();
//! assert_eq!(full.sanitize("<b>Bold</b> no more!"), "Bold no more!");
//!
//! let safe = SafeListSanitizer::new();
//! assert_eq!(
//!     safe.sanitize(r#"<p onclick="x()">hi</p><script>alert(1)</script>"#),
//!     "<p>hi</p>"
//! );
//! ```
//!
//! Custom scrubbers implement [`Scrub`] and plug into
//! [`SafeListSanitizer::sanitize_with_scrubber`], or can be driven directly
//! with [`walk::scrub_fragment`].
//!
//! ## Threading
//!
//! Every sanitize call runs to completion on the caller's thread; there is
//! no I/O and no internal locking. Sanitizer instances own their
//! configuration, so sharing them between threads is safe by construction.
//! Traversal cost is proportional to node count and unbounded; callers that
//! need a latency ceiling must limit input size before sanitizing.

pub mod css;
pub mod dom;
pub mod error;
pub mod safelist;
pub mod sanitizer;
pub mod scrubber;
pub mod walk;

pub use error::{HtmlScrubberError, Result};
pub use sanitizer::{
    DEFAULT_ALLOWED_ATTRIBUTES, DEFAULT_ALLOWED_TAGS, FullSanitizer, LinkSanitizer,
    SafeListConfig, SafeListSanitizer, SanitizeOptions, Sanitizer,
};
pub use scrubber::{AllowList, PermitScrubber, TargetScrubber, TextOnlyScrubber};
pub use walk::{Direction, Scrub, ScrubResult};

use std::sync::OnceLock;

// Process-wide default safe list, set at most once at startup.
static DEFAULT_SAFE_LIST: OnceLock<SafeListConfig> = OnceLock::new();

/// Install the process-wide default [`SafeListConfig`].
///
/// Call once at application startup, before constructing sanitizers.
/// [`SafeListSanitizer::new`] snapshots this configuration; instances built
/// earlier keep the sets they were built with. Without a call, the
/// compiled-in defaults ([`DEFAULT_ALLOWED_TAGS`],
/// [`DEFAULT_ALLOWED_ATTRIBUTES`]) apply.
///
/// # Panics
///
/// Panics if called more than once.
pub fn set_default_safe_list(config: SafeListConfig) {
    DEFAULT_SAFE_LIST
        .set(config)
        .unwrap_or_else(|_| panic!("Default safe list already initialized"));
}

/// The process-wide default safe list: the configuration registered with
/// [`set_default_safe_list`], or the compiled-in defaults.
pub fn default_safe_list() -> SafeListConfig {
    DEFAULT_SAFE_LIST.get().cloned().unwrap_or_default()
}
