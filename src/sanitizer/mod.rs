//! Sanitizer policies: parse, scrub, serialize.
//!
//! Each policy composes the fragment parser, one scrubbing pass, and a
//! serialization step behind the single [`Sanitizer::sanitize`] call.
//!
//! Built-in policies:
//!
//! - [`FullSanitizer`] -- strip all markup, return plain text.
//! - [`LinkSanitizer`] -- remove anchors and `href`, keep everything else.
//! - [`SafeListSanitizer`] -- keep only allow-listed tags and attributes,
//!   with CSS scrubbing for `style` values.

mod full;
mod link;
mod safe_list;

pub use full::FullSanitizer;
pub use link::LinkSanitizer;
pub use safe_list::{
    DEFAULT_ALLOWED_ATTRIBUTES, DEFAULT_ALLOWED_TAGS, SafeListConfig, SafeListSanitizer,
    SanitizeOptions,
};

use scraper::Html;

use crate::walk::{Scrub, scrub_fragment};

/// Trait for HTML sanitization policies.
///
/// Implementations must provide `sanitize`; there is no default behavior to
/// inherit. Two guards are common to all policies: absent input cannot be
/// expressed (`&str`), and empty input is returned unchanged without
/// invoking the parser.
pub trait Sanitizer {
    /// Sanitize the given HTML fragment, returning the safe rendition.
    fn sanitize(&self, html: &str) -> String;
}

/// Parse a fragment and run one scrubbing pass over it.
pub(crate) fn parse_and_scrub(html: &str, scrubber: &mut dyn Scrub) -> Html {
    let mut doc = Html::parse_fragment(html);
    scrub_fragment(&mut doc, scrubber);
    doc
}
