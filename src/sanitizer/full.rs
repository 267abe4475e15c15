//! Strip-everything policy.

use super::{Sanitizer, parse_and_scrub};
use crate::dom;
use crate::scrubber::TextOnlyScrubber;

/// Policy that removes all markup and returns the remaining text.
///
/// The output is literal text extraction, not markup: entities decoded by
/// the parser are not re-encoded. Script and style payloads are discarded,
/// not surfaced as text.
///
/// # Example
///
/// ```
/// use html_scrubber::{FullSanitizer, Sanitizer};
///
/// let sanitizer = FullSanitizer::new();
/// assert_eq!(
///     sanitizer.sanitize("<b>Bold</b> no more! <a href='more.html'>See more</a>..."),
///     "Bold no more! See more..."
/// );
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct FullSanitizer;

impl FullSanitizer {
    /// Create the policy. Stateless; equivalent to the unit value.
    pub fn new() -> Self {
        Self
    }
}

impl Sanitizer for FullSanitizer {
    fn sanitize(&self, html: &str) -> String {
        if html.is_empty() {
            return html.to_owned();
        }
        let doc = parse_and_scrub(html, &mut TextOnlyScrubber::new());
        dom::to_text(&doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_all_tags() {
        let sanitizer = FullSanitizer::new();
        assert_eq!(
            sanitizer.sanitize("<b>Bold</b> no more! <a href='x.html'>See more</a>..."),
            "Bold no more! See more..."
        );
    }

    #[test]
    fn empty_input_is_returned_unchanged() {
        assert_eq!(FullSanitizer::new().sanitize(""), "");
    }

    #[test]
    fn script_text_does_not_leak() {
        assert_eq!(
            FullSanitizer::new().sanitize("<script>alert(1)</script>hello"),
            "hello"
        );
    }

    #[test]
    fn entities_come_out_decoded() {
        assert_eq!(FullSanitizer::new().sanitize("<p>a &amp; b</p>"), "a & b");
    }

    #[test]
    fn idempotent_on_its_own_output() {
        let sanitizer = FullSanitizer::new();
        let once = sanitizer.sanitize("<div><p>one</p> two</div>");
        assert_eq!(sanitizer.sanitize(&once), once);
    }
}
