//! Link-removal policy.

use super::{Sanitizer, parse_and_scrub};
use crate::dom;
use crate::scrubber::TargetScrubber;

/// Policy that removes `<a>` elements and `href` attributes, leaving the
/// link text and all other markup in place.
///
/// # Example
///
/// ```
/// use html_scrubber::{LinkSanitizer, Sanitizer};
///
/// let sanitizer = LinkSanitizer::new();
/// assert_eq!(
///     sanitizer.sanitize(r#"<a href="example.com">Only the link text will be kept.</a>"#),
///     "Only the link text will be kept."
/// );
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct LinkSanitizer;

impl LinkSanitizer {
    /// Create the policy. Stateless; equivalent to the unit value.
    pub fn new() -> Self {
        Self
    }
}

impl Sanitizer for LinkSanitizer {
    fn sanitize(&self, html: &str) -> String {
        if html.is_empty() {
            return html.to_owned();
        }
        let mut scrubber = TargetScrubber::new().tags(["a"]).attributes(["href"]);
        let doc = parse_and_scrub(html, &mut scrubber);
        dom::to_markup(&doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_are_unwrapped() {
        let sanitizer = LinkSanitizer::new();
        assert_eq!(
            sanitizer.sanitize(r#"<a href="x.com">keep text</a>"#),
            "keep text"
        );
    }

    #[test]
    fn other_markup_is_untouched() {
        let sanitizer = LinkSanitizer::new();
        assert_eq!(
            sanitizer.sanitize(r#"<p>go <a href="/there">there</a> <b>now</b></p>"#),
            "<p>go there <b>now</b></p>"
        );
    }

    #[test]
    fn stray_href_attributes_are_removed() {
        let sanitizer = LinkSanitizer::new();
        assert_eq!(
            sanitizer.sanitize(r#"<span href="x">y</span>"#),
            "<span>y</span>"
        );
    }

    #[test]
    fn anchors_are_unwrapped_at_any_depth() {
        let sanitizer = LinkSanitizer::new();
        assert_eq!(
            sanitizer.sanitize(r#"<div><a href="x"><i>deep</i></a></div>"#),
            "<div><i>deep</i></div>"
        );
    }

    #[test]
    fn text_content_is_preserved() {
        let sanitizer = LinkSanitizer::new();
        let input = r#"start <a href="1">one</a> mid <a href="2">two</a> end"#;
        assert_eq!(sanitizer.sanitize(input), "start one mid two end");
    }

    #[test]
    fn empty_input_is_returned_unchanged() {
        assert_eq!(LinkSanitizer::new().sanitize(""), "");
    }
}
