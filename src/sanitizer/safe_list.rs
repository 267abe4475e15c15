//! Allow-list policy with CSS scrubbing.

use std::collections::HashSet;

use super::{Sanitizer, parse_and_scrub};
use crate::css;
use crate::dom;
use crate::scrubber::{AllowList, PermitScrubber, TextOnlyScrubber, validate_names};
use crate::walk::Scrub;

/// Tags every [`SafeListSanitizer`] permits out of the box: inline and
/// block text formatting, lists, and images.
pub const DEFAULT_ALLOWED_TAGS: &[&str] = &[
    "a", "abbr", "acronym", "address", "b", "big", "blockquote", "br", "cite", "code", "dd",
    "del", "dfn", "div", "dl", "dt", "em", "h1", "h2", "h3", "h4", "h5", "h6", "hr", "i", "img",
    "ins", "kbd", "li", "ol", "p", "pre", "samp", "small", "span", "strong", "sub", "sup",
    "time", "tt", "ul", "var",
];

/// Attributes every [`SafeListSanitizer`] permits out of the box.
pub const DEFAULT_ALLOWED_ATTRIBUTES: &[&str] = &[
    "abbr", "alt", "cite", "class", "datetime", "height", "href", "lang", "name", "src",
    "title", "width", "xml:lang",
];

/// The tag and attribute sets a [`SafeListSanitizer`] starts from.
///
/// An empty set on either axis means "no explicit list" and defers that
/// axis to the baseline judgment of [`safelist`](crate::safelist) during
/// scrubbing.
#[derive(Clone, Debug)]
pub struct SafeListConfig {
    /// Tag names kept by the sanitizer.
    pub allowed_tags: HashSet<String>,
    /// Attribute names kept on surviving elements.
    pub allowed_attributes: HashSet<String>,
}

impl Default for SafeListConfig {
    fn default() -> Self {
        Self {
            allowed_tags: DEFAULT_ALLOWED_TAGS.iter().map(|s| s.to_string()).collect(),
            allowed_attributes: DEFAULT_ALLOWED_ATTRIBUTES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Per-call overrides for [`SafeListSanitizer::sanitize_with`].
///
/// Axes left unset fall back to the sanitizer's stored sets. Overrides are
/// local to the call and never mutate the sanitizer.
///
/// # Example
///
/// ```
/// use html_scrubber::{SafeListSanitizer, SanitizeOptions};
///
/// let sanitizer = SafeListSanitizer::new();
/// let out = sanitizer.sanitize_with(
///     r#"<p class="x" onclick="y">hi</p>"#,
///     &SanitizeOptions::new().attributes(["class"]),
/// );
/// assert_eq!(out, r#"<p class="x">hi</p>"#);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SanitizeOptions {
    tags: Option<HashSet<String>>,
    attributes: Option<HashSet<String>>,
}

impl SanitizeOptions {
    /// No overrides; the sanitizer's stored configuration applies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the allowed tag set for this call.
    ///
    /// # Panics
    ///
    /// Panics on names unusable as HTML tag names.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(validate_names(tags).expect("invalid tag name"));
        self
    }

    /// Override the allowed attribute set for this call.
    ///
    /// # Panics
    ///
    /// Panics on names unusable as HTML attribute names.
    pub fn attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes = Some(validate_names(attributes).expect("invalid attribute name"));
        self
    }
}

/// Policy that keeps only allow-listed tags and attributes.
///
/// Construction snapshots the process-wide defaults (see
/// [`set_default_safe_list`](crate::set_default_safe_list)); instances own
/// their configuration, so concurrent sanitizes never observe each other's
/// changes. Call-time resolution order:
///
/// 1. a caller-supplied scrubber
///    ([`sanitize_with_scrubber`](Self::sanitize_with_scrubber)) runs
///    instead of the built-in one;
/// 2. per-call overrides ([`sanitize_with`](Self::sanitize_with)) configure
///    a one-shot permit scrubber;
/// 3. otherwise the stored sets apply, an empty axis deferring to the
///    baseline judgment;
/// 4. with both axes empty, every element is stripped and only text
///    survives (still serialized as markup).
///
/// # Example
///
/// ```
/// use html_scrubber::{SafeListSanitizer, Sanitizer};
///
/// let sanitizer = SafeListSanitizer::new();
/// assert_eq!(
///     sanitizer.sanitize("<script>alert(1)</script><p>hi</p>"),
///     "<p>hi</p>"
/// );
/// ```
#[derive(Clone, Debug)]
pub struct SafeListSanitizer {
    allowed_tags: HashSet<String>,
    allowed_attributes: HashSet<String>,
    prune: bool,
}

impl SafeListSanitizer {
    /// Create a sanitizer from the process-wide default safe list.
    pub fn new() -> Self {
        Self::with_config(crate::default_safe_list())
    }

    /// Create a sanitizer from an explicit configuration.
    pub fn with_config(config: SafeListConfig) -> Self {
        Self {
            allowed_tags: config.allowed_tags,
            allowed_attributes: config.allowed_attributes,
            prune: false,
        }
    }

    /// Replace the stored allowed tag set.
    ///
    /// # Panics
    ///
    /// Panics on names unusable as HTML tag names.
    pub fn allowed_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_tags = validate_names(tags).expect("invalid tag name");
        self
    }

    /// Replace the stored allowed attribute set.
    ///
    /// # Panics
    ///
    /// Panics on names unusable as HTML attribute names.
    pub fn allowed_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_attributes = validate_names(attributes).expect("invalid attribute name");
        self
    }

    /// Remove disallowed elements subtree and all instead of unwrapping.
    pub fn prune(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    /// The stored allowed tag set.
    pub fn tags(&self) -> &HashSet<String> {
        &self.allowed_tags
    }

    /// The stored allowed attribute set.
    pub fn attributes(&self) -> &HashSet<String> {
        &self.allowed_attributes
    }

    /// Sanitize with per-call overrides. See the type-level docs for the
    /// resolution order.
    pub fn sanitize_with(&self, html: &str, options: &SanitizeOptions) -> String {
        if html.is_empty() {
            return html.to_owned();
        }
        let tags = options.tags.as_ref().unwrap_or(&self.allowed_tags);
        let attributes = options
            .attributes
            .as_ref()
            .unwrap_or(&self.allowed_attributes);

        if tags.is_empty() && attributes.is_empty() {
            tracing::debug!("No allow list resolvable, stripping every element");
            let doc = parse_and_scrub(html, &mut TextOnlyScrubber::new());
            return dom::to_markup(&doc);
        }

        let mut scrubber = PermitScrubber::new().prune(self.prune);
        if !tags.is_empty() {
            scrubber = scrubber.with_tags(AllowList::Explicit(tags.clone()));
        }
        if !attributes.is_empty() {
            scrubber = scrubber.with_attributes(AllowList::Explicit(attributes.clone()));
        }
        let doc = parse_and_scrub(html, &mut scrubber);
        dom::to_markup(&doc)
    }

    /// Sanitize with a caller-supplied scrubber in place of the built-in
    /// permit scrubber. The stored tag/attribute sets play no part.
    pub fn sanitize_with_scrubber(&self, html: &str, scrubber: &mut dyn Scrub) -> String {
        if html.is_empty() {
            return html.to_owned();
        }
        let doc = parse_and_scrub(html, scrubber);
        dom::to_markup(&doc)
    }

    /// Scrub a bare `style` attribute value. Independent of the tree pass;
    /// takes no options.
    pub fn sanitize_css(&self, style: &str) -> String {
        css::scrub_css(style)
    }
}

impl Default for SafeListSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sanitizer for SafeListSanitizer {
    fn sanitize(&self, html: &str) -> String {
        self.sanitize_with(html, &SanitizeOptions::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tags_keep_formatting_and_drop_scripts() {
        let sanitizer = SafeListSanitizer::new();
        assert_eq!(
            sanitizer.sanitize("<script>alert(1)</script><p>hi</p>"),
            "<p>hi</p>"
        );
    }

    #[test]
    fn default_attributes_survive() {
        let sanitizer = SafeListSanitizer::new();
        assert_eq!(
            sanitizer.sanitize(r#"<a href="/home" title="t">x</a>"#),
            r#"<a href="/home" title="t">x</a>"#
        );
    }

    #[test]
    fn per_call_overrides_do_not_mutate_the_instance() {
        let sanitizer = SafeListSanitizer::new();
        let options = SanitizeOptions::new().tags(["b"]);
        assert_eq!(sanitizer.sanitize_with("<b>x</b><p>y</p>", &options), "<b>x</b>y");
        // Stored defaults still apply on the next plain call.
        assert_eq!(sanitizer.sanitize("<p>y</p>"), "<p>y</p>");
        assert!(sanitizer.tags().contains("p"));
    }

    #[test]
    fn empty_axes_fall_back_to_stripping_everything() {
        let sanitizer = SafeListSanitizer::with_config(SafeListConfig {
            allowed_tags: HashSet::new(),
            allowed_attributes: HashSet::new(),
        });
        assert_eq!(sanitizer.sanitize("<div><b>x</b> &amp; y</div>"), "x &amp; y");
    }

    #[test]
    fn empty_tag_axis_defers_to_baseline() {
        let sanitizer = SafeListSanitizer::with_config(SafeListConfig {
            allowed_tags: HashSet::new(),
            allowed_attributes: ["class".to_string()].into(),
        });
        // `p` passes the baseline element judgment; `blink` does not.
        assert_eq!(
            sanitizer.sanitize(r#"<p class="c" id="i">a</p><blink>b</blink>"#),
            r#"<p class="c">a</p>b"#
        );
    }

    #[test]
    fn prune_discards_subtrees_of_disallowed_elements() {
        let sanitizer = SafeListSanitizer::new().prune(true);
        assert_eq!(
            sanitizer.sanitize("<table><tr><td>cell</td></tr></table><p>kept</p>"),
            "<p>kept</p>"
        );
    }

    #[test]
    fn sanitize_css_is_independent_of_the_tree_pass() {
        let sanitizer = SafeListSanitizer::new();
        assert_eq!(sanitizer.sanitize_css("color: red"), "color: red;");
        assert_eq!(
            sanitizer.sanitize_css("background-image:url(javascript:alert(1))"),
            ""
        );
    }

    #[test]
    fn empty_input_is_returned_unchanged_without_parsing() {
        assert_eq!(SafeListSanitizer::new().sanitize(""), "");
    }
}
