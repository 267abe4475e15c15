//! CSS declaration scrubbing for `style` attribute values.
//!
//! This is a declaration-level filter, not a CSS parser: declarations are
//! split on `;`, judged one at a time, and re-joined. Anything carrying a
//! `url(...)` or `expression(...)` token is dropped outright.

use once_cell::sync::Lazy;
use regex::Regex;

/// CSS properties whose declarations are kept as-is.
pub const ACCEPTABLE_CSS_PROPERTIES: &[&str] = &[
    "azimuth", "background-color", "border-bottom-color", "border-collapse", "border-color",
    "border-left-color", "border-right-color", "border-top-color", "clear", "color", "cursor",
    "direction", "display", "elevation", "float", "font", "font-family", "font-size",
    "font-style", "font-variant", "font-weight", "height", "letter-spacing", "line-height",
    "overflow", "pause", "pause-after", "pause-before", "pitch", "pitch-range", "richness",
    "speak", "speak-header", "speak-numeral", "speak-punctuation", "speech-rate", "stress",
    "text-align", "text-decoration", "text-indent", "unicode-bidi", "vertical-align",
    "voice-family", "volume", "white-space", "width",
];

/// Shorthand properties kept only when every value token is an acceptable
/// keyword or a plain measurement/color.
pub const SHORTHAND_CSS_PROPERTIES: &[&str] = &["background", "border", "margin", "padding"];

/// Value keywords acceptable inside shorthand declarations.
pub const ACCEPTABLE_CSS_KEYWORDS: &[&str] = &[
    "!important", "aqua", "auto", "black", "block", "blue", "bold", "both", "bottom", "brown",
    "center", "collapse", "dashed", "dotted", "fuchsia", "gray", "green", "italic", "left",
    "lime", "maroon", "medium", "navy", "none", "normal", "nowrap", "olive", "pointer",
    "purple", "red", "right", "silver", "solid", "teal", "top", "transparent", "underline",
    "white", "yellow",
];

static FORBIDDEN_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:url|expression)\s*\(").expect("invalid css value pattern"));

static MEASUREMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(#[0-9a-fA-F]+|rgb\(\d+%?,\d*%?,?\d*%?\)?|-?\d{0,3}\.?\d{0,10}(ch|cm|r?em|ex|in|lh|mm|pc|pt|px|q|vmax|vmin|vw|vh|%|,|\))?)$",
    )
    .expect("invalid css measurement pattern")
});

/// Scrub a `style` attribute value down to its acceptable declarations.
///
/// Returns the kept declarations re-joined as `prop: value;` pairs; an
/// empty string when nothing survives.
pub fn scrub_css(style: &str) -> String {
    let mut clean = Vec::new();
    for declaration in style.split(';') {
        let Some((property, value)) = declaration.split_once(':') else {
            continue;
        };
        let property = property.trim();
        let value = value.trim();
        if property.is_empty() || value.is_empty() {
            continue;
        }
        if FORBIDDEN_VALUE.is_match(value) {
            continue;
        }

        let name = property.to_ascii_lowercase();
        let keep = ACCEPTABLE_CSS_PROPERTIES.contains(&name.as_str())
            || (SHORTHAND_CSS_PROPERTIES.contains(&name.as_str())
                && value.split_whitespace().all(acceptable_token));
        if keep {
            clean.push(format!("{name}: {value};"));
        }
    }
    clean.join(" ")
}

fn acceptable_token(token: &str) -> bool {
    let lowered = token.to_ascii_lowercase();
    ACCEPTABLE_CSS_KEYWORDS.contains(&lowered.as_str()) || MEASUREMENT.is_match(&lowered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_declarations_pass_through() {
        assert_eq!(scrub_css("color: red"), "color: red;");
        assert_eq!(
            scrub_css("background-color: #000; width: 10px"),
            "background-color: #000; width: 10px;"
        );
    }

    #[test]
    fn url_values_are_stripped() {
        assert_eq!(scrub_css("background-image:url(javascript:alert(1))"), "");
        assert_eq!(scrub_css("background: url(foo.png)"), "");
        assert_eq!(scrub_css("background: URL (foo.png)"), "");
    }

    #[test]
    fn url_does_not_take_neighbors_down() {
        assert_eq!(
            scrub_css("color: blue; background-image: url(x); width: 1em"),
            "color: blue; width: 1em;"
        );
    }

    #[test]
    fn expression_values_are_stripped() {
        assert_eq!(scrub_css("width: expression(alert(1))"), "");
    }

    #[test]
    fn unknown_properties_are_dropped() {
        assert_eq!(scrub_css("behavior: something; color: red"), "color: red;");
        assert_eq!(scrub_css("-moz-binding: x"), "");
    }

    #[test]
    fn shorthand_with_acceptable_tokens_survives() {
        assert_eq!(scrub_css("margin: 10px 2em 0 auto"), "margin: 10px 2em 0 auto;");
        assert_eq!(scrub_css("background: red"), "background: red;");
    }

    #[test]
    fn shorthand_with_unknown_tokens_is_dropped() {
        assert_eq!(scrub_css("background: attr(data-x)"), "");
        assert_eq!(scrub_css("border: alert(1)"), "");
    }

    #[test]
    fn declarations_without_a_value_are_skipped() {
        assert_eq!(scrub_css("color"), "");
        assert_eq!(scrub_css("color:"), "");
        assert_eq!(scrub_css(";;;"), "");
        assert_eq!(scrub_css(""), "");
    }
}
