//! Baseline safety data: which elements, attributes, and URI protocols are
//! intrinsically acceptable when a scrubber carries no explicit allow list.
//!
//! These tables are the fallback judgment, not policy: sanitizers narrow
//! them (or replace them) through their own configured sets.

use scraper::node::Element;

use crate::css;

/// Element names that are intrinsically safe to keep.
pub const ACCEPTABLE_ELEMENTS: &[&str] = &[
    "a", "abbr", "acronym", "address", "area", "article", "aside", "audio", "b", "bdi", "bdo",
    "big", "blockquote", "br", "button", "canvas", "caption", "center", "cite", "code", "col",
    "colgroup", "datalist", "dd", "del", "details", "dfn", "dir", "div", "dl", "dt", "em",
    "fieldset", "figcaption", "figure", "font", "footer", "form", "h1", "h2", "h3", "h4", "h5",
    "h6", "header", "hr", "i", "img", "input", "ins", "kbd", "label", "legend", "li", "main",
    "map", "mark", "menu", "meter", "nav", "ol", "optgroup", "option", "output", "p", "pre",
    "progress", "q", "s", "samp", "section", "select", "small", "source", "span", "strike",
    "strong", "sub", "summary", "sup", "table", "tbody", "td", "textarea", "tfoot", "th",
    "thead", "time", "tr", "track", "tt", "u", "ul", "var", "video", "wbr",
];

/// Attribute names that are intrinsically safe to keep.
pub const ACCEPTABLE_ATTRIBUTES: &[&str] = &[
    "abbr", "accept", "accept-charset", "accesskey", "action", "align", "alt", "autocomplete",
    "axis", "border", "cellpadding", "cellspacing", "char", "charoff", "charset", "checked",
    "cite", "class", "clear", "cols", "colspan", "color", "compact", "coords", "datetime", "dir",
    "disabled", "enctype", "for", "frame", "headers", "height", "href", "hreflang", "hspace",
    "id", "ismap", "label", "lang", "list", "longdesc", "loop", "max", "maxlength", "media",
    "method", "min", "multiple", "name", "nohref", "noshade", "nowrap", "open", "placeholder",
    "poster", "preload", "prompt", "readonly", "rel", "required", "rev", "reversed", "rows",
    "rowspan", "rules", "scope", "selected", "shape", "size", "span", "src", "start", "step",
    "style", "summary", "tabindex", "target", "title", "type", "usemap", "valign", "value",
    "vspace", "width", "xml:lang",
];

/// Attributes whose values are URIs and therefore get a protocol check.
pub const URI_ATTRIBUTES: &[&str] = &[
    "action", "background", "cite", "formaction", "href", "longdesc", "lowsrc", "poster", "src",
    "usemap", "xlink:href",
];

/// URI schemes a URI-valued attribute may carry. Scheme-less (relative)
/// values are always acceptable.
pub const ALLOWED_PROTOCOLS: &[&str] = &[
    "afs", "callto", "ed2k", "feed", "ftp", "gopher", "http", "https", "irc", "mailto", "news",
    "nntp", "rsync", "rtsp", "sftp", "sms", "ssh", "tag", "tel", "telnet", "urn", "webcal",
    "xmpp",
];

/// Is this element name intrinsically safe?
pub fn allowed_element(name: &str) -> bool {
    ACCEPTABLE_ELEMENTS.contains(&name)
}

/// Is this attribute name intrinsically safe? `data-*` attributes are
/// acceptable in addition to the fixed table.
pub fn allowed_attribute(name: &str) -> bool {
    ACCEPTABLE_ATTRIBUTES.contains(&name) || is_data_attribute(name)
}

fn is_data_attribute(name: &str) -> bool {
    name.strip_prefix("data-").is_some_and(|rest| {
        !rest.is_empty()
            && rest
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    })
}

/// Does this URI value carry an acceptable (or no) scheme?
///
/// ASCII whitespace and control characters are ignored when sniffing the
/// scheme, since browsers ignore them too (`jav\tascript:` is still
/// `javascript:`). A `:` that only appears after `/`, `?`, or `#` does not
/// start a scheme.
pub fn allowed_protocol(value: &str) -> bool {
    let compact: String = value
        .chars()
        .filter(|c| !c.is_ascii_control() && !c.is_ascii_whitespace())
        .collect();
    match compact.split_once(':') {
        None => true,
        Some((scheme, _)) => {
            if scheme.contains(['/', '?', '#']) {
                return true;
            }
            let scheme = scheme.to_ascii_lowercase();
            ALLOWED_PROTOCOLS.contains(&scheme.as_str())
        }
    }
}

/// Filter an element's attributes with the baseline name predicate.
///
/// See [`scrub_attributes_with`] for the URI and `style` handling that is
/// applied on top of the name filter.
pub fn scrub_attributes(element: &mut Element) {
    scrub_attributes_with(element, allowed_attribute);
}

/// Filter an element's attributes with a caller-chosen name predicate.
///
/// Attributes failing `keep_name` are removed. Surviving URI-valued
/// attributes are removed when their scheme fails [`allowed_protocol`], and
/// a surviving `style` attribute has its value rewritten through
/// [`css::scrub_css`]. Scheme checks apply in every mode: an allow-listed
/// `href` never exempts `javascript:`.
pub fn scrub_attributes_with<F>(element: &mut Element, mut keep_name: F)
where
    F: FnMut(&str) -> bool,
{
    element.attrs.retain(|name, value| {
        let prefixed;
        let key: &str = match &name.prefix {
            Some(prefix) => {
                prefixed = format!("{prefix}:{}", &*name.local);
                &prefixed
            }
            None => &name.local,
        };

        if !keep_name(key) {
            return false;
        }
        if URI_ATTRIBUTES.contains(&key) && !allowed_protocol(value) {
            tracing::debug!("Removing {key} attribute with disallowed protocol");
            return false;
        }
        if key == "style" {
            let scrubbed = css::scrub_css(value);
            *value = scrubbed.as_str().into();
        }
        true
    });
}
