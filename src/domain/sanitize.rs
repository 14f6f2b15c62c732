//! Response sanitization.

/// Opening fence of a markdown HTML code block.
pub const HTML_FENCE_OPEN: &str = "```html";
/// Bare markdown fence.
pub const FENCE: &str = "```";

/// Remove every literal markdown HTML fence marker from a model response.
///
/// The language-tagged opener is removed first so that its backticks are not
/// consumed as a bare fence and leave a stray `html` behind. Everything else is
/// returned untouched.
pub fn sanitize_response(raw: &str) -> String {
    raw.replace(HTML_FENCE_OPEN, "").replace(FENCE, "")
}
