//! The scrollytelling page, embedded as inert markup

/// Page source, byte-for-byte as authored
const SCROLL_LOCK_HTML: &str = include_str!("assets/scroll_lock.html");

/// Title authored alongside the page
const SCROLL_LOCK_TITLE: &str = "scroll away, scroll away, scroll lock";

/// Handle to the embedded HTML document.
///
/// The text is never parsed. A browser renders it directly, with the starfield
/// and parallax effects supplied by an external stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markup {
    text: &'static str,
}

impl Markup {
    /// The embedded scroll lock page
    pub fn embedded() -> Self {
        Self {
            text: SCROLL_LOCK_HTML,
        }
    }

    /// Raw document text
    pub fn as_str(&self) -> &'static str {
        self.text
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    /// Title shown in the page's `<title>` element
    pub fn title(&self) -> &'static str {
        SCROLL_LOCK_TITLE
    }
}
