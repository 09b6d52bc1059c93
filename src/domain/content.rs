//! Content format detection and rendering of rich-text note bodies.
//!
//! Note content is stored untagged: either plain text or an HTML document
//! produced by a rich-text editor. The format is recovered by sniffing the
//! stored string. Plain text that happens to start with `<!DOCTYPE` or
//! contain `<html>` is misread as rich text; there is no format column to
//! disambiguate.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

const DOCUMENT_PROLOGUE: &str = "<!DOCTYPE";
const MARKUP_ROOT: &str = "<html>";

/// How a note's content should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFormat {
    /// Unformatted text, shown as-is.
    Plain,
    /// A serialized HTML document.
    Rich,
}

impl ContentFormat {
    /// Detects the format of stored content.
    ///
    /// Content is rich text when it begins with a document prologue (after
    /// leading whitespace) or contains an `<html>` root tag in any case.
    ///
    /// # Examples
    ///
    /// ```
    /// use glacier::domain::ContentFormat;
    ///
    /// assert_eq!(ContentFormat::detect("<html><body>hi</body></html>"), ContentFormat::Rich);
    /// assert_eq!(ContentFormat::detect("just text"), ContentFormat::Plain);
    /// ```
    pub fn detect(content: &str) -> Self {
        if content.trim_start().starts_with(DOCUMENT_PROLOGUE)
            || content.to_lowercase().contains(MARKUP_ROOT)
        {
            Self::Rich
        } else {
            Self::Plain
        }
    }

    pub fn is_rich(self) -> bool {
        matches!(self, Self::Rich)
    }
}

impl fmt::Display for ContentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Rich => write!(f, "rich"),
        }
    }
}

static INVISIBLE_BLOCKS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    ["head", "style", "script"]
        .iter()
        .map(|tag| {
            Regex::new(&format!(r"(?is)<{tag}\b.*?</{tag}\s*>")).expect("valid block pattern")
        })
        .collect()
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

static LINE_BREAKS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<br\s*/?>|</(p|div|li|tr|h[1-6])\s*>").expect("valid line break pattern")
});

static TAGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));

/// Renders note content as terminal text.
///
/// Plain content is returned unchanged. Rich content has its head, style and
/// script blocks dropped, block-level elements turned into line breaks, the
/// remaining markup stripped and common entities decoded.
pub fn to_plain_text(content: &str) -> String {
    if !ContentFormat::detect(content).is_rich() {
        return content.to_string();
    }

    let mut text = content.to_string();
    for block in INVISIBLE_BLOCKS.iter() {
        text = block.replace_all(&text, "").into_owned();
    }
    let text = WHITESPACE.replace_all(&text, " ");
    let text = LINE_BREAKS.replace_all(&text, "\n");
    let text = TAGS.replace_all(&text, "");
    let text = decode_entities(&text);

    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    lines.join("\n").trim().to_string()
}

fn decode_entities(s: &str) -> String {
    // &amp; goes last so "&amp;lt;" decodes to "&lt;", not "<"
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
