/// Canonical block-status categories derived from scraped table text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusCategory {
    NotBlocked,
    Blocked,
    Unknown,
}

impl StatusCategory {
    /// Display glyph used in report lines
    pub fn glyph(&self) -> &'static str {
        match self {
            StatusCategory::NotBlocked => "🟢",
            StatusCategory::Blocked => "🔴",
            StatusCategory::Unknown => "⚪",
        }
    }
}

// Substring families checked in order; first match wins. "tidak terblokir"
// must be tested before the blocked family or it would match "terblokir".
const NOT_BLOCKED_PHRASES: [&str; 3] = ["aman", "tidak terblokir", "not blocked"];
const BLOCKED_PHRASES: [&str; 3] = ["nawala", "terblokir", "blocked"];

/// Map raw status text from the result table to a category and a display
/// label. Unrecognized non-empty text keeps its own (trimmed) wording as the
/// label so odd phrasing from the page surfaces verbatim in the report.
pub fn normalize(raw: &str) -> (StatusCategory, String) {
    let text = raw.trim().to_lowercase();

    if text.is_empty() {
        return (StatusCategory::Unknown, "Unknown".to_string());
    }

    if NOT_BLOCKED_PHRASES.iter().any(|p| text.contains(p)) {
        return (StatusCategory::NotBlocked, "Not Blocked".to_string());
    }

    if BLOCKED_PHRASES.iter().any(|p| text.contains(p)) {
        return (StatusCategory::Blocked, "Blocked".to_string());
    }

    (StatusCategory::Unknown, raw.trim().to_string())
}
