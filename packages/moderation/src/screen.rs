//! Free-text screening for profanity and PII-shaped substrings.
//!
//! Best-effort only: profanity matching is a case-insensitive substring
//! check against a fixed word list, and PII detection looks for US SSN,
//! US phone, and email-address shapes. Neither is a real anti-abuse
//! system; they exist to catch the obvious cases before a report reaches
//! the public feed.

use std::sync::LazyLock;

use regex::Regex;

/// Fixed profanity word list. Matched as case-insensitive substrings.
const PROFANITY: &[&str] = &[
    "damn", "hell", "shit", "fuck", "bitch", "bastard", "crap", "asshole", "dick", "piss", "slut",
    "whore", "douche", "prick",
];

/// US Social Security Number shape: `123-45-6789`.
static SSN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{3}-\d{2}-\d{4}").expect("invalid SSN pattern"));

/// US phone number shape: `555-123-4567`.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{3}-\d{3}-\d{4}").expect("invalid phone pattern"));

/// Generic email-address shape, unanchored for substring scanning.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("invalid email pattern")
});

/// Anchored variant of the email shape, used to validate the dedicated
/// `reporter_email` field.
static EMAIL_EXACT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("invalid email pattern")
});

/// Why a piece of free text was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Matched the profanity word list.
    Language,
    /// Matched a PII-shaped pattern (SSN, phone, or email).
    PersonalInfo,
}

impl Rejection {
    /// The user-facing message for this rejection.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Language => "contains inappropriate language",
            Self::PersonalInfo => "appears to contain personal information",
        }
    }
}

/// Returns whether `text` contains a word from the profanity list,
/// case-insensitively.
#[must_use]
pub fn contains_profanity(text: &str) -> bool {
    let lowered = text.to_lowercase();
    PROFANITY.iter().any(|word| lowered.contains(word))
}

/// Returns whether `text` contains an SSN-, phone-, or email-shaped
/// substring.
#[must_use]
pub fn contains_pii(text: &str) -> bool {
    SSN_RE.is_match(text) || PHONE_RE.is_match(text) || EMAIL_RE.is_match(text)
}

/// Returns whether `text` is a syntactically plausible email address.
#[must_use]
pub fn is_valid_email(text: &str) -> bool {
    EMAIL_EXACT_RE.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_profanity_case_insensitively() {
        assert!(contains_profanity("this is DAMN annoying"));
        assert!(contains_profanity("what the Hell"));
        assert!(!contains_profanity("a perfectly polite sentence"));
    }

    #[test]
    fn flags_profanity_as_substring() {
        assert!(contains_profanity("damnit"));
    }

    #[test]
    fn flags_ssn_shapes() {
        assert!(contains_pii("my ssn is 123-45-6789 thanks"));
        assert!(!contains_pii("plate 123-456"));
    }

    #[test]
    fn flags_phone_shapes() {
        assert!(contains_pii("call me at 555-867-5309"));
    }

    #[test]
    fn flags_email_shapes() {
        assert!(contains_pii("reach me at someone@example.com please"));
        assert!(!contains_pii("the @ sign alone is fine"));
    }

    #[test]
    fn validates_exact_emails() {
        assert!(is_valid_email("someone@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(!is_valid_email("not an email"));
        assert!(!is_valid_email("someone@example.com trailing"));
    }
}
