//! Crisis-language screening for user-authored text.
//!
//! Screening is a pure keyword check; callers decide whether to surface
//! [`CRISIS_RESOURCES`].
//!
//! ```rust
//! use mchat::safety::contains_crisis_language;
//!
//! assert!(contains_crisis_language("Some days I feel like I CAN'T GO ON"));
//! assert!(!contains_crisis_language("Went on a long run this morning"));
//! ```

pub const CRISIS_KEYWORDS: [&str; 13] = [
    "kill myself",
    "end my life",
    "want to die",
    "suicide",
    "suicidal",
    "self-harm",
    "self harm",
    "hurt myself",
    "don't want to be alive",
    "no reason to live",
    "better off dead",
    "can't go on",
    "end it all",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrisisResource {
    pub name: &'static str,
    pub contact: &'static str,
    pub details: &'static str,
}

pub const CRISIS_RESOURCES: [CrisisResource; 3] = [
    CrisisResource {
        name: "988 Suicide & Crisis Lifeline",
        contact: "Call or text: 988",
        details: "Available 24/7, free and confidential support",
    },
    CrisisResource {
        name: "Crisis Text Line",
        contact: "Text: HOME to 741741",
        details: "24/7 text-based crisis support",
    },
    CrisisResource {
        name: "Emergency Services",
        contact: "Call: 911",
        details: "For immediate emergency assistance or visit your nearest emergency room",
    },
];

/// Case-insensitive substring match against [`CRISIS_KEYWORDS`].
pub fn contains_crisis_language(text: &str) -> bool {
    let lower = text.to_lowercase();
    CRISIS_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(keyword))
}
