//! Shared utilities and strongly-typed common values for workspace crates.
//!
//! ```rust
//! use mcommon::{Entry, SCORE_MAX, SCORE_MIN, clamp_score};
//!
//! let entry = Entry::new("2026-01-15", "Long walk by the river.").with_score(8);
//! assert_eq!(entry.score, Some(8));
//! assert_eq!(clamp_score(42.0), SCORE_MAX);
//! assert_eq!(clamp_score(-1.0), SCORE_MIN);
//! ```

pub mod future {
    //! Shared async future aliases.
    //!
    //! ```rust
    //! use mcommon::BoxFuture;
    //!
    //! fn str_len<'a>(value: &'a str) -> BoxFuture<'a, usize> {
    //!     Box::pin(async move { value.len() })
    //! }
    //!
    //! let _future = str_len("hello");
    //! ```

    use std::future::Future;
    use std::pin::Pin;

    pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
}

pub mod entry {
    //! Read-only journal entry records supplied by callers for prompt grounding.
    //!
    //! ```rust
    //! use mcommon::Entry;
    //!
    //! let entry = Entry::new("2026-01-14", "Rainy, stayed in and read.")
    //!     .with_tldr("Quiet reading day");
    //!
    //! assert_eq!(entry.grounding_text(), "Quiet reading day");
    //! ```

    use serde::{Deserialize, Serialize};

    /// Number of days of prior entries callers are expected to supply as context.
    pub const CONTEXT_DAYS: u32 = 14;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Entry {
        pub entry_date: String,
        pub raw_entry: String,
        #[serde(default)]
        pub tldr: Option<String>,
        #[serde(default)]
        pub score: Option<u8>,
    }

    impl Entry {
        pub fn new(entry_date: impl Into<String>, raw_entry: impl Into<String>) -> Self {
            Self {
                entry_date: entry_date.into(),
                raw_entry: raw_entry.into(),
                tldr: None,
                score: None,
            }
        }

        pub fn with_tldr(mut self, tldr: impl Into<String>) -> Self {
            self.tldr = Some(tldr.into());
            self
        }

        pub fn with_score(mut self, score: u8) -> Self {
            self.score = Some(score);
            self
        }

        /// The digest when one exists, otherwise the raw entry text.
        pub fn grounding_text(&self) -> &str {
            self.tldr.as_deref().unwrap_or(self.raw_entry.as_str())
        }
    }
}

pub mod score {
    //! Wellbeing score range and labels.
    //!
    //! ```rust
    //! use mcommon::{clamp_score, score_label};
    //!
    //! assert_eq!(clamp_score(7.6), 8);
    //! assert_eq!(clamp_score(7.4), 7);
    //! assert_eq!(score_label(10), Some("Excellent"));
    //! assert_eq!(score_label(0), None);
    //! ```

    pub const SCORE_MIN: u8 = 1;
    pub const SCORE_MAX: u8 = 10;

    const SCORE_LABELS: [&str; 10] = [
        "Very Low",
        "Low",
        "Below Average",
        "Slightly Below Average",
        "Average",
        "Slightly Above Average",
        "Above Average",
        "Good",
        "Great",
        "Excellent",
    ];

    /// Rounds to the nearest integer first, then clamps into `SCORE_MIN..=SCORE_MAX`.
    pub fn clamp_score(value: f64) -> u8 {
        if value.is_nan() {
            return SCORE_MIN;
        }

        let clamped = value
            .round()
            .clamp(f64::from(SCORE_MIN), f64::from(SCORE_MAX));
        clamped as u8
    }

    pub fn score_label(score: u8) -> Option<&'static str> {
        if !(SCORE_MIN..=SCORE_MAX).contains(&score) {
            return None;
        }

        SCORE_LABELS.get(usize::from(score - SCORE_MIN)).copied()
    }
}

pub use entry::{CONTEXT_DAYS, Entry};
pub use future::BoxFuture;
pub use score::{SCORE_MAX, SCORE_MIN, clamp_score, score_label};
