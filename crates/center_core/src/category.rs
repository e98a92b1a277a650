use serde::{Deserialize, Serialize};

/// Canonical message category.
///
/// External sources deliver categories as free-form tokens; this enum is the
/// closed set every token is resolved against. Messages keep their stored
/// token for display, so resolution happens on demand and never mutates the
/// record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Urgent,
    HighPriority,
    Routine,
    Archive,
}

impl Category {
    /// Resolves a raw category token, applying the historical aliases.
    ///
    /// `"high"` is the short form some feeds still send for
    /// `"high_priority"`; both land in the same bucket. Unrecognized tokens
    /// resolve to `None` and render unstyled rather than failing.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "urgent" => Some(Category::Urgent),
            "high" | "high_priority" => Some(Category::HighPriority),
            "routine" => Some(Category::Routine),
            "archive" => Some(Category::Archive),
            _ => None,
        }
    }

    /// Canonical wire token. `parse(as_token())` round-trips.
    pub fn as_token(&self) -> &'static str {
        match self {
            Category::Urgent => "urgent",
            Category::HighPriority => "high_priority",
            Category::Routine => "routine",
            Category::Archive => "archive",
        }
    }

    /// All canonical categories, in sidebar display order.
    pub const ALL: [Category; 4] = [
        Category::Urgent,
        Category::HighPriority,
        Category::Routine,
        Category::Archive,
    ];
}

/// Canonical source channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Source {
    Telegram,
    Twitter,
}

impl Source {
    /// Resolves a raw source token.
    ///
    /// The project-feed ingestion path stamps tweets with a distinct source
    /// token; for counting and filtering those are the same channel as
    /// direct mentions, while the stored token still selects the feed icon.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "telegram" => Some(Source::Telegram),
            "twitter" | "twitter_feed" | "TwitterFeed" => Some(Source::Twitter),
            _ => None,
        }
    }

    /// Canonical wire token.
    pub fn as_token(&self) -> &'static str {
        match self {
            Source::Telegram => "telegram",
            Source::Twitter => "twitter",
        }
    }

    /// All canonical sources.
    pub const ALL: [Source; 2] = [Source::Telegram, Source::Twitter];
}
