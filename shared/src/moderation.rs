//! Content moderation
//!
//! [`KeywordFilter`] implements the prohibited-term check over the built-in
//! lists in [`crate::wordlist`]. When a text contains a whitelisted term the
//! filter relaxes from substring matching to whole-token matching, except for
//! the exception phrases, which are always blocked.
//!
//! [`ContentModerator`] combines the keyword filter with an optional
//! [`ProfanityFilter`]. Neither ever fails; this is best-effort screening,
//! not a security boundary.

use crate::wordlist::{EXCEPTION_PHRASES, PROHIBITED_TERMS, WHITELIST_TERMS};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Which rule caused a text to be blocked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockReason {
    /// A prohibited term matched
    Keyword,
    /// An always-blocked exception phrase matched
    ExceptionPhrase,
    /// The external profanity list matched
    Profanity,
}

impl BlockReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockReason::Keyword => "keyword",
            BlockReason::ExceptionPhrase => "exception_phrase",
            BlockReason::Profanity => "profanity",
        }
    }
}

/// Outcome of a moderation check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", content = "reason", rename_all = "snake_case")]
pub enum ModerationVerdict {
    Allowed,
    Blocked(BlockReason),
}

impl ModerationVerdict {
    pub fn is_blocked(&self) -> bool {
        matches!(self, ModerationVerdict::Blocked(_))
    }

    pub fn reason(&self) -> Option<BlockReason> {
        match self {
            ModerationVerdict::Allowed => None,
            ModerationVerdict::Blocked(reason) => Some(*reason),
        }
    }
}

/// Split lowercased text on whitespace and strip punctuation from each end
/// of every token, so `"fick!"` yields `"fick"`.
fn tokens(lower: &str) -> impl Iterator<Item = &str> {
    lower
        .split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|t| !t.is_empty())
}

fn normalize_terms<I, S>(terms: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    let mut seen = HashSet::new();
    for term in terms {
        let term = term.as_ref().trim().to_lowercase();
        if !term.is_empty() && seen.insert(term.clone()) {
            out.push(term);
        }
    }
    out
}

/// Prohibited-term filter with whitelist relaxation.
///
/// Immutable once built; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct KeywordFilter {
    /// Every prohibited term, scanned as substrings
    prohibited: Vec<String>,
    /// Single-word prohibited terms, for whole-token lookups
    prohibited_tokens: HashSet<String>,
    whitelist: Vec<String>,
    exceptions: Vec<String>,
}

impl Default for KeywordFilter {
    fn default() -> Self {
        Self::builtin()
    }
}

impl KeywordFilter {
    /// Filter over the built-in term lists
    pub fn builtin() -> Self {
        Self::new(PROHIBITED_TERMS, WHITELIST_TERMS, EXCEPTION_PHRASES)
    }

    /// Build a filter from arbitrary lists. Terms are lowercased and trimmed;
    /// empty terms are dropped because they would match everything.
    pub fn new<P, W, E>(prohibited: P, whitelist: W, exceptions: E) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        W: IntoIterator,
        W::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        let prohibited = normalize_terms(prohibited);
        let whitelist = normalize_terms(whitelist);
        let exceptions = normalize_terms(exceptions);

        // Terms inside an exception phrase are already covered by the phrase check
        let prohibited_tokens = prohibited
            .iter()
            .filter(|t| !t.chars().any(char::is_whitespace))
            .filter(|t| !exceptions.iter().any(|e| e.contains(t.as_str())))
            .cloned()
            .collect();

        Self {
            prohibited,
            prohibited_tokens,
            whitelist,
            exceptions,
        }
    }

    /// Append operator-supplied terms to the built-in lists
    pub fn with_extra_terms<P, W>(self, prohibited: P, whitelist: W) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        W: IntoIterator,
        W::Item: AsRef<str>,
    {
        let extra_prohibited = normalize_terms(prohibited);
        let extra_whitelist = normalize_terms(whitelist);
        if extra_prohibited.is_empty() && extra_whitelist.is_empty() {
            return self;
        }

        Self::new(
            self.prohibited.into_iter().chain(extra_prohibited),
            self.whitelist.into_iter().chain(extra_whitelist),
            self.exceptions,
        )
    }

    pub fn prohibited_count(&self) -> usize {
        self.prohibited.len()
    }

    pub fn whitelist_count(&self) -> usize {
        self.whitelist.len()
    }

    /// Full moderation check with the rule that fired
    pub fn check(&self, text: &str) -> ModerationVerdict {
        if text.is_empty() {
            return ModerationVerdict::Allowed;
        }
        let lower = text.to_lowercase();

        let whitelisted = self.whitelist.iter().any(|w| lower.contains(w.as_str()));
        if !whitelisted {
            return if self.prohibited.iter().any(|t| lower.contains(t.as_str())) {
                ModerationVerdict::Blocked(BlockReason::Keyword)
            } else {
                ModerationVerdict::Allowed
            };
        }

        if self.exceptions.iter().any(|p| lower.contains(p.as_str())) {
            return ModerationVerdict::Blocked(BlockReason::ExceptionPhrase);
        }

        if tokens(&lower).any(|t| self.prohibited_tokens.contains(t)) {
            ModerationVerdict::Blocked(BlockReason::Keyword)
        } else {
            ModerationVerdict::Allowed
        }
    }

    /// `true` when the text should be rejected. `None` and `""` are allowed.
    pub fn is_prohibited<'a>(&self, text: impl Into<Option<&'a str>>) -> bool {
        text.into().is_some_and(|t| self.check(t).is_blocked())
    }
}

/// Whole-word profanity list loaded from an external source
#[derive(Debug, Clone, Default)]
pub struct ProfanityList {
    words: HashSet<String>,
}

impl ProfanityList {
    /// English word list compiled into the binary
    pub fn builtin() -> Self {
        Self::parse(include_str!("../data/profanity_en.txt"))
    }

    /// Parse a word list: one entry per line, `#` starts a comment line,
    /// blank lines are ignored.
    pub fn parse(contents: &str) -> Self {
        let words = contents
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(str::to_lowercase)
            .collect();
        Self { words }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: normalize_terms(words).into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn matches(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        let hit = tokens(&lower).any(|t| self.words.contains(t));
        hit
    }
}

/// Optional profanity source.
///
/// Resolved once at startup. When the source cannot be loaded the filter is
/// `Unavailable` and moderation falls back to the keyword filter alone.
#[derive(Debug, Clone)]
pub enum ProfanityFilter {
    Available(ProfanityList),
    Unavailable { reason: String },
}

impl ProfanityFilter {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        ProfanityFilter::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, ProfanityFilter::Available(_))
    }

    /// Always `false` when unavailable
    pub fn matches(&self, text: &str) -> bool {
        match self {
            ProfanityFilter::Available(list) => list.matches(text),
            ProfanityFilter::Unavailable { .. } => false,
        }
    }
}

/// Keyword filter plus optional profanity source
#[derive(Debug, Clone)]
pub struct ContentModerator {
    keywords: KeywordFilter,
    profanity: ProfanityFilter,
}

impl Default for ContentModerator {
    fn default() -> Self {
        Self::new(
            KeywordFilter::builtin(),
            ProfanityFilter::Available(ProfanityList::builtin()),
        )
    }
}

impl ContentModerator {
    pub fn new(keywords: KeywordFilter, profanity: ProfanityFilter) -> Self {
        Self {
            keywords,
            profanity,
        }
    }

    pub fn keywords(&self) -> &KeywordFilter {
        &self.keywords
    }

    pub fn profanity(&self) -> &ProfanityFilter {
        &self.profanity
    }

    /// Profanity is checked first, then the keyword filter
    pub fn check(&self, text: &str) -> ModerationVerdict {
        if text.is_empty() {
            return ModerationVerdict::Allowed;
        }
        if self.profanity.matches(text) {
            return ModerationVerdict::Blocked(BlockReason::Profanity);
        }
        self.keywords.check(text)
    }

    pub fn is_prohibited<'a>(&self, text: impl Into<Option<&'a str>>) -> bool {
        text.into().is_some_and(|t| self.check(t).is_blocked())
    }
}
