//! Content moderation service
//!
//! Builds the [`ContentModerator`] once at startup and applies it to
//! user-submitted listing text.

use crate::config::ModerationConfig;
use crate::error::ApiError;
use marketplace_shared::moderation::ProfanityList;
use marketplace_shared::validation::get_field_display_label;
use marketplace_shared::{ContentModerator, KeywordFilter, ModerationVerdict, ProfanityFilter};
use std::path::Path;
use tracing::{info, warn};

/// Content moderation operations
pub struct ModerationService;

impl ModerationService {
    /// Build the moderator from configuration.
    ///
    /// Without a configured path the built-in English profanity list is used.
    /// A configured list that cannot be read leaves the profanity filter
    /// unavailable; keyword filtering still applies.
    pub fn build(config: &ModerationConfig) -> ContentModerator {
        let keywords = KeywordFilter::builtin().with_extra_terms(
            &config.extra_prohibited_terms,
            &config.extra_whitelist_terms,
        );

        let profanity = match config.profanity_list_path.as_deref() {
            None => ProfanityFilter::Available(ProfanityList::builtin()),
            Some(path) => Self::load_profanity(Path::new(path)),
        };

        match &profanity {
            ProfanityFilter::Available(list) => {
                info!(words = list.len(), "Profanity filter loaded")
            }
            ProfanityFilter::Unavailable { reason } => {
                warn!(reason = %reason, "Profanity filter unavailable, using keyword filter only")
            }
        }

        info!(
            prohibited = keywords.prohibited_count(),
            whitelist = keywords.whitelist_count(),
            "Keyword filter ready"
        );

        ContentModerator::new(keywords, profanity)
    }

    fn load_profanity(path: &Path) -> ProfanityFilter {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                let list = ProfanityList::parse(&contents);
                if list.is_empty() {
                    ProfanityFilter::unavailable(format!("{} contains no words", path.display()))
                } else {
                    ProfanityFilter::Available(list)
                }
            }
            Err(e) => ProfanityFilter::unavailable(format!("{}: {}", path.display(), e)),
        }
    }

    /// Reject `text` when the moderator blocks it, naming `field` in the error
    pub fn ensure_allowed(
        moderator: &ContentModerator,
        field: &str,
        text: &str,
    ) -> Result<(), ApiError> {
        if let ModerationVerdict::Blocked(reason) = moderator.check(text) {
            info!(field, reason = reason.as_str(), "Content rejected by moderation");
            return Err(ApiError::invalid_field(
                field,
                format!(
                    "{} contains prohibited content or inappropriate language",
                    get_field_display_label(field)
                ),
            ));
        }
        Ok(())
    }

    /// Boolean check used by the moderation endpoint
    pub fn is_prohibited(moderator: &ContentModerator, text: Option<&str>) -> bool {
        moderator.is_prohibited(text)
    }
}
