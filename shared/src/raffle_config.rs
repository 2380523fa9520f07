use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::constants::*;
use crate::eligibility::RaffleCriteria;
use crate::error::RaffleError;
use crate::validation::*;

/// The host panel's form. Thresholds stay as typed text until saved.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default, Validate)]
pub struct RaffleConfig {
    #[validate(custom = "validate_codeword")]
    pub codeword: String,
    #[validate(custom = "validate_promoted_tweet")]
    pub promoted_tweet: String,
    #[validate(custom = "validate_min_ranking")]
    pub min_ranking: String,
    #[validate(custom = "validate_min_volume")]
    pub min_volume: String,
    pub is_live: bool,
}

impl RaffleConfig {
    pub fn toggle_live(&mut self) -> bool {
        self.is_live = !self.is_live;
        log::info!("Raffle is now {}", self.status_label());
        self.is_live
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_live {
            "LIVE"
        } else {
            "OFFLINE"
        }
    }

    pub fn status_message(&self) -> &'static str {
        if self.is_live {
            "Raffle is currently active"
        } else {
            "Raffle is not accepting entries"
        }
    }

    pub fn criteria(&self) -> Result<RaffleCriteria, RaffleError> {
        RaffleCriteria::parse(&self.min_ranking, &self.min_volume)
    }

    /// Validates the whole form. Nothing is persisted.
    pub fn save(&self) -> Result<RaffleCriteria, RaffleError> {
        self.validate()?;
        let criteria = self.criteria()?;
        log::info!(
            "Saved raffle config: codeword={}, min_ranking={:?}, min_volume={:?}",
            self.codeword,
            criteria.min_ranking,
            criteria.min_volume
        );
        Ok(criteria)
    }

    pub fn error_messages(errors: &ValidationErrors) -> BTreeMap<&'static str, &'static str> {
        field_messages(errors, message_for)
    }
}

fn message_for(field: &str, code: &str) -> &'static str {
    match (field, code) {
        ("codeword", "inappropriate_codeword") => INAPPROPRIATE_CODEWORD_ERROR,
        ("codeword", _) => INVALID_CODEWORD_ERROR,
        ("promoted_tweet", _) => INVALID_PROMOTED_TWEET_ERROR,
        ("min_ranking", _) => INVALID_MIN_RANKING_ERROR,
        _ => INVALID_MIN_VOLUME_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RaffleConfig {
        RaffleConfig {
            codeword: "yeet2025".to_string(),
            promoted_tweet: "@boards".to_string(),
            min_ranking: "5".to_string(),
            min_volume: "".to_string(),
            is_live: false,
        }
    }

    #[test]
    fn test_toggle_live() {
        let mut config = config();
        assert_eq!(config.status_label(), "OFFLINE");
        assert!(config.toggle_live());
        assert_eq!(config.status_label(), "LIVE");
        assert!(!config.toggle_live());
    }

    #[test]
    fn test_save_returns_criteria() {
        let criteria = config().save().unwrap();
        assert_eq!(criteria.min_ranking, Some(5));
        assert_eq!(criteria.min_volume, None);
    }

    #[test]
    fn test_save_reports_each_bad_field() {
        let config = RaffleConfig {
            codeword: "x".to_string(),
            min_volume: "lots".to_string(),
            ..config()
        };
        let Err(RaffleError::Validation(errors)) = config.save() else {
            panic!("expected validation errors");
        };
        let messages = RaffleConfig::error_messages(&errors);
        assert_eq!(messages.get("codeword"), Some(&INVALID_CODEWORD_ERROR));
        assert_eq!(messages.get("min_volume"), Some(&INVALID_MIN_VOLUME_ERROR));
        assert!(!messages.contains_key("min_ranking"));
    }

    #[test]
    fn test_codeword_profanity_is_flagged() {
        let config = RaffleConfig {
            codeword: "fuck-you".to_string(),
            ..config()
        };
        let Err(RaffleError::Validation(errors)) = config.save() else {
            panic!("expected validation errors");
        };
        let messages = RaffleConfig::error_messages(&errors);
        assert_eq!(messages.get("codeword"), Some(&INAPPROPRIATE_CODEWORD_ERROR));
    }

    #[test]
    fn test_bitcoin_codeword_saves() {
        let config = RaffleConfig {
            codeword: "bitcoin".to_string(),
            ..config()
        };
        assert!(config.save().is_ok());
    }
}
