use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::{ValidationError, ValidationErrors};

use crate::eligibility::{parse_ranking, parse_volume};
use crate::profanity::ProfanityFilter;

static CODEWORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{3,32}$").unwrap());
static HANDLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^@?[A-Za-z0-9_]{1,15}$").unwrap());
static TWEET_URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^https?://\S+$").unwrap());

pub fn validate_codeword(codeword: &str) -> Result<(), ValidationError> {
    if !CODEWORD_RE.is_match(codeword) {
        return Err(ValidationError::new("invalid_codeword"));
    }
    if ProfanityFilter::validate_codeword(codeword).is_err() {
        return Err(ValidationError::new("inappropriate_codeword"));
    }
    Ok(())
}

/// Accepts a tweet URL or an X handle. Empty means no promoted tweet.
pub fn validate_promoted_tweet(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() || HANDLE_RE.is_match(value) || TWEET_URL_RE.is_match(value) {
        return Ok(());
    }
    Err(ValidationError::new("invalid_promoted_tweet"))
}

pub fn validate_min_ranking(value: &str) -> Result<(), ValidationError> {
    parse_ranking(value)
        .map(|_| ())
        .map_err(|_| ValidationError::new("invalid_min_ranking"))
}

pub fn validate_min_volume(value: &str) -> Result<(), ValidationError> {
    parse_volume(value)
        .map(|_| ())
        .map_err(|_| ValidationError::new("invalid_min_volume"))
}

pub fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

pub fn validate_community_name(name: &str) -> Result<(), ValidationError> {
    if ProfanityFilter::validate_community_name(name).is_err() {
        return Err(ValidationError::new("inappropriate_community_name"));
    }
    Ok(())
}

/// Optional link fields arrive as empty strings from the form.
pub fn validate_optional_url(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() || validator::validate_url(value) {
        return Ok(());
    }
    Err(ValidationError::new("invalid_url"))
}

/// One message per failing field, keyed by field name.
pub fn field_messages(
    errors: &ValidationErrors,
    message_for: fn(&str, &str) -> &'static str,
) -> BTreeMap<&'static str, &'static str> {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            errs.first()
                .map(|err| (field, message_for(field, err.code.as_ref())))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codeword_rules() {
        assert!(validate_codeword("moon-2025").is_ok());
        assert!(validate_codeword("ab").is_err());
        assert!(validate_codeword("has space").is_err());
        assert!(validate_codeword("bitcoin").is_ok());
        let err = validate_codeword("fuck-you").unwrap_err();
        assert_eq!(err.code, "inappropriate_codeword");
    }

    #[test]
    fn test_community_name_rules() {
        assert!(validate_community_name("Bitcoin Talk").is_ok());
        let err = validate_community_name("Fuck Talk").unwrap_err();
        assert_eq!(err.code, "inappropriate_community_name");
    }

    #[test]
    fn test_promoted_tweet_accepts_url_or_handle() {
        assert!(validate_promoted_tweet("").is_ok());
        assert!(validate_promoted_tweet("@boards_xyz").is_ok());
        assert!(validate_promoted_tweet("https://x.com/boards/status/1").is_ok());
        assert!(validate_promoted_tweet("not a tweet!").is_err());
    }

    #[test]
    fn test_threshold_fields() {
        assert!(validate_min_ranking("").is_ok());
        assert!(validate_min_ranking("10").is_ok());
        assert!(validate_min_ranking("ten").is_err());
        assert!(validate_min_volume("1,000.5").is_ok());
        assert!(validate_min_volume("-1").is_err());
    }

    #[test]
    fn test_optional_url() {
        assert!(validate_optional_url("").is_ok());
        assert!(validate_optional_url("https://discord.gg/boards").is_ok());
        assert!(validate_optional_url("discord").is_err());
    }
}
