use once_cell::sync::Lazy;
use regex::Regex;
use rustrict::{CensorStr, Type};

/// Community vocabulary that `rustrict` misreads ("Bitcoin" censors to "B***oin").
static ALLOWED_TERMS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)bitcoin|satoshi|altcoin|hodl").unwrap());

#[derive(Debug)]
pub struct ProfanityFilter;

impl ProfanityFilter {
    /// Masks allowlisted terms so only the remaining text is judged.
    fn screened(text: &str) -> String {
        ALLOWED_TERMS.replace_all(text, " ").into_owned()
    }

    /// Codewords are read out on stream, so they get the strict check.
    pub fn validate_codeword(codeword: &str) -> Result<(), String> {
        let screened = Self::screened(codeword);
        let spaced = screened.replace(['-', '_'], " ");
        if screened.is_inappropriate() || spaced.is_inappropriate() {
            return Err(format!("Inappropriate language detected: {}", codeword));
        }
        Ok(())
    }

    pub fn validate_community_name(name: &str) -> Result<(), String> {
        if Self::screened(name).is(Type::INAPPROPRIATE | Type::EVASIVE) {
            return Err(format!("Inappropriate language detected: {}", name));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_passes() {
        assert!(ProfanityFilter::validate_codeword("diamond-hands").is_ok());
        assert!(ProfanityFilter::validate_codeword("bitcoin").is_ok());
        assert!(ProfanityFilter::validate_codeword("Bitcoin_2025").is_ok());
        assert!(ProfanityFilter::validate_community_name("Fomo Hour").is_ok());
        assert!(ProfanityFilter::validate_community_name("Bitcoin Talk").is_ok());
    }

    #[test]
    fn test_profane_text_rejected() {
        assert!(ProfanityFilter::validate_codeword("fuck").is_err());
        assert!(ProfanityFilter::validate_codeword("fuck-you").is_err());
        assert!(ProfanityFilter::validate_community_name("Fuck Talk").is_err());
    }

    #[test]
    fn test_allowlist_does_not_hide_profanity() {
        assert!(ProfanityFilter::validate_codeword("bitcoin-fuck").is_err());
        assert!(ProfanityFilter::validate_community_name("Bitcoin Shit Talk").is_err());
    }
}
