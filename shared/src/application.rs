use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::constants::*;
use crate::validation::*;

/// "Apply your community" form.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default, Validate)]
pub struct CommunityApplication {
    #[validate(length(min = 2), custom = "validate_community_name")]
    pub community_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(custom = "validate_required")]
    pub yeet_username: String,
    #[validate(custom = "validate_required")]
    pub telegram_handle: String,
    #[validate(custom = "validate_optional_url")]
    pub twitter_url: String,
    #[validate(custom = "validate_optional_url")]
    pub discord_url: String,
    #[validate(custom = "validate_optional_url")]
    pub website_url: String,
    pub other_socials: String,
}

impl CommunityApplication {
    pub fn error_messages(errors: &ValidationErrors) -> BTreeMap<&'static str, &'static str> {
        field_messages(errors, message_for)
    }

    pub fn check(&self) -> Result<(), BTreeMap<&'static str, &'static str>> {
        self.validate().map_err(|e| Self::error_messages(&e))
    }
}

fn message_for(field: &str, code: &str) -> &'static str {
    match (field, code) {
        ("community_name", "inappropriate_community_name") => INAPPROPRIATE_COMMUNITY_NAME_ERROR,
        ("community_name", _) => COMMUNITY_NAME_ERROR,
        ("email", _) => INVALID_EMAIL_ERROR,
        ("yeet_username", _) => YEET_USERNAME_REQUIRED,
        ("telegram_handle", _) => TELEGRAM_HANDLE_REQUIRED,
        ("twitter_url", _) => INVALID_TWITTER_URL_ERROR,
        ("discord_url", _) => INVALID_DISCORD_URL_ERROR,
        _ => INVALID_WEBSITE_URL_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn application() -> CommunityApplication {
        CommunityApplication {
            community_name: "Fomo Hour".to_string(),
            email: "host@fomohour.xyz".to_string(),
            yeet_username: "fomo".to_string(),
            telegram_handle: "@fomohour".to_string(),
            website_url: "https://fomohour.xyz".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_application() {
        assert!(application().check().is_ok());
    }

    #[test]
    fn test_required_and_format_errors() {
        let app = CommunityApplication {
            community_name: "F".to_string(),
            email: "not-an-email".to_string(),
            yeet_username: "  ".to_string(),
            twitter_url: "twitter".to_string(),
            ..application()
        };
        let messages = app.check().unwrap_err();
        assert_eq!(messages.get("community_name"), Some(&COMMUNITY_NAME_ERROR));
        assert_eq!(messages.get("email"), Some(&INVALID_EMAIL_ERROR));
        assert_eq!(messages.get("yeet_username"), Some(&YEET_USERNAME_REQUIRED));
        assert_eq!(messages.get("twitter_url"), Some(&INVALID_TWITTER_URL_ERROR));
        assert!(!messages.contains_key("telegram_handle"));
    }

    #[test]
    fn test_listed_community_names_are_accepted() {
        for community in crate::community::communities() {
            let app = CommunityApplication {
                community_name: community.name.clone(),
                ..application()
            };
            assert!(app.check().is_ok(), "{} was rejected", community.name);
        }
    }

    #[test]
    fn test_inappropriate_name_has_its_own_message() {
        let app = CommunityApplication {
            community_name: "Fuck Talk".to_string(),
            ..application()
        };
        let messages = app.check().unwrap_err();
        assert_eq!(
            messages.get("community_name"),
            Some(&INAPPROPRIATE_COMMUNITY_NAME_ERROR)
        );
    }
}
