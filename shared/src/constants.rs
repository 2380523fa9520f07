pub const NO_ELIGIBLE_USERS: &str = "No eligible users found for the raffle.";
pub const INVALID_CODEWORD_ERROR: &str = "Codeword must be 3-32 letters, numbers, dashes or underscores";
pub const INAPPROPRIATE_CODEWORD_ERROR: &str = "Please choose a different codeword";
pub const INVALID_PROMOTED_TWEET_ERROR: &str = "Enter a tweet URL or an @handle";
pub const INVALID_MIN_RANKING_ERROR: &str = "Minimum ranking must be a whole number of at least 1";
pub const INVALID_MIN_VOLUME_ERROR: &str = "Minimum volume must be a non-negative number";
pub const COMMUNITY_NAME_ERROR: &str = "Community name must be at least 2 characters";
pub const INAPPROPRIATE_COMMUNITY_NAME_ERROR: &str = "Please choose a different community name";
pub const INVALID_EMAIL_ERROR: &str = "Please enter a valid email address";
pub const YEET_USERNAME_REQUIRED: &str = "Yeet username is required";
pub const TELEGRAM_HANDLE_REQUIRED: &str = "Telegram handle is required";
pub const INVALID_TWITTER_URL_ERROR: &str = "Please enter a valid Twitter URL";
pub const INVALID_DISCORD_URL_ERROR: &str = "Please enter a valid Discord URL";
pub const INVALID_WEBSITE_URL_ERROR: &str = "Please enter a valid website URL";

pub const CONFIG_SAVED: &str = "Configuration saved";
pub const APPLICATION_SUBMITTED: &str = "Application Submitted! We'll review your application and get back to you soon.";
pub const APPLICATION_SUBMIT_DELAY_MS: u32 = 2000;
pub const WHEEL_CONFIG_STORAGE_KEY: &str = "raffle_wheel_config";
