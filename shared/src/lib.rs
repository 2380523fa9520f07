pub mod application;
pub mod community;
pub mod constants;
pub mod countdown;
pub mod eligibility;
pub mod error;
pub mod profanity;
pub mod raffle_config;
pub mod shared_spin_wheel;
pub mod validation;

pub use error::RaffleError;
