pub mod community_card;
pub mod giveaway_section;
pub mod leaderboard_period;
pub mod raffle_admin;
pub mod spin_wheel;
pub mod text_field;

pub use community_card::CommunityCard;
pub use giveaway_section::GiveawaySection;
pub use leaderboard_period::LeaderboardPeriod;
pub use raffle_admin::RaffleAdmin;
pub use spin_wheel::SpinWheel;
pub use text_field::TextField;
