pub mod apply_community;
pub mod home;
pub mod host_raffle;
pub mod leaderboard;
pub mod not_found;
