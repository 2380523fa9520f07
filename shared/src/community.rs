use serde::{Deserialize, Serialize};

use crate::shared_spin_wheel::{Entrant, EntrantStatus};

pub const UNKNOWN_COMMUNITY: &str = "Unknown Community";
/// Only this community shows the host raffle panel on its leaderboard.
pub const HOST_DEMO_COMMUNITY: &str = "btctalk";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Community {
    pub id: String,
    pub name: String,
    pub members: String,
    pub highlighted: bool,
}

/// One row of a community leaderboard.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LeaderboardRow {
    pub entrant: Entrant,
    pub change: String,
}

impl LeaderboardRow {
    pub fn is_trending_up(&self) -> bool {
        !self.change.starts_with('-')
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankTier {
    Gold,
    Silver,
    Bronze,
    Plain,
}

impl RankTier {
    pub fn for_rank(rank: u32) -> Self {
        match rank {
            1 => Self::Gold,
            2 => Self::Silver,
            3 => Self::Bronze,
            _ => Self::Plain,
        }
    }

    pub fn medal(&self) -> Option<&'static str> {
        match self {
            Self::Gold => Some("🥇"),
            Self::Silver => Some("🥈"),
            Self::Bronze => Some("🥉"),
            Self::Plain => None,
        }
    }
}

const COMMUNITIES: &[(&str, &str, &str)] = &[
    ("207Bear_Dizkontinued", "207Bear x Dizkontinued", "2.5K"),
    ("btctalk", "Bitcoin Talk", "15.2K"),
    ("bodoggos", "Bodoggos", "8.7K"),
    ("disgrazze", "Disgrazze", "3.1K"),
    ("fomohour", "Fomo Hour", "12.4K"),
    ("GCCrypto", "GC Crypto", "6.8K"),
    ("jasper", "Jasper", "4.2K"),
    ("kaitoAI_August", "KaitoAI - August", "9.3K"),
    ("mandominutes", "Mando Minutes", "5.6K"),
];

const LEADERBOARD: &[(&str, f64, &str, EntrantStatus)] = &[
    ("CryptoKing2024", 15420.0, "+12.5%", EntrantStatus::Entered),
    ("YeetMaster", 14850.0, "+8.2%", EntrantStatus::Eligible),
    ("DiamondHands", 13990.0, "+15.1%", EntrantStatus::Entered),
    ("MoonShot", 12750.0, "-2.3%", EntrantStatus::Excluded),
    ("HODLer4Life", 11900.0, "+5.7%", EntrantStatus::Entered),
    ("AlphaTrade", 11200.0, "+9.4%", EntrantStatus::Eligible),
    ("BullMarket", 10850.0, "+3.1%", EntrantStatus::Eligible),
    ("DegenTrader", 9950.0, "-1.5%", EntrantStatus::Excluded),
    ("GigaChad", 9420.0, "+7.8%", EntrantStatus::Entered),
    ("ProTrader", 8900.0, "+4.2%", EntrantStatus::Eligible),
];

pub fn communities() -> Vec<Community> {
    COMMUNITIES
        .iter()
        .enumerate()
        .map(|(i, (id, name, members))| Community {
            id: id.to_string(),
            name: name.to_string(),
            members: members.to_string(),
            highlighted: i == 0,
        })
        .collect()
}

pub fn find_community(id: &str) -> Option<Community> {
    communities().into_iter().find(|c| c.id == id)
}

pub fn community_name(id: &str) -> String {
    find_community(id)
        .map(|c| c.name)
        .unwrap_or_else(|| UNKNOWN_COMMUNITY.to_string())
}

/// Every community currently shares the same mocked board.
pub fn mock_leaderboard() -> Vec<LeaderboardRow> {
    LEADERBOARD
        .iter()
        .enumerate()
        .map(|(i, (name, volume, change, status))| LeaderboardRow {
            entrant: Entrant::new(*name, i as u32 + 1, *volume, *status),
            change: change.to_string(),
        })
        .collect()
}

pub fn has_host_panel(id: &str) -> bool {
    id == HOST_DEMO_COMMUNITY
}

pub fn search(rows: &[LeaderboardRow], query: &str) -> Vec<LeaderboardRow> {
    let needle = query.trim().to_lowercase();
    rows.iter()
        .filter(|row| row.entrant.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// "15420" -> "15,420"; fractional volumes keep up to two decimals.
pub fn format_volume(volume: f64) -> String {
    let total_cents = (volume.abs() * 100.0).round() as u64;
    let (whole, cents) = (total_cents / 100, total_cents % 100);
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if volume < 0.0 && total_cents > 0 { "-" } else { "" };
    if cents == 0 {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{:02}", sign, grouped, cents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_community_name() {
        assert_eq!(community_name("btctalk"), "Bitcoin Talk");
        assert_eq!(community_name("nope"), UNKNOWN_COMMUNITY);
        assert!(communities()[0].highlighted);
        assert_eq!(communities().len(), 9);
        assert!(has_host_panel("btctalk"));
        assert!(!has_host_panel("jasper"));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let rows = mock_leaderboard();
        let hits = search(&rows, "TRADE");
        let names: Vec<_> = hits.iter().map(|r| r.entrant.name.as_str()).collect();
        assert_eq!(names, vec!["AlphaTrade", "DegenTrader", "ProTrader"]);
        assert_eq!(search(&rows, "").len(), rows.len());
    }

    #[test]
    fn test_rank_tiers() {
        assert_eq!(RankTier::for_rank(1).medal(), Some("🥇"));
        assert_eq!(RankTier::for_rank(3), RankTier::Bronze);
        assert_eq!(RankTier::for_rank(4).medal(), None);
    }

    #[test]
    fn test_format_volume() {
        assert_eq!(format_volume(15420.0), "15,420");
        assert_eq!(format_volume(999.0), "999");
        assert_eq!(format_volume(1234567.5), "1,234,567.50");
        assert_eq!(format_volume(1.999), "2");
        assert_eq!(format_volume(999.996), "1,000");
        assert_eq!(format_volume(0.5), "0.50");
    }
}
