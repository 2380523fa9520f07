use serde::{Deserialize, Serialize};

use crate::error::RaffleError;
use crate::shared_spin_wheel::Entrant;

pub const MIN_RANKING_FIELD: &str = "Minimum ranking";
pub const MIN_VOLUME_FIELD: &str = "Minimum volume";

/// Thresholds a host sets before opening the wheel. `None` means no limit.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct RaffleCriteria {
    pub min_ranking: Option<u32>,
    pub min_volume: Option<f64>,
}

impl RaffleCriteria {
    /// Builds criteria from the raw text of the two threshold inputs.
    pub fn parse(min_ranking: &str, min_volume: &str) -> Result<Self, RaffleError> {
        Ok(Self {
            min_ranking: parse_ranking(min_ranking)?,
            min_volume: parse_volume(min_volume)?,
        })
    }

    pub fn qualifies(&self, entrant: &Entrant) -> bool {
        let meets_ranking = self.min_ranking.map_or(true, |max_rank| entrant.rank <= max_rank);
        let meets_volume = self.min_volume.map_or(true, |min| entrant.volume >= min);
        meets_ranking && meets_volume && entrant.status.can_spin()
    }

    pub fn filter(&self, entrants: &[Entrant]) -> Vec<Entrant> {
        entrants
            .iter()
            .filter(|entrant| self.qualifies(entrant))
            .cloned()
            .collect()
    }

    pub fn eligible_count(&self, entrants: &[Entrant]) -> usize {
        entrants.iter().filter(|entrant| self.qualifies(entrant)).count()
    }
}

pub fn parse_ranking(input: &str) -> Result<Option<u32>, RaffleError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value: i64 = trimmed.parse().map_err(|_| RaffleError::InvalidRanking {
        field: MIN_RANKING_FIELD,
        value: trimmed.to_string(),
    })?;
    if value < 1 {
        return Err(RaffleError::RankingBelowOne { field: MIN_RANKING_FIELD });
    }
    u32::try_from(value)
        .map(Some)
        .map_err(|_| RaffleError::InvalidRanking {
            field: MIN_RANKING_FIELD,
            value: trimmed.to_string(),
        })
}

pub fn parse_volume(input: &str) -> Result<Option<f64>, RaffleError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value: f64 = trimmed
        .replace(',', "")
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| RaffleError::InvalidVolume {
            field: MIN_VOLUME_FIELD,
            value: trimmed.to_string(),
        })?;
    if value < 0.0 {
        return Err(RaffleError::NegativeVolume { field: MIN_VOLUME_FIELD });
    }
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::community::mock_leaderboard;

    fn entrants() -> Vec<Entrant> {
        mock_leaderboard().into_iter().map(|row| row.entrant).collect()
    }

    #[test]
    fn test_blank_criteria_keep_only_spinnable_statuses() {
        let criteria = RaffleCriteria::parse("", "  ").unwrap();
        assert_eq!(criteria, RaffleCriteria::default());
        // MoonShot and DegenTrader are excluded on the mock board
        assert_eq!(criteria.eligible_count(&entrants()), 8);
    }

    #[test]
    fn test_ranking_and_volume_thresholds() {
        let criteria = RaffleCriteria::parse("5", "12000").unwrap();
        let names: Vec<_> = criteria.filter(&entrants()).into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["CryptoKing2024", "YeetMaster", "DiamondHands"]);
    }

    #[test]
    fn test_volume_threshold_is_inclusive() {
        let criteria = RaffleCriteria::parse("", "8,900").unwrap();
        assert_eq!(criteria.min_volume, Some(8900.0));
        assert!(criteria.filter(&entrants()).iter().any(|e| e.name == "ProTrader"));
    }

    #[test]
    fn test_rejects_bad_threshold_input() {
        assert!(matches!(
            RaffleCriteria::parse("top ten", ""),
            Err(RaffleError::InvalidRanking { .. })
        ));
        assert!(matches!(parse_ranking("0"), Err(RaffleError::RankingBelowOne { .. })));
        assert!(matches!(parse_volume("lots"), Err(RaffleError::InvalidVolume { .. })));
        assert!(matches!(parse_volume("-5"), Err(RaffleError::NegativeVolume { .. })));
        assert!(matches!(parse_volume("inf"), Err(RaffleError::InvalidVolume { .. })));
    }
}
