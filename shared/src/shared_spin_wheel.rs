use rand::Rng;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::RaffleError;

pub const FULL_TURN: f64 = 360.0;
pub const SETTLE_DELAY_MS: u32 = 3000; // Matches the wheel's CSS transition
pub const MIN_EXTRA_ROTATIONS: u32 = 3;
pub const MAX_EXTRA_ROTATIONS: u32 = 6; // Exclusive
const ANGLE_EPSILON: f64 = 1e-6;
/// Number of colours the renderer cycles through.
pub const PALETTE_SIZE: usize = 4;

/// Where an entrant stands on the community leaderboard.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntrantStatus {
    Eligible,
    Entered,
    Excluded,
}

impl EntrantStatus {
    /// Only eligible and entered users get a slice of the wheel.
    pub fn can_spin(&self) -> bool {
        matches!(self, Self::Eligible | Self::Entered)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Eligible => "ELIGIBLE",
            Self::Entered => "ENTERED",
            Self::Excluded => "EXCLUDED",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Entrant {
    pub name: String,
    pub rank: u32,
    pub volume: f64,
    pub status: EntrantStatus,
}

impl Entrant {
    pub fn new(name: impl Into<String>, rank: u32, volume: f64, status: EntrantStatus) -> Self {
        Self {
            name: name.into(),
            rank,
            volume,
            status,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct WinnerRecord {
    pub name: String,
    pub rank: u32,
}

impl From<&Entrant> for WinnerRecord {
    fn from(entrant: &Entrant) -> Self {
        Self {
            name: entrant.name.clone(),
            rank: entrant.rank,
        }
    }
}

/// Whether a revealed winner stays in the pool for the next draw.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum WinnerPolicy {
    #[default]
    WithReplacement,
    WithoutReplacement,
}

/// How the wheel's rotation carries over between draws.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RotationPolicy {
    /// Keep growing so each spin continues from the last orientation.
    #[default]
    Accumulate,
    /// Fold the rotation back into [0, 360) before every draw.
    Normalize,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
#[validate(schema(function = "validate_rotation_range"))]
#[serde(default)]
pub struct WheelConfig {
    #[validate(range(max = 60000))]
    pub settle_delay_ms: u32,
    #[validate(range(min = 1))]
    pub min_rotations: u32,
    pub max_rotations: u32,
    pub winner_policy: WinnerPolicy,
    pub rotation_policy: RotationPolicy,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: SETTLE_DELAY_MS,
            min_rotations: MIN_EXTRA_ROTATIONS,
            max_rotations: MAX_EXTRA_ROTATIONS,
            winner_policy: WinnerPolicy::default(),
            rotation_policy: RotationPolicy::default(),
        }
    }
}

impl WheelConfig {
    pub fn checked(self) -> Result<Self, RaffleError> {
        self.validate()
            .map_err(|e| RaffleError::InvalidConfig(e.to_string()))?;
        Ok(self)
    }
}

fn validate_rotation_range(config: &WheelConfig) -> Result<(), ValidationError> {
    if config.max_rotations <= config.min_rotations {
        return Err(ValidationError::new("empty_rotation_range"));
    }
    Ok(())
}

/// Source of the two random choices a draw makes.
pub trait SpinSource {
    /// Whole extra turns in `min..max`.
    fn extra_rotations(&mut self, min: u32, max: u32) -> u32;
    /// Segment to land under the pointer, in `0..count`.
    fn target_index(&mut self, count: usize) -> usize;
}

/// Production source backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomSpin<R>(pub R);

impl<R: Rng> SpinSource for RandomSpin<R> {
    fn extra_rotations(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        self.0.gen_range(min..max)
    }

    fn target_index(&mut self, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        self.0.gen_range(0..count)
    }
}

/// A pre-rolled outcome. Used by tests and by callers that roll outside a reducer.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct FixedSpin {
    pub rotations: u32,
    pub index: usize,
}

impl FixedSpin {
    pub fn roll(source: &mut impl SpinSource, count: usize, config: &WheelConfig) -> Self {
        Self {
            rotations: source.extra_rotations(config.min_rotations, config.max_rotations),
            index: source.target_index(count),
        }
    }
}

impl SpinSource for FixedSpin {
    fn extra_rotations(&mut self, _min: u32, _max: u32) -> u32 {
        self.rotations
    }

    fn target_index(&mut self, _count: usize) -> usize {
        self.index
    }
}

pub fn segment_angle(count: usize) -> Option<f64> {
    if count == 0 {
        None
    } else {
        Some(FULL_TURN / count as f64)
    }
}

/// Index of the segment under the top pointer once the wheel has turned
/// clockwise by `total_rotation` degrees.
pub fn winning_index(total_rotation: f64, count: usize) -> Option<usize> {
    let angle = segment_angle(count)?;
    let normalized = total_rotation.rem_euclid(FULL_TURN);
    let position = (FULL_TURN - normalized) / angle;
    Some(((position + ANGLE_EPSILON).floor() as usize) % count)
}

/// Extra clockwise turn (in `[0, 360)`) that brings the middle of `target`
/// under the pointer from the current orientation.
pub fn offset_for_target(current_rotation: f64, target: usize, count: usize) -> f64 {
    let Some(angle) = segment_angle(count) else {
        return 0.0;
    };
    let resting = ((count - target % count) % count) as f64 * angle - angle / 2.0;
    let offset = (resting - current_rotation.rem_euclid(FULL_TURN)).rem_euclid(FULL_TURN);
    if FULL_TURN - offset < ANGLE_EPSILON {
        0.0
    } else {
        offset
    }
}

/// Geometry the renderer needs for one slice, measured clockwise from the top.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub index: usize,
    pub name: String,
    pub start_angle: f64,
    pub sweep: f64,
}

impl Segment {
    pub fn mid_angle(&self) -> f64 {
        self.start_angle + self.sweep / 2.0
    }

    /// Adjacent slices never share a colour, except the last and first when
    /// the count leaves a remainder of 1.
    pub fn color_slot(&self) -> usize {
        self.index % PALETTE_SIZE
    }
}

/// A draw that has been committed to the wheel but not yet revealed.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct PendingSpin {
    pub generation: u64,
    pub target_index: usize,
    pub extra_rotations: u32,
    pub delta: f64,
    pub settle_delay_ms: u32,
}

/// Everything the raffle wheel knows between interactions.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WheelState {
    config: WheelConfig,
    participants: Vec<Entrant>,
    total_rotation: f64,
    is_spinning: bool,
    current_winner: Option<WinnerRecord>,
    history: Vec<WinnerRecord>,
    generation: u64,
    pending: Option<PendingSpin>,
    /// Pool handed over mid-spin, applied once the wheel stops.
    #[serde(default)]
    queued_participants: Option<Vec<Entrant>>,
}

impl Default for WheelState {
    fn default() -> Self {
        Self::new(Vec::new(), WheelConfig::default())
    }
}

impl WheelState {
    pub fn new(participants: Vec<Entrant>, config: WheelConfig) -> Self {
        Self {
            config,
            participants: spin_pool(participants),
            total_rotation: 0.0,
            is_spinning: false,
            current_winner: None,
            history: Vec::new(),
            generation: 0,
            pending: None,
            queued_participants: None,
        }
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn participants(&self) -> &[Entrant] {
        &self.participants
    }

    pub fn total_rotation(&self) -> f64 {
        self.total_rotation
    }

    pub fn is_spinning(&self) -> bool {
        self.is_spinning
    }

    pub fn current_winner(&self) -> Option<&WinnerRecord> {
        self.current_winner.as_ref()
    }

    pub fn history(&self) -> &[WinnerRecord] {
        &self.history
    }

    pub fn pending(&self) -> Option<PendingSpin> {
        self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn can_draw(&self) -> bool {
        !self.is_spinning && !self.participants.is_empty()
    }

    pub fn segment_angle(&self) -> Option<f64> {
        segment_angle(self.participants.len())
    }

    /// Segment currently under the pointer.
    pub fn winning_index(&self) -> Option<usize> {
        winning_index(self.total_rotation, self.participants.len())
    }

    pub fn segments(&self) -> Vec<Segment> {
        let Some(sweep) = self.segment_angle() else {
            return Vec::new();
        };
        self.participants
            .iter()
            .enumerate()
            .map(|(index, entrant)| Segment {
                index,
                name: entrant.name.clone(),
                start_angle: index as f64 * sweep,
                sweep,
            })
            .collect()
    }

    /// Starts a spin. Returns the pending reveal, or `None` when the wheel is
    /// already spinning or has nobody on it.
    pub fn draw(mut self, source: &mut impl SpinSource) -> (Self, Option<PendingSpin>) {
        if self.is_spinning {
            log::debug!("Draw ignored: a spin is already in progress");
            return (self, None);
        }
        let count = self.participants.len();
        if count == 0 {
            log::debug!("Draw ignored: no eligible entrants");
            return (self, None);
        }

        let extra_rotations = source.extra_rotations(self.config.min_rotations, self.config.max_rotations);
        let target_index = source.target_index(count) % count;

        if self.config.rotation_policy == RotationPolicy::Normalize {
            self.total_rotation = self.total_rotation.rem_euclid(FULL_TURN);
        }
        let delta = extra_rotations as f64 * FULL_TURN
            + offset_for_target(self.total_rotation, target_index, count);
        self.total_rotation += delta;

        self.generation += 1;
        self.is_spinning = true;
        self.current_winner = None;

        let spin = PendingSpin {
            generation: self.generation,
            target_index,
            extra_rotations,
            delta,
            settle_delay_ms: self.config.settle_delay_ms,
        };
        self.pending = Some(spin);
        log::debug!(
            "Spinning {} entrants: {} turns, {:.2} degrees",
            count,
            extra_rotations,
            delta
        );
        (self, Some(spin))
    }

    /// Reveals the winner of `spin` once the settle delay has elapsed.
    /// Stale reveals (after a close or a newer draw) are dropped.
    pub fn settle(mut self, spin: PendingSpin) -> Self {
        if self.pending != Some(spin) {
            log::debug!("Ignoring stale reveal for generation {}", spin.generation);
            return self;
        }
        self.pending = None;
        self.is_spinning = false;

        let Some(index) = self.winning_index() else {
            return self;
        };
        let record = WinnerRecord::from(&self.participants[index]);
        log::info!("Wheel landed on {} (rank #{})", record.name, record.rank);

        if self.config.winner_policy == WinnerPolicy::WithoutReplacement {
            self.participants.remove(index);
        }
        if let Some(mut queued) = self.queued_participants.take() {
            if self.config.winner_policy == WinnerPolicy::WithoutReplacement {
                queued.retain(|entrant| entrant.name != record.name);
            }
            self.participants = queued;
        }
        self.history.push(record.clone());
        self.current_winner = Some(record);
        self
    }

    /// Clears the announcement. Rotation and history stay.
    pub fn reset(mut self) -> Self {
        self.current_winner = None;
        self
    }

    pub fn clear_history(mut self) -> Self {
        self.history.clear();
        self
    }

    /// Host view dismissed: drop any pending reveal and start the next open clean.
    pub fn close(mut self) -> Self {
        if self.pending.take().is_some() {
            log::debug!("Wheel closed mid-spin, discarding reveal");
        }
        self.generation += 1;
        self.is_spinning = false;
        self.current_winner = None;
        self.total_rotation = 0.0;
        if let Some(queued) = self.queued_participants.take() {
            self.participants = queued;
        }
        self
    }

    /// Replaces the pool. While spinning the update is held back until the
    /// spin settles or the wheel closes.
    pub fn set_participants(mut self, participants: Vec<Entrant>) -> Self {
        if self.is_spinning {
            log::debug!("Participant update deferred until the wheel stops");
            self.queued_participants = Some(spin_pool(participants));
            return self;
        }
        self.queued_participants = None;
        self.participants = spin_pool(participants);
        self
    }
}

fn spin_pool(entrants: Vec<Entrant>) -> Vec<Entrant> {
    entrants
        .into_iter()
        .filter(|entrant| entrant.status.can_spin())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn abc() -> Vec<Entrant> {
        vec![
            Entrant::new("A", 1, 300.0, EntrantStatus::Entered),
            Entrant::new("B", 2, 200.0, EntrantStatus::Entered),
            Entrant::new("C", 3, 100.0, EntrantStatus::Entered),
        ]
    }

    fn pool(count: usize) -> Vec<Entrant> {
        (0..count)
            .map(|i| Entrant::new(format!("user{}", i), i as u32 + 1, 1000.0, EntrantStatus::Eligible))
            .collect()
    }

    #[test]
    fn test_segment_angle_covers_full_turn() {
        assert_eq!(segment_angle(0), None);
        for count in 1..=50 {
            let angle = segment_angle(count).unwrap();
            assert!((angle * count as f64 - FULL_TURN).abs() < 1e-9);
        }
    }

    #[test]
    fn test_fresh_delta_maps_back_to_target() {
        for count in 1..=24 {
            for target in 0..count {
                let wheel = WheelState::new(pool(count), WheelConfig::default());
                let (_, spin) = wheel.draw(&mut FixedSpin { rotations: 4, index: target });
                let spin = spin.unwrap();
                assert_eq!(winning_index(spin.delta, count), Some(target));
                assert_eq!(spin.target_index, target);
            }
        }
    }

    #[test]
    fn test_pointer_rests_mid_segment() {
        for count in 1..=24 {
            let angle = segment_angle(count).unwrap();
            for target in 0..count {
                let wheel = WheelState::new(pool(count), WheelConfig::default());
                let (wheel, _) = wheel.draw(&mut FixedSpin { rotations: 3, index: target });
                let normalized = wheel.total_rotation().rem_euclid(FULL_TURN);
                let position = (FULL_TURN - normalized) / angle;
                assert!((position.fract() - 0.5).abs() < 1e-6, "count {} target {}", count, target);
            }
        }
    }

    #[test]
    fn test_accumulated_rotation_still_lands_on_target() {
        let mut rng = RandomSpin(StdRng::seed_from_u64(7));
        let mut wheel = WheelState::new(pool(7), WheelConfig::default());
        for _ in 0..40 {
            let before = wheel.total_rotation();
            let (next, spin) = wheel.draw(&mut rng);
            let spin = spin.unwrap();
            assert!(next.total_rotation() > before);
            assert_eq!(next.winning_index(), Some(spin.target_index));
            wheel = next.settle(spin);
            assert_eq!(wheel.current_winner().unwrap().name, format!("user{}", spin.target_index));
        }
        assert_eq!(wheel.history().len(), 40);
    }

    #[test]
    fn test_random_rotations_within_configured_range() {
        let config = WheelConfig::default();
        let mut rng = RandomSpin(StdRng::seed_from_u64(42));
        for _ in 0..200 {
            let roll = FixedSpin::roll(&mut rng, 5, &config);
            assert!((MIN_EXTRA_ROTATIONS..MAX_EXTRA_ROTATIONS).contains(&roll.rotations));
            assert!(roll.index < 5);
        }
    }

    #[test]
    fn test_single_participant_always_wins() {
        let mut wheel = WheelState::new(pool(1), WheelConfig::default());
        let mut rng = RandomSpin(StdRng::seed_from_u64(1));
        for _ in 0..10 {
            let (next, spin) = wheel.draw(&mut rng);
            assert_eq!(spin.unwrap().settle_delay_ms, SETTLE_DELAY_MS);
            wheel = next.settle(spin.unwrap());
            assert_eq!(wheel.current_winner().unwrap().name, "user0");
        }
    }

    #[test]
    fn test_empty_wheel_cannot_draw() {
        let wheel = WheelState::new(
            vec![Entrant::new("X", 1, 10.0, EntrantStatus::Excluded)],
            WheelConfig::default(),
        );
        assert!(wheel.is_empty());
        assert!(!wheel.can_draw());
        let before = wheel.clone();
        let (after, spin) = wheel.draw(&mut FixedSpin { rotations: 3, index: 0 });
        assert!(spin.is_none());
        assert_eq!(after, before);
    }

    #[test]
    fn test_double_draw_yields_one_winner() {
        let wheel = WheelState::new(abc(), WheelConfig::default());
        let (wheel, first) = wheel.draw(&mut FixedSpin { rotations: 3, index: 0 });
        let rotation = wheel.total_rotation();
        let (wheel, second) = wheel.draw(&mut FixedSpin { rotations: 5, index: 1 });
        assert!(second.is_none());
        assert_eq!(wheel.total_rotation(), rotation);

        let wheel = wheel.settle(first.unwrap());
        assert_eq!(wheel.history().len(), 1);
        assert!(!wheel.is_spinning());

        // Settling the same spin twice must not add a second record
        let wheel = wheel.settle(first.unwrap());
        assert_eq!(wheel.history().len(), 1);
    }

    #[test]
    fn test_end_to_end_forced_index() {
        let wheel = WheelState::new(abc(), WheelConfig::default());
        assert_eq!(wheel.segment_angle(), Some(120.0));
        let (wheel, spin) = wheel.draw(&mut FixedSpin { rotations: 3, index: 2 });
        assert!(wheel.is_spinning());
        assert!(wheel.current_winner().is_none());
        let wheel = wheel.settle(spin.unwrap());
        let expected = WinnerRecord { name: "C".to_string(), rank: 3 };
        assert_eq!(wheel.current_winner(), Some(&expected));
        assert_eq!(wheel.history(), &[expected]);
    }

    #[test]
    fn test_reset_and_clear_history_are_independent() {
        let wheel = WheelState::new(abc(), WheelConfig::default());
        let (wheel, spin) = wheel.draw(&mut FixedSpin { rotations: 3, index: 1 });
        let wheel = wheel.settle(spin.unwrap());
        let rotation = wheel.total_rotation();

        let cleared = wheel.clone().clear_history();
        assert!(cleared.history().is_empty());
        assert_eq!(cleared.current_winner().unwrap().name, "B");
        assert_eq!(cleared.total_rotation(), rotation);

        let reset = wheel.reset();
        assert!(reset.current_winner().is_none());
        assert_eq!(reset.history().len(), 1);
        assert_eq!(reset.total_rotation(), rotation);
    }

    #[test]
    fn test_close_discards_pending_reveal() {
        let wheel = WheelState::new(abc(), WheelConfig::default());
        let (wheel, spin) = wheel.draw(&mut FixedSpin { rotations: 3, index: 0 });
        let wheel = wheel.close();
        assert!(!wheel.is_spinning());
        assert_eq!(wheel.total_rotation(), 0.0);
        assert!(wheel.pending().is_none());

        let wheel = wheel.settle(spin.unwrap());
        assert!(wheel.current_winner().is_none());
        assert!(wheel.history().is_empty());
        assert!(wheel.can_draw());
    }

    #[test]
    fn test_excluded_entrants_get_no_segment() {
        let mut entrants = abc();
        entrants.insert(1, Entrant::new("MoonShot", 4, 12750.0, EntrantStatus::Excluded));
        let wheel = WheelState::new(entrants, WheelConfig::default());
        let names: Vec<_> = wheel.segments().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(wheel.segments()[2].mid_angle(), 300.0);
        assert_eq!(wheel.segments()[2].color_slot(), 2);
    }

    #[test]
    fn test_without_replacement_removes_winner() {
        let config = WheelConfig {
            winner_policy: WinnerPolicy::WithoutReplacement,
            ..WheelConfig::default()
        };
        let wheel = WheelState::new(abc(), config);
        let (wheel, spin) = wheel.draw(&mut FixedSpin { rotations: 3, index: 0 });
        let wheel = wheel.settle(spin.unwrap());
        assert_eq!(wheel.current_winner().unwrap().name, "A");
        assert_eq!(wheel.participants().len(), 2);
        assert!(wheel.participants().iter().all(|e| e.name != "A"));
    }

    #[test]
    fn test_normalize_policy_folds_rotation() {
        let config = WheelConfig {
            rotation_policy: RotationPolicy::Normalize,
            ..WheelConfig::default()
        };
        let mut wheel = WheelState::new(abc(), config);
        for index in [2, 0, 1] {
            let (next, spin) = wheel.draw(&mut FixedSpin { rotations: 5, index });
            assert!(next.total_rotation() < FULL_TURN * 7.0);
            wheel = next.settle(spin.unwrap());
            assert_eq!(wheel.winning_index(), Some(index));
        }
    }

    #[test]
    fn test_participants_frozen_while_spinning() {
        let wheel = WheelState::new(abc(), WheelConfig::default());
        let (wheel, _) = wheel.draw(&mut FixedSpin { rotations: 3, index: 0 });
        let wheel = wheel.set_participants(pool(5));
        assert_eq!(wheel.participants().len(), 3);
        let wheel = wheel.close();
        assert_eq!(wheel.participants().len(), 5);
    }

    #[test]
    fn test_mid_spin_pool_change_applies_on_settle() {
        let wheel = WheelState::new(abc(), WheelConfig::default());
        let (wheel, spin) = wheel.draw(&mut FixedSpin { rotations: 3, index: 1 });
        let wheel = wheel.set_participants(pool(4));
        assert_eq!(wheel.participants().len(), 3);

        let wheel = wheel.settle(spin.unwrap());
        assert_eq!(wheel.current_winner().unwrap().name, "B");
        assert_eq!(wheel.participants().len(), 4);
        assert!(wheel.participants().iter().all(|e| e.name.starts_with("user")));
    }

    #[test]
    fn test_mid_spin_pool_change_keeps_winner_out() {
        let config = WheelConfig {
            winner_policy: WinnerPolicy::WithoutReplacement,
            ..WheelConfig::default()
        };
        let wheel = WheelState::new(pool(4), config);
        let (wheel, spin) = wheel.draw(&mut FixedSpin { rotations: 3, index: 2 });
        let wheel = wheel.set_participants(pool(3)).settle(spin.unwrap());
        assert_eq!(wheel.current_winner().unwrap().name, "user2");
        let names: Vec<_> = wheel.participants().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["user0", "user1"]);
    }

    #[test]
    fn test_config_rejects_empty_rotation_range() {
        let config = WheelConfig {
            min_rotations: 4,
            max_rotations: 4,
            ..WheelConfig::default()
        };
        assert!(matches!(config.checked(), Err(RaffleError::InvalidConfig(_))));
        assert!(WheelConfig::default().checked().is_ok());
    }
}
