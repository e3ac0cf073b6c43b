use serde::{Deserialize, Serialize};

/// Yaw added after every rendered frame, in degrees.
pub const YAW_STEP: f32 = 0.05;

/// Pitch is clamped to `[-PITCH_LIMIT, PITCH_LIMIT]` degrees.
pub const PITCH_LIMIT: f32 = 70.0;

/// Yaw at startup, in degrees.
pub const INITIAL_YAW: f32 = 45.0;

/// Errors from constructing a [`Level`] out of an unchecked integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LevelError {
    #[error("subdivision level {0} is out of range (expected 0..=5)")]
    OutOfRange(u32),
}

/// Subdivision level: the recursion depth handed to the geometry generator.
///
/// The bound lives in the type so that the generator never sees a depth it
/// cannot finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Level(u8);

impl Level {
    pub const MIN: Level = Level(0);
    pub const MAX: Level = Level(5);
    /// Level at startup.
    pub const INITIAL: Level = Level(2);

    pub fn new(depth: u32) -> Result<Self, LevelError> {
        if depth > Self::MAX.depth() {
            return Err(LevelError::OutOfRange(depth));
        }
        Ok(Self(depth as u8))
    }

    /// Recursion depth for the geometry generator.
    pub const fn depth(self) -> u32 {
        self.0 as u32
    }

    /// One level finer, saturating at [`Level::MAX`].
    pub fn increased(self) -> Self {
        Self(self.0.saturating_add(1).min(Self::MAX.0))
    }

    /// One level coarser, saturating at [`Level::MIN`].
    pub fn decreased(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::MIN.0))
    }

    /// Every valid level, coarsest first.
    pub fn all() -> impl Iterator<Item = Level> {
        (Self::MIN.0..=Self::MAX.0).map(Level)
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl TryFrom<u32> for Level {
    type Error = LevelError;

    fn try_from(depth: u32) -> Result<Self, Self::Error> {
        Self::new(depth)
    }
}

impl From<Level> for u32 {
    fn from(level: Level) -> u32 {
        level.depth()
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The viewer's interactive state.
///
/// Owned by the frame loop and passed by reference to the event handler and
/// the renderer. Nothing here is persisted; every run starts from
/// [`ViewState::default`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "ViewStateFields")]
pub struct ViewState {
    /// Rotation about the vertical axis, degrees. Unbounded.
    yaw: f32,
    /// Rotation about the horizontal axis, degrees.
    pitch: f32,
    level: Level,
}

/// Unchecked wire form; deserialization goes through [`ViewState::new`].
#[derive(Deserialize)]
struct ViewStateFields {
    yaw: f32,
    pitch: f32,
    level: Level,
}

impl From<ViewStateFields> for ViewState {
    fn from(fields: ViewStateFields) -> Self {
        Self::new(fields.yaw, fields.pitch, fields.level)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            yaw: INITIAL_YAW,
            pitch: 0.0,
            level: Level::INITIAL,
        }
    }
}

impl ViewState {
    /// Build a state from explicit values. Pitch is clamped to its limits;
    /// a non-finite pitch or yaw falls back to the startup value.
    pub fn new(yaw: f32, pitch: f32, level: Level) -> Self {
        Self {
            yaw: if yaw.is_finite() { yaw } else { INITIAL_YAW },
            pitch: if pitch.is_finite() {
                pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT)
            } else {
                0.0
            },
            level,
        }
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Raise the subdivision level by one, clamped at [`Level::MAX`].
    pub fn increase_level(&mut self) -> Level {
        let next = self.level.increased();
        if next != self.level {
            tracing::debug!(from = %self.level, to = %next, "subdivision level increased");
        }
        self.level = next;
        next
    }

    /// Lower the subdivision level by one, clamped at [`Level::MIN`].
    pub fn decrease_level(&mut self) -> Level {
        let next = self.level.decreased();
        if next != self.level {
            tracing::debug!(from = %self.level, to = %next, "subdivision level decreased");
        }
        self.level = next;
        next
    }

    /// Add a vertical pointer delta to pitch, then clamp. Non-finite deltas
    /// are ignored, since `clamp` would let NaN through.
    pub fn apply_pitch_delta(&mut self, dy: f32) {
        if !dy.is_finite() {
            tracing::debug!(dy, "ignoring non-finite pitch delta");
            return;
        }
        self.pitch = (self.pitch + dy).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Auto-rotation step taken once per rendered frame.
    pub fn advance_yaw(&mut self) {
        self.yaw += YAW_STEP;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_matches_startup_values() {
        let state = ViewState::default();
        assert_eq!(state.yaw(), 45.0);
        assert_eq!(state.pitch(), 0.0);
        assert_eq!(state.level(), Level::new(2).unwrap());
    }

    #[test]
    fn level_rejects_out_of_range() {
        assert!(Level::new(5).is_ok());
        assert_eq!(Level::new(6), Err(LevelError::OutOfRange(6)));
        assert_eq!(Level::try_from(0).unwrap(), Level::MIN);
    }

    #[test]
    fn level_error_mentions_bounds() {
        let msg = LevelError::OutOfRange(9).to_string();
        assert!(msg.contains('9'));
        assert!(msg.contains("0..=5"));
    }

    #[test]
    fn ten_increases_from_two_clamp_at_five() {
        let mut state = ViewState::default();
        for _ in 0..10 {
            state.increase_level();
        }
        assert_eq!(state.level().depth(), 5);
    }

    #[test]
    fn decrease_clamps_at_zero() {
        let mut state = ViewState::new(0.0, 0.0, Level::MIN);
        assert_eq!(state.decrease_level(), Level::MIN);
        assert_eq!(state.level().depth(), 0);
    }

    #[test]
    fn level_stays_bounded_under_mixed_sequences() {
        let mut state = ViewState::default();
        // Deterministic pseudo-random walk over increase/decrease.
        let mut x: u32 = 12345;
        for _ in 0..1000 {
            x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            if (x >> 16) & 1 == 0 {
                state.increase_level();
            } else {
                state.decrease_level();
            }
            assert!(state.level() >= Level::MIN && state.level() <= Level::MAX);
        }
    }

    #[test]
    fn large_upward_motion_clamps_pitch() {
        let mut state = ViewState::default();
        state.apply_pitch_delta(-200.0);
        assert_eq!(state.pitch(), -70.0);
        state.apply_pitch_delta(500.0);
        assert_eq!(state.pitch(), 70.0);
    }

    #[test]
    fn pitch_stays_bounded_under_motion() {
        let mut state = ViewState::default();
        for dy in [30.0, 30.0, 30.0, -5.0, -100.0, -100.0, 12.5, 0.0] {
            state.apply_pitch_delta(dy);
            assert!((-PITCH_LIMIT..=PITCH_LIMIT).contains(&state.pitch()));
        }
    }

    #[test]
    fn non_finite_motion_leaves_pitch_alone() {
        let mut state = ViewState::default();
        state.apply_pitch_delta(20.0);
        for dy in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            state.apply_pitch_delta(dy);
            assert_eq!(state.pitch(), 20.0);
        }
        state.apply_pitch_delta("nan".parse().unwrap());
        assert!((-PITCH_LIMIT..=PITCH_LIMIT).contains(&state.pitch()));
    }

    #[test]
    fn new_clamps_pitch() {
        let state = ViewState::new(0.0, 90.0, Level::MIN);
        assert_eq!(state.pitch(), PITCH_LIMIT);
        let state = ViewState::new(f32::NAN, f32::NAN, Level::MIN);
        assert_eq!(state.pitch(), 0.0);
        assert_eq!(state.yaw(), INITIAL_YAW);
    }

    #[test]
    fn deserialized_pitch_is_clamped() {
        let state: ViewState =
            serde_json::from_str(r#"{"yaw":0.0,"pitch":500.0,"level":2}"#).unwrap();
        assert_eq!(state.pitch(), PITCH_LIMIT);
        let state: ViewState =
            serde_json::from_str(r#"{"yaw":10.0,"pitch":-90.0,"level":4}"#).unwrap();
        assert_eq!(state.pitch(), -PITCH_LIMIT);
        assert_eq!(state.yaw(), 10.0);
        assert!(
            serde_json::from_str::<ViewState>(r#"{"yaw":0.0,"pitch":0.0,"level":9}"#).is_err()
        );
    }

    #[test]
    fn yaw_accumulates_without_wrapping() {
        let mut state = ViewState::new(359.99, 0.0, Level::MIN);
        state.advance_yaw();
        assert!(state.yaw() > 360.0);

        let mut state = ViewState::default();
        let start = state.yaw();
        for _ in 0..100 {
            state.advance_yaw();
        }
        assert!((state.yaw() - (start + 100.0 * YAW_STEP)).abs() < 1e-3);
    }

    #[test]
    fn level_iterates_all_values() {
        let depths: Vec<u32> = Level::all().map(Level::depth).collect();
        assert_eq!(depths, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn level_serializes_as_integer() {
        let state = ViewState::default();
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"level\":2"));
        let back: ViewState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
        assert!(serde_json::from_str::<Level>("7").is_err());
    }
}
