use crate::level::Level;

/// Horizontal position in viewport units.
pub type Time = i64;

pub const SLOT_WIDTH: Time = 20;
pub const HALF_SLOT: Time = SLOT_WIDTH / 2;
pub const VIEWPORT_WIDTH: Time = 220;
pub const VIEWPORT_HEIGHT: Time = 50;

/// A constant-level run over `[start_time, end_time)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub start_time: Time,
    pub start_level: Level,
    pub end_time: Time,
    pub end_level: Level,
}

impl Segment {
    pub fn flat(start_time: Time, end_time: Time, level: Level) -> Self {
        Self {
            start_time,
            start_level: level,
            end_time,
            end_level: level,
        }
    }

    pub fn slot(slot: usize, level: Level) -> Self {
        let start_time = slot_start(slot);
        Self::flat(start_time, start_time.saturating_add(SLOT_WIDTH), level)
    }

    /// Both halves of one slot, split at the mid-bit point.
    pub fn halves(slot: usize, first: Level, second: Level) -> [Self; 2] {
        let start_time = slot_start(slot);
        let middle = start_time.saturating_add(HALF_SLOT);
        [
            Self::flat(start_time, middle, first),
            Self::flat(middle, middle.saturating_add(HALF_SLOT), second),
        ]
    }

    pub fn level(&self) -> Level {
        self.start_level
    }
}

/// Start time of the `slot`-th bit, saturating at `Time::MAX`.
pub fn slot_start(slot: usize) -> Time {
    Time::try_from(slot)
        .unwrap_or(Time::MAX)
        .saturating_mul(SLOT_WIDTH)
}

pub fn is_gapless(segments: &[Segment]) -> bool {
    segments
        .windows(2)
        .all(|pair| pair[0].end_time == pair[1].start_time)
}
