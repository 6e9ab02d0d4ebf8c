use crate::segment::Time;

/// Vertical position of a rail, in viewport units. Smaller is drawn higher.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(pub i32);

impl Level {
    pub fn y(&self) -> Time {
        Time::from(self.0)
    }
}

/// A two-rail pair for schemes that only ever swap between two levels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rails {
    pub high: Level,
    pub low: Level,
}

impl Rails {
    pub fn toggle(&self, level: Level) -> Level {
        if level == self.low {
            self.high
        } else {
            self.low
        }
    }
}

pub mod nrz {
    use super::{Level, Rails};

    pub const HIGH: Level = Level(10);
    pub const LOW: Level = Level(40);
    pub const RAILS: Rails = Rails {
        high: HIGH,
        low: LOW,
    };
}

pub mod ternary {
    use super::Level;

    pub const POSITIVE: Level = Level(10);
    pub const ZERO: Level = Level(25);
    pub const NEGATIVE: Level = Level(40);

    pub fn alternate(mark: Level) -> Level {
        if mark == POSITIVE {
            NEGATIVE
        } else {
            POSITIVE
        }
    }
}

pub mod manchester {
    use super::{Level, Rails};

    pub const LOW: Level = Level(10);
    pub const HIGH: Level = Level(40);
    pub const RAILS: Rails = Rails {
        high: HIGH,
        low: LOW,
    };
}
