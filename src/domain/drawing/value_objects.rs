use crate::domain::market_data::{Price, Timestamp};
use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - one click or hover sample in domain coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub time: Timestamp,
    pub value: Price,
}

impl Point {
    pub fn new(time: Timestamp, value: Price) -> Self {
        Self { time, value }
    }
}

/// Value Object - the active annotation tool.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay, EnumIter, EnumString, AsRefStr,
)]
pub enum ToolMode {
    #[default]
    #[strum(serialize = "idle")]
    Idle,
    #[strum(serialize = "trendline")]
    Trendline,
    #[strum(serialize = "horizontal")]
    Horizontal,
    #[strum(serialize = "sixpoint")]
    SixPoint,
}

impl ToolMode {
    /// Clicks required before the tool finalizes into a drawing.
    /// `None` while no tool is armed.
    pub fn threshold(&self) -> Option<usize> {
        match self {
            ToolMode::Idle => None,
            ToolMode::Horizontal => Some(1),
            ToolMode::Trendline => Some(2),
            ToolMode::SixPoint => Some(6),
        }
    }
}

/// Value Object - six-point pattern label, assigned in click order.
/// Label order is a wave count and is independent of temporal order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum PatternLabel {
    A,
    B,
    C,
    D,
    E,
    X,
}

impl PatternLabel {
    pub const COUNT: usize = 6;

    /// Label for the nth accepted click (0-based).
    pub fn from_click_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(PatternLabel::A),
            1 => Some(PatternLabel::B),
            2 => Some(PatternLabel::C),
            3 => Some(PatternLabel::D),
            4 => Some(PatternLabel::E),
            5 => Some(PatternLabel::X),
            _ => None,
        }
    }
}

/// Value Object - stable identifier assigned to a drawing at finalize time.
/// Render bookkeeping keys off this id, never off array positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, From, Into, Display)]
#[display(fmt = "drawing#{}", _0)]
pub struct DrawingId(u64);

impl DrawingId {
    pub fn value(&self) -> u64 {
        self.0
    }
}
