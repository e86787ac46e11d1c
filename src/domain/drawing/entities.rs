use super::value_objects::{DrawingId, PatternLabel, Point, ToolMode};
use crate::domain::market_data::{Price, Timestamp};
use serde::{Deserialize, Serialize};

/// Horizontal levels are rendered as a ray spanning a fixed symmetric window
/// around the anchor, since no infinite-line primitive exists.
pub const TEN_YEARS_SECS: i64 = 10 * 365 * 24 * 60 * 60;

/// A pattern point together with the label it received at click time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabeledPoint {
    pub label: PatternLabel,
    pub point: Point,
}

/// Domain entity - one finalized annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Drawing {
    /// Exactly two points with distinct times.
    Trendline { points: [Point; 2] },
    /// A price level anchored at the click time.
    HorizontalLevel { price: Price, anchor_time: Timestamp },
    /// Six points stored sorted by time ascending; labels keep click order.
    SixPointPattern { points: Vec<LabeledPoint> },
}

impl Drawing {
    pub fn tool(&self) -> ToolMode {
        match self {
            Drawing::Trendline { .. } => ToolMode::Trendline,
            Drawing::HorizontalLevel { .. } => ToolMode::Horizontal,
            Drawing::SixPointPattern { .. } => ToolMode::SixPoint,
        }
    }

    /// The time window a horizontal level's ray covers.
    pub fn horizontal_span(anchor_time: Timestamp) -> (Timestamp, Timestamp) {
        (
            Timestamp::from_secs(anchor_time.value() - TEN_YEARS_SECS),
            Timestamp::from_secs(anchor_time.value() + TEN_YEARS_SECS),
        )
    }
}

/// Domain entity - append-only store of finalized drawings.
///
/// Insertion order is render order. Entries are immutable once appended and
/// each carries the stable id assigned here at finalize time.
#[derive(Debug, Clone, Default)]
pub struct DrawingSet {
    entries: Vec<(DrawingId, Drawing)>,
    next_id: u64,
}

impl DrawingSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, drawing: Drawing) -> DrawingId {
        let id = DrawingId::from(self.next_id);
        self.next_id += 1;
        self.entries.push((id, drawing));
        id
    }

    pub fn iter(&self) -> impl Iterator<Item = (DrawingId, &Drawing)> {
        self.entries.iter().map(|(id, d)| (*id, d))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
