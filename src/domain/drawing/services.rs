use super::entities::{Drawing, LabeledPoint};
use super::value_objects::{PatternLabel, Point, ToolMode};
use crate::domain::logging::{LogComponent, get_logger};

/// Pure state-transition function for the tool mode machine.
///
/// `selected = None` is an explicit reset and always lands in `Idle`;
/// selecting the already-active tool toggles it off. Callers must clear the
/// point buffer and pending preview whenever the returned mode differs from
/// `current` - no transition may leave a stale partial buffer behind.
pub fn next_tool_mode(current: ToolMode, selected: Option<ToolMode>) -> ToolMode {
    match selected {
        None | Some(ToolMode::Idle) => ToolMode::Idle,
        Some(tool) if tool == current => ToolMode::Idle,
        Some(tool) => tool,
    }
}

/// What one click did to the in-progress annotation.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// No tool armed; the click is not drawing input.
    Ignored,
    /// The point was buffered; more clicks are needed.
    Buffered,
    /// Degenerate click (duplicate time), silently rejected.
    Rejected,
    /// The threshold was reached and a drawing was produced.
    Finalized(Drawing),
}

/// Transient ordered click buffer for the tool currently being built.
/// Cleared on finalize, cancel, reset, or mode switch.
#[derive(Debug, Clone, Default)]
pub struct PointBuffer {
    points: Vec<Point>,
}

impl PointBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// True while a preview is meaningful: something is buffered and the
    /// active tool still needs more clicks.
    pub fn awaiting_more(&self, tool: ToolMode) -> bool {
        match tool.threshold() {
            Some(threshold) => !self.points.is_empty() && self.points.len() < threshold,
            None => false,
        }
    }

    /// Fold one click into the buffer under the active tool's rules.
    pub fn push(&mut self, tool: ToolMode, point: Point) -> ClickOutcome {
        match tool {
            ToolMode::Idle => ClickOutcome::Ignored,
            ToolMode::Horizontal => {
                // Single click finalizes immediately; the buffer never grows.
                ClickOutcome::Finalized(Drawing::HorizontalLevel {
                    price: point.value,
                    anchor_time: point.time,
                })
            }
            ToolMode::Trendline => self.push_trendline(point),
            ToolMode::SixPoint => self.push_six_point(point),
        }
    }

    fn push_trendline(&mut self, point: Point) -> ClickOutcome {
        match self.points.first() {
            None => {
                self.points.push(point);
                ClickOutcome::Buffered
            }
            Some(first) if first.time == point.time => {
                // A zero-length segment is not a trendline.
                get_logger().debug(
                    LogComponent::Domain("Drawing"),
                    &format!("rejecting trendline click at duplicate time {}", point.time.value()),
                );
                ClickOutcome::Rejected
            }
            Some(first) => {
                let drawing = Drawing::Trendline { points: [*first, point] };
                self.points.clear();
                ClickOutcome::Finalized(drawing)
            }
        }
    }

    fn push_six_point(&mut self, point: Point) -> ClickOutcome {
        if self.points.iter().any(|p| p.time == point.time) {
            get_logger().debug(
                LogComponent::Domain("Drawing"),
                &format!("rejecting six-point click at duplicate time {}", point.time.value()),
            );
            return ClickOutcome::Rejected;
        }

        self.points.push(point);
        if self.points.len() < PatternLabel::COUNT {
            return ClickOutcome::Buffered;
        }

        // Labels track click order; stored points are re-sorted by time so
        // geometric order and wave-count order stay decoupled.
        let mut labeled: Vec<LabeledPoint> = self
            .points
            .iter()
            .enumerate()
            .filter_map(|(i, p)| {
                PatternLabel::from_click_index(i).map(|label| LabeledPoint { label, point: *p })
            })
            .collect();
        labeled.sort_by_key(|lp| lp.point.time);
        self.points.clear();
        ClickOutcome::Finalized(Drawing::SixPointPattern { points: labeled })
    }
}

/// Transient, non-persisted preview of the in-progress annotation.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewShape {
    /// Dashed segment from the buffered point to the hover point.
    Segment { from: Point, to: Point },
    /// Dashed polyline through the buffered points (plus the hover point when
    /// its time is fresh), with the label the next click would receive.
    Polyline { points: Vec<Point>, next_label: PatternLabel },
}

/// Compute the preview for the current hover sample, if one applies.
///
/// Returns `None` whenever no preview must be shown: idle tool, empty buffer,
/// threshold already reached, or a hover that would be degenerate.
pub fn preview_shape(tool: ToolMode, buffer: &PointBuffer, hover: Point) -> Option<PreviewShape> {
    if !buffer.awaiting_more(tool) {
        return None;
    }

    match tool {
        ToolMode::Trendline => {
            let first = *buffer.points().first()?;
            if first.time == hover.time {
                // Would be a zero-length segment; suppress entirely.
                return None;
            }
            Some(PreviewShape::Segment { from: first, to: hover })
        }
        ToolMode::SixPoint => {
            let mut points = buffer.points().to_vec();
            let fresh_hover = points.last().is_none_or(|last| last.time != hover.time);
            if fresh_hover {
                points.push(hover);
            }
            let next_label = PatternLabel::from_click_index(buffer.len())?;
            Some(PreviewShape::Polyline { points, next_label })
        }
        ToolMode::Idle | ToolMode::Horizontal => None,
    }
}
