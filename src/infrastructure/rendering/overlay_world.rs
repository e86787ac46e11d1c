use crate::domain::drawing::{Drawing, DrawingId, DrawingSet, PatternLabel, Point, PreviewShape};
use crate::domain::logging::{LogComponent, get_logger};
use hecs::{Entity, World};
use std::collections::HashSet;

/// Stroke style of a line primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// ECS component - one rendered polyline (domain coordinates).
#[derive(Debug, Clone)]
pub struct LinePrimitive {
    pub points: Vec<Point>,
    pub style: LineStyle,
}

/// ECS component - one labeled point marker.
#[derive(Debug, Clone, Copy)]
pub struct MarkerPrimitive {
    pub point: Point,
    pub label: PatternLabel,
}

/// ECS component - links a primitive to the drawing that produced it.
#[derive(Debug, Clone, Copy)]
pub struct OwnerTag(pub DrawingId);

/// ECS component - marks the transient preview primitives.
#[derive(Debug, Clone, Copy)]
pub struct PreviewTag;

/// Overlay primitive store backed by a hecs world.
///
/// One entity per rendered primitive; the drawing's stable id ties its
/// primitives together so teardown can never orphan one. Finalized drawings
/// are rendered exactly once (append-only), previews are swapped wholesale.
pub struct OverlayWorld {
    pub world: World,
    rendered: HashSet<DrawingId>,
}

impl Default for OverlayWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayWorld {
    pub fn new() -> Self {
        Self { world: World::new(), rendered: HashSet::new() }
    }

    /// Create persistent primitives for every drawing not yet rendered.
    pub fn sync(&mut self, drawings: &DrawingSet) {
        for (id, drawing) in drawings.iter() {
            if self.rendered.contains(&id) {
                continue;
            }
            self.spawn_drawing(id, drawing);
            self.rendered.insert(id);
        }
    }

    fn spawn_drawing(&mut self, id: DrawingId, drawing: &Drawing) {
        match drawing {
            Drawing::Trendline { points } => {
                self.world.spawn((
                    LinePrimitive { points: points.to_vec(), style: LineStyle::Solid },
                    OwnerTag(id),
                ));
            }
            Drawing::HorizontalLevel { price, anchor_time } => {
                let (start, end) = Drawing::horizontal_span(*anchor_time);
                self.world.spawn((
                    LinePrimitive {
                        points: vec![Point::new(start, *price), Point::new(end, *price)],
                        style: LineStyle::Solid,
                    },
                    OwnerTag(id),
                ));
            }
            Drawing::SixPointPattern { points } => {
                self.world.spawn((
                    LinePrimitive {
                        points: points.iter().map(|lp| lp.point).collect(),
                        style: LineStyle::Solid,
                    },
                    OwnerTag(id),
                ));
                for lp in points {
                    self.world
                        .spawn((MarkerPrimitive { point: lp.point, label: lp.label }, OwnerTag(id)));
                }
            }
        }
        get_logger().debug(LogComponent::Infrastructure("Overlay"), &format!("rendered {id}"));
    }

    /// Replace the transient preview primitives with the given shape.
    /// `None` removes the preview without leaving any artifact behind.
    pub fn set_preview(&mut self, preview: Option<&PreviewShape>) {
        self.clear_preview();
        let Some(shape) = preview else {
            return;
        };

        match shape {
            PreviewShape::Segment { from, to } => {
                self.world.spawn((
                    LinePrimitive { points: vec![*from, *to], style: LineStyle::Dashed },
                    PreviewTag,
                ));
            }
            PreviewShape::Polyline { points, next_label } => {
                if let Some(tip) = points.last() {
                    self.world.spawn((
                        MarkerPrimitive { point: *tip, label: *next_label },
                        PreviewTag,
                    ));
                }
                if points.len() >= 2 {
                    self.world.spawn((
                        LinePrimitive { points: points.clone(), style: LineStyle::Dashed },
                        PreviewTag,
                    ));
                }
            }
        }
    }

    fn clear_preview(&mut self) {
        let stale: Vec<Entity> =
            self.world.query::<&PreviewTag>().iter().map(|(entity, _)| entity).collect();
        for entity in stale {
            let _ = self.world.despawn(entity);
        }
    }

    /// Tear down every primitive this component created, persistent and
    /// transient alike.
    pub fn clear_all(&mut self) {
        self.world.clear();
        self.rendered.clear();
    }

    pub fn primitive_count(&self) -> usize {
        self.world.len() as usize
    }

    pub fn line_count(&self) -> usize {
        self.world.query::<&LinePrimitive>().iter().count()
    }

    pub fn marker_count(&self) -> usize {
        self.world.query::<&MarkerPrimitive>().iter().count()
    }

    pub fn preview_count(&self) -> usize {
        self.world.query::<&PreviewTag>().iter().count()
    }
}
