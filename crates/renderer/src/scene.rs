//! Backend-independent display list.
//!
//! Renderers produce a [`Scene`]; the canvas adapter replays it onto an Iced
//! frame.  Keeping the draw calls as data makes every renderer testable
//! without a GPU.

use iced::{Point, Size};
use pulse_theme::{Color, ColorStop};

/// Linear gradient between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Point,
    pub end:   Point,
    pub stops: Vec<ColorStop>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    Linear(LinearGradient),
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

impl From<LinearGradient> for Paint {
    fn from(gradient: LinearGradient) -> Self {
        Self::Linear(gradient)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line { from: Point, to: Point },
    /// Open path through the points in order.
    Polyline(Vec<Point>),
    /// Closed path through the points in order.
    Polygon(Vec<Point>),
    /// Circular arc; angles in radians, increasing clockwise on screen.
    Arc {
        center:      Point,
        radius:      f32,
        start_angle: f32,
        end_angle:   f32,
    },
    Circle { center: Point, radius: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Stroke {
        shape: Shape,
        paint: Paint,
        width: f32,
        cap:   LineCap,
    },
    Fill { shape: Shape, paint: Paint },
}

impl Command {
    pub fn shape(&self) -> &Shape {
        match self {
            Self::Stroke { shape, .. } | Self::Fill { shape, .. } => shape,
        }
    }
}

/// Everything drawn on one surface, in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Size of the drawing area.
    pub size:   Size,
    /// Layout size the scene was produced for.
    pub layout: Size,
    commands:   Vec<Command>,
}

impl Scene {
    /// An empty (cleared) scene.
    pub fn new(size: Size, layout: Size) -> Self {
        Self {
            size,
            layout,
            commands: Vec::new(),
        }
    }

    pub fn stroke(&mut self, shape: Shape, paint: impl Into<Paint>, width: f32, cap: LineCap) {
        self.commands.push(Command::Stroke {
            shape,
            paint: paint.into(),
            width,
            cap,
        });
    }

    pub fn fill(&mut self, shape: Shape, paint: impl Into<Paint>) {
        self.commands.push(Command::Fill {
            shape,
            paint: paint.into(),
        });
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Whether any coordinate in the scene is NaN or infinite.
    pub fn has_non_finite(&self) -> bool {
        let bad = |p: &Point| !p.x.is_finite() || !p.y.is_finite();
        self.commands.iter().any(|cmd| match cmd.shape() {
            Shape::Line { from, to } => bad(from) || bad(to),
            Shape::Polyline(points) | Shape::Polygon(points) => points.iter().any(bad),
            Shape::Arc { center, radius, start_angle, end_angle } => {
                bad(center)
                    || !radius.is_finite()
                    || !start_angle.is_finite()
                    || !end_angle.is_finite()
            }
            Shape::Circle { center, radius } => bad(center) || !radius.is_finite(),
        })
    }
}
