//! Replays a [`Scene`] onto an Iced canvas and turns pointer/layout events on
//! that canvas into application messages.

use crate::scene::{Command, LineCap, Paint, Scene, Shape};
use iced::widget::canvas::{self, gradient, Event, Frame, Geometry, Path, Stroke};
use iced::{mouse, Element, Length, Point, Radians, Rectangle, Renderer, Size, Theme};
use pulse_core::{Message, SurfaceId};

/// Layout sizes closer than this are treated as unchanged.
const RESIZE_EPSILON: f32 = 0.5;

/// Canvas program drawing one surface's scene.
#[derive(Debug)]
pub struct SceneCanvas<'a> {
    scene:       &'a Scene,
    surface:     SurfaceId,
    track_hover: bool,
}

impl<'a> SceneCanvas<'a> {
    pub fn new(scene: &'a Scene, surface: SurfaceId) -> Self {
        Self {
            scene,
            surface,
            track_hover: false,
        }
    }

    /// Emit [`Message::ChartHovered`] / [`Message::ChartLeft`] for the pointer.
    #[must_use]
    pub fn track_hover(mut self) -> Self {
        self.track_hover = true;
        self
    }

    pub fn view(self, width: impl Into<Length>, height: impl Into<Length>) -> Element<'a, Message> {
        canvas::Canvas::new(self).width(width).height(height).into()
    }
}

/// Per-canvas interaction state kept by Iced.
#[derive(Debug, Default)]
pub struct PointerState {
    inside: bool,
}

impl canvas::Program<Message> for SceneCanvas<'_> {
    type State = PointerState;

    fn update(
        &self,
        state: &mut PointerState,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        let size = bounds.size();
        if layout_changed(self.scene.layout, size) {
            return Some(canvas::Action::publish(Message::SurfaceResized(
                self.surface,
                size.width,
                size.height,
            )));
        }

        if !self.track_hover {
            return None;
        }

        match event {
            Event::Mouse(mouse::Event::CursorMoved { .. }) => match cursor.position_in(bounds) {
                Some(position) => {
                    state.inside = true;
                    Some(canvas::Action::publish(Message::ChartHovered {
                        x: position.x,
                        y: position.y,
                    }))
                }
                None if state.inside => {
                    state.inside = false;
                    Some(canvas::Action::publish(Message::ChartLeft))
                }
                None => None,
            },
            Event::Mouse(mouse::Event::CursorLeft) if state.inside => {
                state.inside = false;
                Some(canvas::Action::publish(Message::ChartLeft))
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &PointerState,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        replay(&mut frame, self.scene);
        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &PointerState,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.track_hover && cursor.is_over(bounds) {
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::default()
        }
    }
}

fn layout_changed(drawn: Size, bounds: Size) -> bool {
    (drawn.width - bounds.width).abs() > RESIZE_EPSILON
        || (drawn.height - bounds.height).abs() > RESIZE_EPSILON
}

/// Paint every command of `scene` onto `frame`, in order.
pub fn replay(frame: &mut Frame, scene: &Scene) {
    for command in scene.commands() {
        match command {
            Command::Stroke { shape, paint, width, cap } => {
                let stroke = Stroke {
                    style: style(paint),
                    width: *width,
                    line_cap: match cap {
                        LineCap::Butt  => canvas::LineCap::Butt,
                        LineCap::Round => canvas::LineCap::Round,
                    },
                    ..Stroke::default()
                };
                frame.stroke(&path(shape), stroke);
            }
            Command::Fill { shape, paint } => {
                let fill = canvas::Fill {
                    style: style(paint),
                    ..canvas::Fill::default()
                };
                frame.fill(&path(shape), fill);
            }
        }
    }
}

fn style(paint: &Paint) -> canvas::Style {
    match paint {
        Paint::Solid(color) => canvas::Style::Solid(color.to_iced()),
        Paint::Linear(linear) => {
            let gradient = linear.stops.iter().fold(
                gradient::Linear::new(linear.start, linear.end),
                |g, stop| g.add_stop(stop.offset, stop.color.to_iced()),
            );
            canvas::Style::Gradient(canvas::Gradient::Linear(gradient))
        }
    }
}

fn path(shape: &Shape) -> Path {
    match shape {
        Shape::Line { from, to } => Path::line(*from, *to),
        Shape::Polyline(points) => polyline(points, false),
        Shape::Polygon(points) => polyline(points, true),
        Shape::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        } => Path::new(|b| {
            b.arc(canvas::path::Arc {
                center: *center,
                radius: *radius,
                start_angle: Radians(*start_angle),
                end_angle: Radians(*end_angle),
            });
        }),
        Shape::Circle { center, radius } => Path::circle(*center, *radius),
    }
}

fn polyline(points: &[Point], close: bool) -> Path {
    Path::new(|b| {
        let mut points = points.iter();
        if let Some(first) = points.next() {
            b.move_to(*first);
            for p in points {
                b.line_to(*p);
            }
            if close {
                b.close();
            }
        }
    })
}
