use crate::geometry::Surface;
use crate::scene::{LineCap, LinearGradient, Scene, Shape};
use iced::{Point, Size};
use pulse_core::ThemeMode;
use pulse_theme::Palette;
use std::f32::consts::PI;

/// Arc radius as a fraction of the surface's shorter side.
const RADIUS_RATIO: f32 = 0.38;
const ARC_WIDTH: f32 = 14.0;
const NEEDLE_WIDTH: f32 = 3.0;
/// How far the needle tip stays inside the arc.
const NEEDLE_INSET: f32 = 8.0;
const HUB_RADIUS: f32 = 5.0;
/// The gauge backing store never drops below this many device pixels.
pub const MIN_DEVICE_SIDE: f32 = 200.0;

/// Clamp a reading to the gauge range `[0, 100]`.  NaN reads as 0.
pub fn clamp_value(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Semicircular gauge: background track, gradient arc, needle and hub.
///
/// The arc starts at 180° (left) and sweeps clockwise over the top by
/// `value / 100 × 180°`.
#[derive(Debug, Clone)]
pub struct GaugeRenderer {
    surface: Surface,
    value:   f64,
    scene:   Scene,
}

impl GaugeRenderer {
    pub fn new(layout: Size, scale_factor: f32) -> Self {
        let surface = Surface::new(layout, scale_factor).with_min_device_side(MIN_DEVICE_SIDE);
        Self {
            scene: Scene::new(surface.draw_size(), layout),
            surface,
            value: 0.0,
        }
    }

    /// Clamp and store `value`, then redraw immediately.
    pub fn set_value(&mut self, value: f64, mode: ThemeMode) {
        self.value = clamp_value(value);
        self.draw(mode);
    }

    pub fn resize(&mut self, layout: Size, scale_factor: f32, mode: ThemeMode) {
        if self.surface.resize(layout, scale_factor) {
            self.draw(mode);
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Angular extent of the active arc, in radians.
    pub fn sweep(&self) -> f32 {
        PI * (self.value / 100.0) as f32
    }

    /// Needle direction, in radians (π = pointing left).
    pub fn needle_angle(&self) -> f32 {
        PI + self.sweep()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn draw(&mut self, mode: ThemeMode) {
        let palette = Palette::for_mode(mode);
        let size = self.surface.draw_size();
        let mut scene = Scene::new(size, self.surface.layout());

        let center = Point::new(size.width / 2.0, size.height / 2.0);
        let radius = size.width.min(size.height) * RADIUS_RATIO;

        scene.stroke(
            Shape::Arc {
                center,
                radius,
                start_angle: PI,
                end_angle: 2.0 * PI,
            },
            palette.gauge_track,
            ARC_WIDTH,
            LineCap::Round,
        );

        let ramp = LinearGradient {
            start: Point::new(center.x - radius, center.y),
            end:   Point::new(center.x + radius, center.y),
            stops: palette.gauge_ramp.clone(),
        };
        scene.stroke(
            Shape::Arc {
                center,
                radius,
                start_angle: PI,
                end_angle: self.needle_angle(),
            },
            ramp,
            ARC_WIDTH,
            LineCap::Round,
        );

        let angle = self.needle_angle();
        let tip = Point::new(
            center.x + angle.cos() * (radius - NEEDLE_INSET),
            center.y + angle.sin() * (radius - NEEDLE_INSET),
        );
        scene.stroke(
            Shape::Line { from: center, to: tip },
            palette.needle,
            NEEDLE_WIDTH,
            LineCap::Round,
        );
        scene.fill(
            Shape::Circle {
                center,
                radius: HUB_RADIUS,
            },
            palette.needle,
        );

        self.scene = scene;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Command, Paint};
    use pulse_theme::Color;

    fn gauge() -> GaugeRenderer {
        GaugeRenderer::new(Size::new(240.0, 240.0), 1.0)
    }

    fn needle_tip(g: &GaugeRenderer) -> Point {
        g.scene()
            .commands()
            .iter()
            .find_map(|c| match c.shape() {
                Shape::Line { to, .. } => Some(*to),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn out_of_range_values_clamp() {
        let mut over = gauge();
        let mut full = gauge();
        over.set_value(150.0, ThemeMode::Light);
        full.set_value(100.0, ThemeMode::Light);
        assert_eq!(over.value(), 100.0);
        assert_eq!(over.scene(), full.scene());

        let mut under = gauge();
        let mut empty = gauge();
        under.set_value(-5.0, ThemeMode::Light);
        empty.set_value(0.0, ThemeMode::Light);
        assert_eq!(under.scene(), empty.scene());
    }

    #[test]
    fn clamp_is_idempotent() {
        for v in [-1e9, -5.0, 0.0, 42.5, 100.0, 150.0, f64::INFINITY, f64::NAN] {
            assert_eq!(clamp_value(clamp_value(v)), clamp_value(v));
        }
    }

    #[test]
    fn half_value_points_straight_up() {
        let mut g = gauge();
        g.set_value(50.0, ThemeMode::Dark);
        let tip = needle_tip(&g);
        let radius = 240.0 * RADIUS_RATIO;
        assert!((tip.x - 120.0).abs() < 1e-3);
        assert!((tip.y - (120.0 - (radius - NEEDLE_INSET))).abs() < 1e-3);
    }

    #[test]
    fn zero_points_left_and_full_points_right() {
        let mut g = gauge();
        g.set_value(0.0, ThemeMode::Light);
        assert!(needle_tip(&g).x < 120.0);
        g.set_value(100.0, ThemeMode::Light);
        assert!(needle_tip(&g).x > 120.0);
    }

    #[test]
    fn draws_track_arc_needle_hub_in_order() {
        let mut g = gauge();
        g.set_value(30.0, ThemeMode::Light);
        let cmds = g.scene().commands();
        assert_eq!(cmds.len(), 4);
        assert!(matches!(cmds[0].shape(), Shape::Arc { end_angle, .. } if *end_angle == 2.0 * PI));
        assert!(matches!(cmds[1], Command::Stroke { paint: Paint::Linear(_), .. }));
        assert!(matches!(cmds[2].shape(), Shape::Line { .. }));
        assert!(matches!(cmds[3], Command::Fill { shape: Shape::Circle { .. }, .. }));
    }

    #[test]
    fn colors_depend_only_on_theme() {
        let mut light = gauge();
        let mut dark = gauge();
        light.set_value(30.0, ThemeMode::Light);
        dark.set_value(30.0, ThemeMode::Dark);
        let needle = |g: &GaugeRenderer| match &g.scene().commands()[3] {
            Command::Fill { paint: Paint::Solid(c), .. } => *c,
            other => panic!("unexpected {other:?}"),
        };
        assert_eq!(needle(&light), Color::BLACK);
        assert_eq!(needle(&dark), Color::WHITE);
    }

    #[test]
    fn small_surface_is_drawn_at_minimum_size() {
        let g = GaugeRenderer::new(Size::new(50.0, 50.0), 1.0);
        assert_eq!(g.scene().size, Size::new(200.0, 200.0));
    }

    #[test]
    fn low_density_keeps_gauge_inside_layout() {
        let mut g = GaugeRenderer::new(Size::new(240.0, 240.0), 0.5);
        g.set_value(50.0, ThemeMode::Light);
        assert_eq!(g.scene().size, Size::new(240.0, 240.0));
        assert_eq!(g.surface.device_size(), Size::new(MIN_DEVICE_SIDE, MIN_DEVICE_SIDE));

        for command in g.scene().commands() {
            if let Shape::Arc { center, radius, .. } = command.shape() {
                assert!(center.x - radius >= 0.0 && center.x + radius <= 240.0);
                assert!(center.y - radius >= 0.0);
            }
        }
        let tip = needle_tip(&g);
        assert!((0.0..=240.0).contains(&tip.x) && (0.0..=240.0).contains(&tip.y));
    }
}
