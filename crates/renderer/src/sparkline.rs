use crate::geometry::{index_to_x, Padding, Surface};
use crate::scene::{LineCap, Scene, Shape};
use iced::{Point, Size};
use pulse_core::ThemeMode;
use pulse_theme::Palette;

/// Inset on every side so the line and marker are never clipped.
const INSET: f32 = 3.0;
const LINE_WIDTH: f32 = 2.0;
const MARKER_RADIUS: f32 = 3.0;
/// Lowest vertical ceiling; keeps near-zero series from filling the height.
const CEILING_FLOOR: f64 = 10.0;

/// Vertical ceiling for a series: `max(10, max(samples))`.
pub fn ceiling(samples: &[f64]) -> f64 {
    samples.iter().copied().fold(CEILING_FLOOR, f64::max)
}

/// Compact history line with a marker on the newest sample.
#[derive(Debug, Clone)]
pub struct SparklineRenderer {
    surface: Surface,
    scene:   Scene,
}

impl SparklineRenderer {
    pub fn new(layout: Size, scale_factor: f32) -> Self {
        let surface = Surface::new(layout, scale_factor);
        Self {
            scene: Scene::new(surface.draw_size(), layout),
            surface,
        }
    }

    /// Resize and redraw from `samples`, the current series snapshot.
    pub fn resize(&mut self, layout: Size, scale_factor: f32, samples: &[f64], mode: ThemeMode) {
        if self.surface.resize(layout, scale_factor) {
            self.draw(samples, mode);
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn draw(&mut self, samples: &[f64], mode: ThemeMode) {
        let size = self.surface.draw_size();
        let mut scene = Scene::new(size, self.surface.layout());

        if samples.is_empty() {
            self.scene = scene;
            return;
        }

        let palette = Palette::for_mode(mode);
        let top = ceiling(samples);
        let len = samples.len();
        let point = |i: usize, v: f64| {
            Point::new(
                index_to_x(i, len, size.width, Padding::uniform(INSET)),
                size.height - INSET - (v / top) as f32 * (size.height - 2.0 * INSET),
            )
        };

        if len > 1 {
            let line = samples.iter().enumerate().map(|(i, &v)| point(i, v)).collect();
            scene.stroke(Shape::Polyline(line), palette.sparkline, LINE_WIDTH, LineCap::Butt);
        }

        let newest = point(len - 1, samples[len - 1]);
        scene.fill(
            Shape::Circle {
                center: newest,
                radius: MARKER_RADIUS,
            },
            palette.marker,
        );

        self.scene = scene;
    }
}
