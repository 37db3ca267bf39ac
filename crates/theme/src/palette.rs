use crate::colors::Color;
use pulse_core::ThemeMode;

/// One stop of a linear gradient; `offset` runs from 0 to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color:  Color,
}

/// Drawing colours used by the gauge, sparkline and chart renderers.
///
/// A pure function of [`ThemeMode`]: light mode uses a warm three-stop ramp,
/// dark mode a cool two-stop ramp.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Gauge arc gradient, left to right.
    pub gauge_ramp:  Vec<ColorStop>,
    /// Background track behind the gauge arc.
    pub gauge_track: Color,
    /// Needle and hub.
    pub needle:      Color,
    pub sparkline:   Color,
    /// Chart line gradient, top to bottom.
    pub chart_ramp:  Vec<ColorStop>,
    /// Area between the chart line and the baseline.
    pub chart_fill:  Color,
    pub axis:        Color,
    pub grid:        Color,
    /// Vertical guide through the hovered sample.
    pub guide:       Color,
    /// Latest-sample and hover markers.
    pub marker:      Color,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        let faint = |alpha| Color::WHITE.with_alpha(alpha);

        match mode {
            ThemeMode::Light => Self {
                gauge_ramp: ramp(&[
                    Color::from_rgb8(0x10, 0xb9, 0x81),
                    Color::from_rgb8(0xf5, 0x9e, 0x0b),
                    Color::from_rgb8(0xfb, 0x92, 0x3c),
                ]),
                gauge_track: faint(0.12),
                needle:      Color::BLACK,
                sparkline:   Color::from_rgb8(0x10, 0xb9, 0x81),
                chart_ramp: ramp(&[
                    Color::from_rgb8(16, 185, 129).with_alpha(0.95),
                    Color::from_rgb8(251, 146, 60).with_alpha(0.95),
                    Color::from_rgb8(245, 158, 11).with_alpha(0.95),
                ]),
                chart_fill: Color::from_rgb8(0x10, 0xb9, 0x81).with_alpha(0.08),
                axis:       faint(0.12),
                grid:       faint(0.06),
                guide:      faint(0.2),
                marker:     Color::WHITE,
            },
            ThemeMode::Dark => Self {
                gauge_ramp: ramp(&[
                    Color::from_rgb8(0x06, 0xb6, 0xd4),
                    Color::from_rgb8(0x34, 0xd3, 0x99),
                ]),
                gauge_track: faint(0.12),
                needle:      Color::WHITE,
                sparkline:   Color::from_rgb8(0x60, 0xa5, 0xfa),
                chart_ramp: ramp(&[
                    Color::from_rgb8(0x22, 0xd3, 0xee),
                    Color::from_rgb8(0x4c, 0x8b, 0xf5),
                ]),
                chart_fill: Color::from_rgb8(0x22, 0xd3, 0xee).with_alpha(0.08),
                axis:       faint(0.12),
                grid:       faint(0.06),
                guide:      faint(0.2),
                marker:     Color::WHITE,
            },
        }
    }
}

/// Spread colours evenly over `[0, 1]`.
fn ramp(colors: &[Color]) -> Vec<ColorStop> {
    let last = colors.len().saturating_sub(1).max(1) as f32;
    colors
        .iter()
        .enumerate()
        .map(|(i, &color)| ColorStop {
            offset: i as f32 / last,
            color,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_gauge_ramp_has_three_stops() {
        let p = Palette::for_mode(ThemeMode::Light);
        let offsets: Vec<f32> = p.gauge_ramp.iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 0.5, 1.0]);
        assert_eq!(p.needle, Color::BLACK);
    }

    #[test]
    fn dark_ramps_have_two_stops() {
        let p = Palette::for_mode(ThemeMode::Dark);
        assert_eq!(p.gauge_ramp.len(), 2);
        assert_eq!(p.chart_ramp.len(), 2);
        assert_eq!(p.needle, Color::WHITE);
    }

    #[test]
    fn palette_is_deterministic() {
        assert_eq!(
            Palette::for_mode(ThemeMode::Dark),
            Palette::for_mode(ThemeMode::Dark)
        );
    }
}
