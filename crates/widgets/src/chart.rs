use crate::tooltip::{estimate_size, place};
use iced::{
    widget::{container, stack, text},
    Element, Length, Padding, Point,
};
use pulse_core::{Message, SurfaceId};
use pulse_renderer::{canvas::SceneCanvas, Hover, Scene};
use pulse_theme::Theme;

/// Badge text for the latest throughput sample.
pub fn badge_text(latest: Option<f64>) -> String {
    match latest {
        Some(v) => format!("TP: {v}"),
        None => "TP: --".to_string(),
    }
}

/// The throughput chart with its value badge and hover tooltip.
#[derive(Debug)]
pub struct ChartPanel<'a> {
    pub scene:  &'a Scene,
    pub latest: Option<f64>,
    /// Hovered sample and the pointer position it was resolved from.
    pub hover:  Option<(Hover, Point)>,
    pub height: f32,
}

impl<'a> ChartPanel<'a> {
    pub fn view(self, theme: &Theme) -> Element<'a, Message> {
        let chart = SceneCanvas::new(self.scene, SurfaceId::Chart)
            .track_hover()
            .view(Length::Fill, self.height);

        let badge = container(
            container(text(badge_text(self.latest)).size(theme.font_size))
                .padding([6, 10])
                .style(container::rounded_box),
        )
        .align_right(Length::Fill)
        .padding(Padding {
            top:    8.0,
            right:  12.0,
            bottom: 0.0,
            left:   0.0,
        });

        let mut layers = stack![chart, badge];

        if let Some((hover, pointer)) = self.hover {
            let label = hover.tooltip();
            let tip_font = theme.font_size - 1.0;
            let at = place(pointer, estimate_size(&label, tip_font), self.scene.layout);

            let tip = container(text(label).size(tip_font))
                .padding([6, 8])
                .style(container::rounded_box);

            // offset the box by padding so it floats at `at`
            layers = layers.push(
                container(tip)
                    .padding(Padding {
                        top:    at.y,
                        right:  0.0,
                        bottom: 0.0,
                        left:   at.x,
                    })
                    .width(Length::Fill)
                    .height(self.height),
            );
        }

        layers.width(Length::Fill).height(self.height).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_shows_dashes_before_data() {
        assert_eq!(badge_text(None), "TP: --");
        assert_eq!(badge_text(Some(12.5)), "TP: 12.5");
    }
}
