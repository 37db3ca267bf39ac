use crate::stats::{gauge_tooltip, stat_labels};
use iced::{
    widget::{button, center, column, container, row, stack, text, tooltip},
    Alignment, Element, Size,
};
use pulse_core::{DisplayState, Message, PlaybackController, Stats, SurfaceId};
use pulse_renderer::{canvas::SceneCanvas, Scene};
use pulse_theme::Theme;

/// Layout size of the gauge surface.
pub const GAUGE_SIZE: Size = Size::new(240.0, 240.0);
/// Layout size of the sparkline under the gauge.
pub const SPARKLINE_SIZE: Size = Size::new(160.0, 40.0);

/// The CPU gauge with its center label, stats row, pause button and sparkline.
#[derive(Debug)]
pub struct GaugePanel<'a> {
    pub gauge:     &'a Scene,
    pub sparkline: &'a Scene,
    pub display:   &'a DisplayState,
    pub stats:     Option<Stats>,
    pub playback:  &'a PlaybackController,
}

impl<'a> GaugePanel<'a> {
    pub fn view(self, theme: &Theme) -> Element<'a, Message> {
        let gauge = SceneCanvas::new(self.gauge, SurfaceId::Gauge)
            .view(GAUGE_SIZE.width, GAUGE_SIZE.height);

        let label = center(text(self.display.label.clone()).size(theme.label_size))
            .width(GAUGE_SIZE.width)
            .height(GAUGE_SIZE.height);

        let tip_text = gauge_tooltip(&self.display.label, self.stats, self.playback.is_paused());
        let tip = container(text(tip_text).size(theme.font_size - 1.0))
            .padding([6, 8])
            .style(container::rounded_box);

        let dial = tooltip(stack![gauge, label], tip, tooltip::Position::FollowCursor);

        let [min, avg, max] = stat_labels(self.stats);
        let muted = theme.muted.to_iced();
        let stats_row = row![
            text(min).size(theme.font_size).color(muted),
            text(avg).size(theme.font_size).color(muted),
            text(max).size(theme.font_size).color(muted),
            button(text(self.playback.action_label()).size(theme.font_size))
                .on_press(Message::TogglePlayback)
                .padding([4, 10]),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        let sparkline = SceneCanvas::new(self.sparkline, SurfaceId::Sparkline)
            .view(SPARKLINE_SIZE.width, SPARKLINE_SIZE.height);

        column![dial, stats_row, sparkline]
            .spacing(10)
            .align_x(Alignment::Center)
            .into()
    }
}
