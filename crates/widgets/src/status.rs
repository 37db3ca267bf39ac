use crate::stats::PLACEHOLDER;
use chrono::{DateTime, Local};
use iced::{
    widget::{container, row, text},
    Alignment, Element,
};
use pulse_core::{ConnectionStatus, Message};
use pulse_theme::Color;

/// Chip color for each connection state.
pub fn status_color(status: ConnectionStatus) -> Color {
    match status {
        ConnectionStatus::Online     => Color::from_rgb8(0x10, 0xb9, 0x81),
        ConnectionStatus::Offline    => Color::from_rgb8(0xef, 0x44, 0x44),
        ConnectionStatus::Stopped    => Color::from_rgb8(0xf5, 0x9e, 0x0b),
        ConnectionStatus::Connecting => Color::from_rgb8(0x94, 0xa3, 0xb8),
    }
}

/// `Last update: 14:02:33`, or a dash before the first payload.
pub fn last_update_text(at: Option<DateTime<Local>>) -> String {
    match at {
        Some(at) => format!("Last update: {}", at.format("%H:%M:%S")),
        None => format!("Last update: {PLACEHOLDER}"),
    }
}

/// Connection chip plus the time of the last accepted payload.
pub fn view<'a>(
    status: ConnectionStatus,
    last_update: Option<DateTime<Local>>,
    font_size: f32,
    muted: Color,
) -> Element<'a, Message> {
    let chip_color = status_color(status).to_iced();

    let chip = container(text(status.label()).size(font_size))
        .padding([2, 8])
        .style(move |_| container::Style {
            text_color: Some(chip_color),
            border: iced::Border {
                color:  chip_color,
                width:  1.0,
                radius: 8.0.into(),
            },
            ..container::Style::default()
        });

    row![
        chip,
        text(last_update_text(last_update))
            .size(font_size - 1.0)
            .color(muted.to_iced()),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn last_update_formats_clock_time() {
        let at = Local.with_ymd_and_hms(2024, 5, 1, 9, 3, 7).single();
        assert_eq!(last_update_text(at), "Last update: 09:03:07");
    }

    #[test]
    fn last_update_placeholder_before_data() {
        assert_eq!(last_update_text(None), "Last update: —");
    }

    #[test]
    fn offline_and_online_differ() {
        assert_ne!(
            status_color(ConnectionStatus::Online),
            status_color(ConnectionStatus::Offline)
        );
    }
}
