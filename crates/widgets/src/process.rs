use iced::{
    widget::{column, container, row, text},
    Element, Length,
};
use pulse_core::{Message, ProcessInfo};
use pulse_theme::Color;

/// Shown for any missing field.
const MISSING: &str = "-";

const HEADERS: [&str; 4] = ["Name", "CPU %", "Memory", "Status"];
const WIDTHS: [u16; 4] = [4, 1, 2, 2];

pub fn format_bytes(bytes: u64) -> String {
    const GIB: u64 = 1 << 30;
    const MIB: u64 = 1 << 20;
    const KIB: u64 = 1 << 10;

    if bytes >= GIB {
        format!("{:.1} GiB", bytes as f64 / GIB as f64)
    } else if bytes >= MIB {
        format!("{:.1} MiB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1} KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{bytes} B")
    }
}

/// Table cells for one process, in column order.
pub fn row_cells(process: &ProcessInfo) -> [String; 4] {
    let name = process
        .name
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or(MISSING)
        .to_string();
    let cpu = process
        .cpu
        .map(|c| format!("{c:.1}"))
        .unwrap_or_else(|| MISSING.to_string());
    // zero memory is as good as unknown
    let mem = process
        .mem
        .filter(|&m| m > 0)
        .map(format_bytes)
        .unwrap_or_else(|| MISSING.to_string());
    let status = process
        .status
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(MISSING)
        .to_string();

    [name, cpu, mem, status]
}

fn table_row<'a>(cells: [String; 4], size: f32, color: Option<iced::Color>) -> Element<'a, Message> {
    let mut r = row![].spacing(8);
    for (cell, width) in cells.into_iter().zip(WIDTHS) {
        let mut t = text(cell).size(size);
        if let Some(color) = color {
            t = t.color(color);
        }
        r = r.push(container(t).width(Length::FillPortion(width)));
    }
    r.into()
}

/// The top processes reported with the last payload.
pub fn view<'a>(processes: &[ProcessInfo], font_size: f32, muted: Color) -> Element<'a, Message> {
    let header = table_row(
        HEADERS.map(str::to_string),
        font_size - 1.0,
        Some(muted.to_iced()),
    );

    let mut table = column![header].spacing(4);
    for process in processes {
        table = table.push(table_row(row_cells(process), font_size, None));
    }

    container(table).width(Length::Fill).into()
}
