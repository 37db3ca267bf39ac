//! Pixel placement shared by the chart, the sparkline and the hover resolver.
//!
//! [`index_to_x`] and [`x_to_index`] are the only place the horizontal
//! placement formula lives.  The chart draws with one and the hover resolver
//! inverts with the other, so the highlighted point always sits under the
//! pointer.

use iced::Size;

/// Horizontal insets of a plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub left:  f32,
    pub right: f32,
}

impl Padding {
    pub const fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    pub const fn uniform(inset: f32) -> Self {
        Self { left: inset, right: inset }
    }

    /// Width left for plotting inside a surface of `width`.
    pub fn plot_width(self, width: f32) -> f32 {
        width - self.left - self.right
    }
}

/// X coordinate of sample `index` in a series of `len` samples spread evenly
/// across the padded width.  A single sample sits at the left edge.
pub fn index_to_x(index: usize, len: usize, width: f32, padding: Padding) -> f32 {
    let span = len.saturating_sub(1).max(1) as f32;
    padding.left + (index as f32 / span) * padding.plot_width(width)
}

/// Nearest sample index under pointer `x`, clamped to the series.
///
/// `None` only for an empty series.
pub fn x_to_index(x: f32, len: usize, width: f32, padding: Padding) -> Option<usize> {
    let last = len.checked_sub(1)?;
    let plot_width = padding.plot_width(width);
    if plot_width <= 0.0 || last == 0 {
        return Some(0);
    }

    let raw = ((x - padding.left) / plot_width * last as f32).round();
    if raw.is_nan() {
        return Some(0);
    }
    Some(raw.clamp(0.0, last as f32) as usize)
}

/// A drawing surface: logical size plus the display's pixel density.
///
/// Renderers draw in logical units; the backing store is
/// `logical × scale_factor` device pixels.  Surfaces with a minimum device
/// side never shrink their backing store below it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    layout:          Size,
    scale_factor:    f32,
    min_device_side: f32,
}

impl Surface {
    pub fn new(layout: Size, scale_factor: f32) -> Self {
        Self {
            layout,
            scale_factor: sanitize_scale(scale_factor),
            min_device_side: 0.0,
        }
    }

    /// Keep the backing store at least `side` device pixels on both axes.
    #[must_use]
    pub fn with_min_device_side(mut self, side: f32) -> Self {
        self.min_device_side = side;
        self
    }

    /// Apply a new layout size and density.  Returns `true` when either
    /// changed, in which case the owner must redraw.
    pub fn resize(&mut self, layout: Size, scale_factor: f32) -> bool {
        let scale_factor = sanitize_scale(scale_factor);
        if self.layout == layout && self.scale_factor == scale_factor {
            return false;
        }
        self.layout = layout;
        self.scale_factor = scale_factor;
        true
    }

    /// Size the surface was laid out at.
    pub fn layout(&self) -> Size {
        self.layout
    }

    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// Backing store size in device pixels.
    pub fn device_size(&self) -> Size {
        Size::new(
            (self.layout.width * self.scale_factor).max(self.min_device_side).round(),
            (self.layout.height * self.scale_factor).max(self.min_device_side).round(),
        )
    }

    /// Size of the drawing area.  Always the layout size: a larger backing
    /// store from the device floor is mapped back onto the same box.
    pub fn draw_size(&self) -> Size {
        self.layout
    }
}

fn sanitize_scale(scale_factor: f32) -> f32 {
    if scale_factor.is_finite() && scale_factor > 0.0 {
        scale_factor
    } else {
        1.0
    }
}
