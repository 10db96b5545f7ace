use crate::color::Rgb;

/// Additively blend two RGB colors
///
/// Channels are summed independently and saturate at 255, so a pixel that
/// is already at full scale stays there instead of wrapping to a dim value.
#[inline]
pub const fn add_colors(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: a.r.saturating_add(b.r),
        g: a.g.saturating_add(b.g),
        b: a.b.saturating_add(b.b),
    }
}

/// Returns true if every channel is zero
#[inline]
pub const fn is_black(color: Rgb) -> bool {
    color.r == 0 && color.g == 0 && color.b == 0
}
