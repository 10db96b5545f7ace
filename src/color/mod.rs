mod order;
mod utils;

use smart_leds::RGB8;

pub use order::ColorOrder;
pub use utils::{add_colors, is_black};

pub type Rgb = RGB8;

/// Color with every channel off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
