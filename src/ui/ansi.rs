// Terminal control sequences shared by the views.

/// Move the cursor up one line.
pub const CURSOR_UP_ONE: &str = crate::csi!("1A");
/// Clear from cursor to end of line.
pub const CLEAR_LINE_REST: &str = crate::csi!("0K");

pub const HIDE_CURSOR: &str = crate::csi!("?25l");
pub const SHOW_CURSOR: &str = crate::csi!("?25h");
/// Blinking block cursor, where supported.
pub const CURSOR_BLINKING_BLOCK: &str = crate::csi!("1 q");

pub const STYLE_RESET: &str = crate::csi!("0m");
pub const STYLE_BOLD: &str = crate::csi!("1m");
pub const STYLE_ITALIC: &str = crate::csi!("3m");
pub const STYLE_DIM: &str = crate::csi!("2m");
pub const FG_LIGHT_GRAY: &str = crate::csi!("37m");
pub const FG_YELLOW: &str = crate::csi!("33m");
/// White on dark gray, used for the input line.
pub const PROMPT_STYLE: &str = crate::csi2!("38;5;15m", "48;5;236m");
