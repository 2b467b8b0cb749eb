use crate::core::types::Rgb;
use crate::ui::width_util::{FALLBACK_WIDTH, WidthUtil};

#[test]
fn strip_ansi_removes_color_sequences() {
    let painted = Rgb::new(0x3b, 0x82, 0xf6).paint("Study");
    assert_eq!(WidthUtil::strip_ansi(&painted), "Study");
}

#[test]
fn strip_ansi_keeps_multibyte_text() {
    let painted = Rgb::FALLBACK.paint("Run — Exercise • 1h █▌");
    assert_eq!(WidthUtil::strip_ansi(&painted), "Run — Exercise • 1h █▌");
}

#[test]
fn visible_width_counts_chars_not_bytes() {
    let util = WidthUtil::default();
    assert_eq!(util.visible_width("██"), 2);
    assert_eq!(util.visible_width(&Rgb::FALLBACK.paint("abc")), 3);
}

#[test]
fn pad_visible_ignores_escape_codes() {
    let util = WidthUtil::default();
    let padded = util.pad_visible(&Rgb::FALLBACK.paint("ab"), 5);
    assert_eq!(util.visible_width(&padded), 5);
    assert!(padded.ends_with("   "));

    let left = util.pad_visible_left("7", 3);
    assert_eq!(left, "  7");
}

#[test]
fn truncate_adds_ellipsis_only_when_shortened() {
    let util = WidthUtil::default();
    assert_eq!(util.truncate("Lecture", 10), "Lecture");
    assert_eq!(util.truncate("Lecture", 4), "Lec…");
    assert_eq!(util.truncate("Lecture", 0), "");
}

#[test]
fn terminal_width_is_positive() {
    let width = WidthUtil::default().terminal_width();
    assert!(width > 0);
    assert!(FALLBACK_WIDTH > 0);
}
