use crate::ui::chrome::UiChrome;
use crate::ui::width_util::WidthUtil;

#[test]
fn banner_lines_share_one_visible_width() {
    let lines = UiChrome::new().banner_lines();
    let util = WidthUtil::default();

    assert!(lines.len() >= 3);
    let width = util.visible_width(&lines[0]);
    assert!(lines.iter().all(|l| util.visible_width(l) == width));
}

#[test]
fn banner_carries_title_and_subtitle() {
    let joined = WidthUtil::strip_ansi(&UiChrome::new().banner_lines().join("\n"));
    assert!(joined.contains("W E E K P L A N"));
    assert!(joined.contains("Plan the week, hour by hour"));
}
