use terminal_size::{Width, terminal_size};

use crate::ui::ascii::ESC;

/// Terminal width used when the real one cannot be queried (pipes, tests).
pub const FALLBACK_WIDTH: usize = 80;

#[derive(Debug, Default, Clone)]
pub struct WidthUtil;

impl WidthUtil {
    /// Drops `ESC [ ... <letter>` sequences and keeps every other char.
    pub fn strip_ansi(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        let mut chars = s.chars().peekable();
        while let Some(c) = chars.next() {
            if c == ESC && chars.peek() == Some(&'[') {
                chars.next();
                for t in chars.by_ref() {
                    if t.is_ascii_alphabetic() {
                        break;
                    }
                }
                continue;
            }
            out.push(c);
        }
        out
    }

    pub fn visible_width(&self, s: &str) -> usize {
        Self::strip_ansi(s).chars().count()
    }

    pub fn pad_visible(&self, s: &str, width: usize) -> String {
        let pad = width.saturating_sub(self.visible_width(s));
        format!("{s}{}", " ".repeat(pad))
    }

    pub fn pad_visible_left(&self, s: &str, width: usize) -> String {
        let pad = width.saturating_sub(self.visible_width(s));
        format!("{}{s}", " ".repeat(pad))
    }

    /// Cuts plain text to `width` chars, ending with `…` when shortened.
    pub fn truncate(&self, s: &str, width: usize) -> String {
        if s.chars().count() <= width {
            return s.to_string();
        }
        if width == 0 {
            return String::new();
        }
        let mut out: String = s.chars().take(width - 1).collect();
        out.push('…');
        out
    }

    pub fn terminal_width(&self) -> usize {
        match terminal_size() {
            Some((Width(w), _)) => w as usize,
            None => FALLBACK_WIDTH,
        }
    }
}
