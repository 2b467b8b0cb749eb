use crate::core::types::Clock;

/// Fixed-scale mapping between a vertical coordinate and a time of day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub top_pad: f32,
    pub hour_height: f32,
    pub first_hour: f32,
    pub hour_count: u32,
}

impl GridGeometry {
    /// 720px canvas, 8px padding, 8:00–20:00.
    pub fn canvas() -> Self {
        Self::with_height(720.0, 8.0)
    }

    /// Two text rows per hour, no padding.
    pub fn terminal() -> Self {
        Self {
            top_pad: 0.0,
            hour_height: 2.0,
            first_hour: 8.0,
            hour_count: 12,
        }
    }

    fn with_height(height: f32, top_pad: f32) -> Self {
        let hour_count = 12;
        Self {
            top_pad,
            hour_height: (height - 2.0 * top_pad) / hour_count as f32,
            first_hour: 8.0,
            hour_count,
        }
    }

    pub fn last_hour(&self) -> f32 {
        self.first_hour + self.hour_count as f32
    }

    pub fn height(&self) -> f32 {
        2.0 * self.top_pad + self.hour_height * self.hour_count as f32
    }

    /// Time under `y`, snapped to the nearest half hour; `None` off the grid.
    pub fn time_at(&self, y: f32) -> Option<f32> {
        if y < self.top_pad || y > self.height() - self.top_pad {
            return None;
        }
        let hour = self.first_hour + (y - self.top_pad) / self.hour_height;
        Some(Clock::snap_to_half_hour(hour))
    }

    pub fn y_of(&self, hours: f32) -> f32 {
        self.top_pad + (hours - self.first_hour) * self.hour_height
    }

    /// Vertical extent of `[start, end)` clipped to the visible window.
    pub fn span_of(&self, start: f32, end: f32) -> Option<(f32, f32)> {
        let s = start.max(self.first_hour);
        let t = end.min(self.last_hour());
        if t <= self.first_hour || s >= self.last_hour() || t <= s {
            return None;
        }
        Some((self.y_of(s), self.y_of(t)))
    }

    /// Hour labels down the left edge, one per grid hour.
    pub fn hour_marks(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.hour_count).map(move |i| self.first_hour + i as f32)
    }
}
