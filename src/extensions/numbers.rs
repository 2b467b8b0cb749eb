pub trait HoursLabel {
    /// One-decimal hour label, e.g. `1.5h`.
    fn hours_label(&self) -> String;
}

impl HoursLabel for f32 {
    fn hours_label(&self) -> String {
        format!("{:.1}h", self.max(0.0))
    }
}
