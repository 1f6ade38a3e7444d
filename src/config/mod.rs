//! Layout settings shared by the ledger and chart renderers.

/// Fixed-width layout used when rendering categories and charts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Total width of every category line.
    pub line_width: usize,
    /// Maximum characters of a description shown per ledger line.
    pub description_width: usize,
    /// Fill character around the centred category title.
    pub title_fill: char,
    /// Percentage bucket size for the spend chart.
    pub chart_step: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            line_width: 30,
            description_width: 23,
            title_fill: '*',
            chart_step: 10,
        }
    }
}

impl LayoutConfig {
    /// Chart step kept within `1..=100`.
    pub fn effective_step(&self) -> u32 {
        self.chart_step.clamp(1, 100)
    }

    /// Chart levels from the highest multiple of the step down to 0.
    pub fn chart_levels(&self) -> Vec<u32> {
        let step = self.effective_step();
        (0..=100 / step).rev().map(|idx| idx * step).collect()
    }
}
