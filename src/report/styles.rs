//! Chart theme configuration.

use plotters::style::RGBColor;

/// Colors used by the score chart.
pub struct ChartTheme {
    pub background: RGBColor,
    pub text: RGBColor,
    pub grid: RGBColor,
    pub bar: RGBColor,
}

impl ChartTheme {
    /// Look up a theme by name.
    pub fn named(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::default()),
            "dark" => Some(Self::dark()),
            _ => None,
        }
    }

    /// Light background with blue bars.
    pub fn light() -> Self {
        Self {
            background: RGBColor(250, 250, 250),
            text: RGBColor(40, 40, 40),
            grid: RGBColor(200, 200, 200),
            bar: RGBColor(66, 133, 244),
        }
    }

    /// Near-black background with sky-blue bars.
    pub fn dark() -> Self {
        Self {
            background: RGBColor(16, 16, 16),
            text: RGBColor(220, 220, 220),
            grid: RGBColor(70, 70, 70),
            bar: RGBColor(135, 206, 250),
        }
    }
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self::light()
    }
}
