pub mod chart;
pub mod styles;
pub mod table;

pub use chart::generate_chart;
pub use styles::ChartTheme;
pub use table::{rate_emoji, render_table};
