pub mod weekly;

pub use weekly::{week_index, WeekActivity, WeeklyActivity};
