mod calculate_reading_time;
mod format_date;
mod neighbors;

pub use calculate_reading_time::calculate_reading_time;
pub use format_date::{format_date, format_edited_at};
pub use neighbors::{resolve_neighbors, Neighbors};
