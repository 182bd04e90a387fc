mod engine;
mod format;
mod options;
mod selection;

pub use engine::{derive_filtered_set, summary, table_rows};
pub use format::format_currency;
pub use options::suggest;
pub use selection::{parse_wage_bound, FilterSelection};
