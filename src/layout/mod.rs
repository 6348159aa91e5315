pub mod estimate;
pub mod paginator;
pub mod types;

pub use estimate::{LayoutMetrics, LineKind};
pub use paginator::{PageStats, paginate, paginate_with_stats};
pub use types::{ContentData, PageBreakConfig};
