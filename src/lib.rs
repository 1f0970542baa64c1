pub mod config;
pub mod error;
pub mod io;
pub mod rankings;
pub mod stats;
pub mod vis;
pub mod window;

// Re-export commonly used types
pub use config::{ChartFormat, RunConfig};
pub use error::{PowerRankError, Result};
pub use io::{CsvLayout, TeamColors, TeamNames};
pub use rankings::{League, RankingTable, Season, Week};
pub use stats::{max_contiguous_sum, max_contiguous_sum_scan, ContiguousStrategy, TeamStats};
pub use vis::PlotSettings;
pub use window::{all_windows, windows};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
