pub mod csv;
pub mod teams;

// Re-export commonly used functions
pub use self::csv::{read_rankings, read_rankings_from_reader, CsvLayout};
pub use self::teams::{
    parse_team_colors, parse_team_names, read_team_colors, read_team_names, Rgb, TeamColors,
    TeamNames, TeamPalette,
};
