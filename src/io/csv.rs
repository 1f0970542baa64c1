use csv::{ReaderBuilder, StringRecord};
use lazy_static::lazy_static;
use regex::Regex;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{PowerRankError, Result};
use crate::rankings::RankingTable;

lazy_static! {
    static ref TEAM_TOKEN: Regex = Regex::new(r"^\w+").expect("team token pattern is valid");
}

/// Marker used in survey sheets for a ranker who submitted nothing
pub const MISSING_RANKER: &str = "--";

/// Shape of a power ranking survey sheet.
///
/// In every layout row `i` (1-based, not counting a header) holds the teams
/// placed at rank `i`, one cell per ranker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvLayout {
    /// Header row, rank label in column 0, rankers in columns `1..=rankers`.
    /// Cells equal to the missing marker (or empty) are skipped.
    LabelledColumns {
        rankers: usize,
        missing_marker: String,
    },
    /// No header, every cell is a team. Only the leading word of each cell is kept.
    TeamCells,
}

impl CsvLayout {
    /// r/nba sheet: header, rank column, 30 ranker columns
    pub fn nba() -> Self {
        CsvLayout::LabelledColumns {
            rankers: 30,
            missing_marker: MISSING_RANKER.to_string(),
        }
    }

    /// r/nfl sheet: bare rows of team names
    pub fn nfl() -> Self {
        CsvLayout::TeamCells
    }

    fn has_header(&self) -> bool {
        matches!(self, CsvLayout::LabelledColumns { .. })
    }
}

/// CSVファイルからランキング表を読み込む
pub fn read_rankings<P: AsRef<Path>>(path: P, layout: &CsvLayout) -> Result<RankingTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(PowerRankError::Io)?;
    let table = read_rankings_from_reader(file, layout)?;

    log::debug!(
        "read {} teams from {} ({:?})",
        table.len(),
        path.display(),
        layout
    );
    Ok(table)
}

/// 任意のリーダーからランキング表を読み込む
pub fn read_rankings_from_reader<R: Read>(reader: R, layout: &CsvLayout) -> Result<RankingTable> {
    // CSVリーダーを設定
    let mut rdr = ReaderBuilder::new()
        .has_headers(layout.has_header())
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut table = RankingTable::new();

    for (row_idx, result) in rdr.records().enumerate() {
        let record = result.map_err(PowerRankError::Csv)?;
        let rank = (row_idx + 1) as u32;

        match layout {
            CsvLayout::LabelledColumns {
                rankers,
                missing_marker,
            } => push_labelled_row(&mut table, &record, rank, *rankers, missing_marker),
            CsvLayout::TeamCells => push_team_cells(&mut table, &record, rank)?,
        }
    }

    Ok(table)
}

fn push_labelled_row(
    table: &mut RankingTable,
    record: &StringRecord,
    rank: u32,
    rankers: usize,
    missing_marker: &str,
) {
    // 先頭列は順位ラベルなので読み飛ばす
    for cell in record.iter().skip(1).take(rankers) {
        if cell.is_empty() || cell == missing_marker {
            continue;
        }
        table.push(cell, rank);
    }
}

fn push_team_cells(table: &mut RankingTable, record: &StringRecord, rank: u32) -> Result<()> {
    for cell in record.iter() {
        // 余分な記号や空白を除いたチーム名
        let team = TEAM_TOKEN.find(cell).ok_or_else(|| {
            PowerRankError::Format(format!("cannot read team '{}' on line {}", cell, rank))
        })?;
        table.push(team.as_str(), rank);
    }
    Ok(())
}
