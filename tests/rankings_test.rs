use std::fs;
use std::path::Path;

use powerrank::config::RunConfig;
use powerrank::error::{PowerRankError, Result};
use powerrank::rankings::{League, Season, Week};
use tempfile::tempdir;

// NFL形式: ヘッダー無し、1行 = 1順位、各セル = 投票者ごとのチーム
fn write_nfl_sheet(path: &Path, shift: usize) {
    let mut text = String::new();
    for rank in 0..32usize {
        let a = (rank + shift) % 32;
        let b = (31 - rank + shift) % 32;
        text.push_str(&format!("Team{:02} (+1),Team{:02},Team{:02}*\n", a, b, a));
    }
    fs::write(path, text).unwrap();
}

// NBA形式: ヘッダー行、先頭列は順位、"--" は未投票
fn write_nba_sheet(path: &Path) {
    let mut text = String::from("Rank,u/one,u/two,u/three\n");
    for rank in 0..30usize {
        let third = if rank == 0 { "--".to_string() } else { format!("Club{:02}", rank) };
        text.push_str(&format!("{},Club{:02},Club{:02},{}\n", rank + 1, rank, rank, third));
    }
    fs::write(path, text).unwrap();
}

#[test]
fn test_nfl_week_from_file() -> Result<()> {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("week01.csv");
    write_nfl_sheet(&path, 0);

    let week = Week::load(1, League::Nfl, &path)?;
    assert_eq!(week.table().len(), 32);
    assert_eq!(week.ranks("Team00"), Some(&[1, 1, 32][..]));
    assert_eq!(week.power_rankings()[0], "Team00");
    assert_eq!(week.power_rankings()[31], "Team31");

    let stats = week.stats("Team00").unwrap();
    assert!((stats.mean - 34.0 / 3.0).abs() < 1e-10);
    // pstdev([1, 1, 32])
    let expected_std = ((2.0 * (1.0f64 - 34.0 / 3.0).powi(2) + (32.0f64 - 34.0 / 3.0).powi(2)) / 3.0).sqrt();
    assert!((stats.std - expected_std).abs() < 1e-10);

    assert!(week.format_rankings().starts_with("1 Team00\n2 Team01\n"));
    Ok(())
}

#[test]
fn test_nba_week_drops_missing_rankers() -> Result<()> {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("2016_R01.csv");
    write_nba_sheet(&path);

    let week = Week::load(1, League::Nba, &path)?;
    assert_eq!(week.table().len(), 30);
    assert!(!week.table().contains("--"));
    assert_eq!(week.ranks("Club00"), Some(&[1, 1][..]));
    assert_eq!(week.ranks("Club05"), Some(&[6, 6, 6][..]));
    // 合計順: Club00 は 2票しかないので合計が最小
    assert_eq!(week.rank_of("Club00"), Some(1));
    Ok(())
}

#[test]
fn test_wrong_team_count() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("short.csv");
    fs::write(&path, "Cowboys,Giants\nGiants,Cowboys\n").unwrap();

    match Week::load(1, League::Nfl, &path) {
        Err(PowerRankError::TeamCount {
            expected, found, ..
        }) => {
            assert_eq!(expected, 32);
            assert_eq!(found, 2);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_season_from_config() -> Result<()> {
    let dir = tempdir().expect("failed to create temp dir");
    write_nfl_sheet(&dir.path().join("week01.csv"), 0);
    write_nfl_sheet(&dir.path().join("week02.csv"), 1);
    write_nfl_sheet(&dir.path().join("week03.csv"), 2);

    let config_path = dir.path().join("season.toml");
    fs::write(
        &config_path,
        "league = \"nfl\"\nfirst_week = 1\ncurrent_week = 3\ncsv_pattern = \"week{week}.csv\"\n",
    )
    .unwrap();

    let config = RunConfig::from_file(&config_path)?;
    assert_eq!(config.csv_path(2), dir.path().join("week02.csv"));

    let season = Season::load(&config)?;
    assert_eq!(season.week_count(), 3);
    assert_eq!(season.current().week_no(), 3);
    // シフトにより首位チームが週ごとに入れ替わる
    assert_eq!(season.week(1).unwrap().power_rankings()[0], "Team00");
    assert_eq!(season.week(2).unwrap().power_rankings()[0], "Team01");
    assert_eq!(season.current().power_rankings()[0], "Team02");

    let history = season.mean_rank_history("Team00");
    assert_eq!(history.len(), 3);
    assert!(history.iter().all(Option::is_some));
    Ok(())
}

#[test]
fn test_season_missing_week_file() {
    let dir = tempdir().expect("failed to create temp dir");
    write_nfl_sheet(&dir.path().join("week01.csv"), 0);

    let mut config = RunConfig::for_league(League::Nfl);
    config.base_dir = dir.path().to_path_buf();
    config.csv_pattern = "week{week}.csv".to_string();
    config.current_week = 2;

    assert!(matches!(Season::load(&config), Err(PowerRankError::Io(_))));
}
