//! Team reference files: nicknames and colour codes
//!
//! Both files are plain text with whitespace separated tokens, one team per line.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{PowerRankError, Result};

/// Location name → team nickname, e.g. `"Golden State" → "Warriors"`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamNames {
    names: HashMap<String, String>,
}

impl TeamNames {
    pub fn new() -> Self {
        TeamNames::default()
    }

    pub fn insert(&mut self, location: impl Into<String>, nickname: impl Into<String>) {
        self.names.insert(location.into(), nickname.into());
    }

    pub fn nickname(&self, team: &str) -> Option<&str> {
        self.names.get(team).map(String::as_str)
    }

    /// Nickname when known, otherwise the team string as given
    pub fn display_name<'a>(&'a self, team: &'a str) -> &'a str {
        match self.nickname(team) {
            Some(nickname) => nickname,
            None => {
                log::debug!("no nickname for '{}', using it as is", team);
                team
            }
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Parse a team list such as
///
/// ```text
/// Boston Celtics
/// Golden State Warriors
/// LA Clippers
/// ```
///
/// Two tokens map the first to the second. Three tokens, or any line starting
/// with `LA`, map the first two tokens joined by a space to the last one.
pub fn parse_team_names(text: &str) -> Result<TeamNames> {
    let mut names = TeamNames::new();

    for (line_no, line) in text.lines().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => continue,
            [location, nickname] if *location != "LA" => names.insert(*location, *nickname),
            [first, second, .., last] if tokens.len() == 3 || *first == "LA" => {
                names.insert(format!("{} {}", first, second), *last)
            }
            [first, second] => names.insert(format!("{} {}", first, second), *second),
            _ => {
                return Err(PowerRankError::Format(format!(
                    "unexpected team name line {}: '{}'",
                    line_no + 1,
                    line.trim()
                )))
            }
        }
    }

    Ok(names)
}

pub fn read_team_names<P: AsRef<Path>>(path: P) -> Result<TeamNames> {
    let text = fs::read_to_string(path.as_ref()).map_err(PowerRankError::Io)?;
    let names = parse_team_names(&text)?;
    log::debug!("read {} team names from {}", names.len(), path.as_ref().display());
    Ok(names)
}

/// 24-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const YELLOW: Rgb = Rgb(255, 255, 0);

    pub fn from_u32(value: u32) -> Self {
        Rgb(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        )
    }

    pub fn to_u32(self) -> u32 {
        ((self.0 as u32) << 16) | ((self.1 as u32) << 8) | self.2 as u32
    }

    /// Bitwise complement, a rough contrasting colour
    pub fn complement(self) -> Self {
        Rgb::from_u32(0xffffff ^ self.to_u32())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:06x}", self.to_u32())
    }
}

impl FromStr for Rgb {
    type Err = PowerRankError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "red" => return Ok(Rgb::RED),
            "black" => return Ok(Rgb::BLACK),
            "yellow" => return Ok(Rgb::YELLOW),
            "white" => return Ok(Rgb(255, 255, 255)),
            "grey" | "gray" => return Ok(Rgb(128, 128, 128)),
            _ => {}
        }

        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 {
            return Err(PowerRankError::Format(format!("invalid colour '{}'", s)));
        }
        u32::from_str_radix(hex, 16)
            .map(Rgb::from_u32)
            .map_err(|_| PowerRankError::Format(format!("invalid colour '{}'", s)))
    }
}

/// Main, secondary and third colour of a team
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamPalette {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub tertiary: Rgb,
}

impl Default for TeamPalette {
    fn default() -> Self {
        TeamPalette {
            primary: Rgb::RED,
            secondary: Rgb::BLACK,
            tertiary: Rgb::YELLOW,
        }
    }
}

/// Team → colour palette
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamColors {
    palettes: HashMap<String, TeamPalette>,
}

impl TeamColors {
    pub fn new() -> Self {
        TeamColors::default()
    }

    pub fn insert(&mut self, team: impl Into<String>, palette: TeamPalette) {
        self.palettes.insert(team.into(), palette);
    }

    pub fn get(&self, team: &str) -> Option<&TeamPalette> {
        self.palettes.get(team)
    }

    /// Palette for `team`, or red/black/yellow when the team has none
    pub fn palette(&self, team: &str) -> TeamPalette {
        match self.palettes.get(team) {
            Some(palette) => *palette,
            None => {
                log::debug!("no colours for '{}', using the default palette", team);
                TeamPalette::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }
}

/// Parse lines of `Team #primary [#secondary [#tertiary]]`.
///
/// Missing secondary and third colours are filled with the complement of the primary.
pub fn parse_team_colors(text: &str) -> Result<TeamColors> {
    let mut colors = TeamColors::new();

    for line in text.lines() {
        let mut tokens = line.split_whitespace();
        let Some(team) = tokens.next() else {
            continue;
        };

        let parsed = tokens
            .take(3)
            .map(Rgb::from_str)
            .collect::<Result<Vec<Rgb>>>()
            .map_err(|e| PowerRankError::Format(format!("problem with colour for {}: {}", team, e)))?;

        let primary = *parsed.first().ok_or_else(|| {
            PowerRankError::Format(format!("no colours given for {}", team))
        })?;
        let fill = primary.complement();

        colors.insert(
            team,
            TeamPalette {
                primary,
                secondary: parsed.get(1).copied().unwrap_or(fill),
                tertiary: parsed.get(2).copied().unwrap_or(fill),
            },
        );
    }

    Ok(colors)
}

pub fn read_team_colors<P: AsRef<Path>>(path: P) -> Result<TeamColors> {
    let text = fs::read_to_string(path.as_ref()).map_err(PowerRankError::Io)?;
    let colors = parse_team_colors(&text)?;
    log::debug!("read {} team palettes from {}", colors.len(), path.as_ref().display());
    Ok(colors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_team_names() {
        let text = "Boston Celtics\nGolden State Warriors\nLA Clippers\nLos Angeles Lakers\n\n";
        let names = parse_team_names(text).unwrap();

        assert_eq!(names.nickname("Boston"), Some("Celtics"));
        assert_eq!(names.nickname("Golden State"), Some("Warriors"));
        assert_eq!(names.nickname("LA Clippers"), Some("Clippers"));
        assert_eq!(names.nickname("Los Angeles"), Some("Lakers"));
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_parse_team_names_rejects_odd_lines() {
        assert!(matches!(
            parse_team_names("Portland\n"),
            Err(PowerRankError::Format(_))
        ));
        assert!(matches!(
            parse_team_names("Portland Trail Blazers Extra\n"),
            Err(PowerRankError::Format(_))
        ));
    }

    #[test]
    fn test_display_name_falls_back() {
        let mut names = TeamNames::new();
        names.insert("Houston", "Rockets");
        assert_eq!(names.display_name("Houston"), "Rockets");
        assert_eq!(names.display_name("Utah"), "Utah");
    }

    #[test]
    fn test_rgb_parse_and_display() {
        let rgb: Rgb = "#002244".parse().unwrap();
        assert_eq!(rgb, Rgb(0x00, 0x22, 0x44));
        assert_eq!(rgb.to_string(), "#002244");
        assert_eq!("red".parse::<Rgb>().unwrap(), Rgb::RED);
        assert!("#12345".parse::<Rgb>().is_err());
        assert!("#zzzzzz".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_complement() {
        assert_eq!(Rgb(0x00, 0x22, 0x44).complement(), Rgb(0xff, 0xdd, 0xbb));
        // 先頭のゼロも桁として残る
        assert_eq!(Rgb(0xff, 0xf0, 0x00).complement().to_string(), "#000fff");
    }

    #[test]
    fn test_parse_team_colors_fills_missing() {
        let text = "Cowboys #002244 #B0B7BC #ACC0C6\nPatriots #002244\nBears #0B162A #C83803\n";
        let colors = parse_team_colors(text).unwrap();

        let cowboys = colors.get("Cowboys").unwrap();
        assert_eq!(cowboys.secondary, Rgb(0xb0, 0xb7, 0xbc));
        assert_eq!(cowboys.tertiary, Rgb(0xac, 0xc0, 0xc6));

        let patriots = colors.get("Patriots").unwrap();
        assert_eq!(patriots.secondary, Rgb(0xff, 0xdd, 0xbb));
        assert_eq!(patriots.tertiary, Rgb(0xff, 0xdd, 0xbb));

        let bears = colors.get("Bears").unwrap();
        assert_eq!(bears.secondary, Rgb(0xc8, 0x38, 0x03));
        assert_eq!(bears.tertiary, Rgb(0x0b, 0x16, 0x2a).complement());
    }

    #[test]
    fn test_parse_team_colors_errors() {
        assert!(matches!(
            parse_team_colors("Jets\n"),
            Err(PowerRankError::Format(_))
        ));
        assert!(matches!(
            parse_team_colors("Jets #nothex\n"),
            Err(PowerRankError::Format(_))
        ));
    }

    #[test]
    fn test_default_palette() {
        let colors = TeamColors::new();
        assert_eq!(colors.palette("Browns"), TeamPalette::default());
    }
}
