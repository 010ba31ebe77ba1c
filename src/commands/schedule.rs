use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use chrono::{Local, TimeZone};
use unicode_width::UnicodeWidthStr;

use crate::commands::parse_game_date;
use crate::config::Config;
use crate::data_provider::{MlbDataProvider, ScheduleGame};

pub const SELECTION_PROMPT: &str = "Choose game ID:";
pub const NO_GAMES: &str = "No games scheduled.";

/// Game list with 1-based IDs and start times in `tz`
pub fn format_games_table<Tz>(games: &[ScheduleGame], tz: &Tz, time_format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let header = ["ID", "Away", "Home", "Time", "Status"];
    let rows: Vec<[String; 5]> = games
        .iter()
        .enumerate()
        .map(|(i, game)| {
            [
                (i + 1).to_string(),
                game.away_team.clone(),
                game.home_team.clone(),
                game.start_time.with_timezone(tz).format(time_format).to_string(),
                game.status.to_string(),
            ]
        })
        .collect();

    let mut widths = header.map(|h| h.width());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.width());
        }
    }

    let render = |cells: [&str; 5]| -> String {
        cells
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, w))| {
                let pad = " ".repeat(w.saturating_sub(cell.width()));
                // IDs are right-aligned like numbers
                if i == 0 {
                    format!("{}{}", pad, cell)
                } else {
                    format!("{}{}", cell, pad)
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut output = String::new();
    output.push_str(&render(header));
    output.push('\n');
    output.push_str(&render(widths.map(|w| "-".repeat(w)).each_ref().map(String::as_str)));
    output.push('\n');
    for row in &rows {
        output.push_str(&render(row.each_ref().map(String::as_str)));
        output.push('\n');
    }
    output
}

/// Parse a 1-based game ID into an index into `count` games
pub fn parse_selection(input: &str, count: usize) -> Result<usize> {
    let input = input.trim();
    let id: usize = input
        .parse()
        .with_context(|| format!("'{}' is not a game ID", input))?;
    if id == 0 || id > count {
        bail!("Game ID must be between 1 and {}", count);
    }
    Ok(id - 1)
}

/// Prompt until a valid game ID is entered
pub fn read_selection<'a, R: BufRead, W: Write>(
    games: &'a [ScheduleGame],
    input: &mut R,
    output: &mut W,
) -> Result<&'a ScheduleGame> {
    if games.is_empty() {
        bail!(NO_GAMES);
    }
    loop {
        write!(output, "{}", SELECTION_PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("No game selected");
        }
        match parse_selection(&line, games.len()) {
            Ok(index) => return Ok(&games[index]),
            Err(e) => writeln!(output, "{}", e)?,
        }
    }
}

/// Print the game list and read a selection from stdin
pub fn prompt_selection<'a>(games: &'a [ScheduleGame], config: &Config) -> Result<&'a ScheduleGame> {
    print!("{}", format_games_table(games, &Local, &config.time_format));
    let stdin = std::io::stdin();
    read_selection(games, &mut stdin.lock(), &mut std::io::stdout())
}

pub async fn run(client: &dyn MlbDataProvider, date: Option<String>, config: &Config) -> Result<()> {
    let game_date = parse_game_date(date)?;
    let games = client
        .schedule(game_date)
        .await
        .context("Failed to fetch schedule")?;

    if games.is_empty() {
        println!("{}", NO_GAMES);
    } else {
        print!("{}", format_games_table(&games, &Local, &config.time_format));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{create_mock_schedule, MOCK_LIVE_GAME};
    use chrono::Utc;
    use std::io::Cursor;

    #[test]
    fn test_format_games_table() {
        let games = create_mock_schedule(None);
        let table = format_games_table(&games, &Utc, "%H:%M");
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[0],
            "ID  Away               Home                 Time   Status"
        );
        assert_eq!(
            lines[1],
            "--  -----------------  -------------------  -----  -------"
        );
        assert!(lines[2].starts_with(" 1  New York Yankees   Baltimore Orioles"));
        assert!(lines[3].contains("Toronto Blue Jays"));
        assert!(lines[3].ends_with("Live"));
        assert!(lines[4].ends_with("Preview"));
    }

    #[test]
    fn test_times_follow_time_zone() {
        let games = create_mock_schedule(None);
        let utc = format_games_table(&games, &Utc, "%H:%M");
        let plus_two = format_games_table(
            &games,
            &chrono::FixedOffset::east_opt(2 * 3600).unwrap(),
            "%H:%M",
        );
        let utc_time = games[0].start_time.format("%H:%M").to_string();
        let local_time = (games[0].start_time + chrono::Duration::hours(2)).format("%H:%M").to_string();
        assert!(utc.lines().nth(2).unwrap().contains(&utc_time));
        assert!(plus_two.lines().nth(2).unwrap().contains(&local_time));
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("1\n", 3).unwrap(), 0);
        assert_eq!(parse_selection(" 3 ", 3).unwrap(), 2);
        assert!(parse_selection("0", 3).is_err());
        assert!(parse_selection("4", 3).is_err());
        assert!(parse_selection("two", 3).is_err());
    }

    #[test]
    fn test_read_selection_reprompts_on_bad_input() {
        let games = create_mock_schedule(None);
        let mut input = Cursor::new("abc\n9\n2\n");
        let mut output = Vec::new();

        let game = read_selection(&games, &mut input, &mut output).unwrap();
        assert_eq!(game.game_pk, MOCK_LIVE_GAME);

        let printed = String::from_utf8(output).unwrap();
        assert_eq!(printed.matches(SELECTION_PROMPT).count(), 3);
        assert!(printed.contains("Game ID must be between 1 and 3"));
    }

    #[test]
    fn test_read_selection_eof() {
        let games = create_mock_schedule(None);
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert!(read_selection(&games, &mut input, &mut output).is_err());
    }

    #[test]
    fn test_read_selection_no_games() {
        let mut input = Cursor::new("1\n");
        let mut output = Vec::new();
        let err = read_selection(&[], &mut input, &mut output).unwrap_err();
        assert_eq!(err.to_string(), NO_GAMES);
    }

    #[tokio::test]
    async fn test_run_with_mock_client() {
        let client = crate::dev::mock_client::MockClient::new();
        assert!(run(&client, Some("2024-07-04".to_string()), &Config::default()).await.is_ok());
        assert!(run(&client, Some("July 4".to_string()), &Config::default()).await.is_err());
    }
}
