/// Season stat tables for the batter and pitcher of the current at-bat
///
/// Narrow terminals get the rate stats only; from `FULL_STATS_MIN_WIDTH`
/// columns the counting stats are shown as well. Missing stat lines render as
/// dashes.

use ratatui::{buffer::Buffer, layout::Rect, style::{Modifier, Style}};
use crate::config::DisplayConfig;
use crate::layout_constants::{
    COUNT_COL_WIDTH, FULL_STATS_MIN_WIDTH, PLAYER_NAME_COL_WIDTH, RATE_COL_WIDTH,
};
use crate::model::{BatterStats, LiveUpdate, PitcherStats};
use crate::tui::table::{header_line, row_line, table_width, Alignment, ColumnDef};
use crate::tui::widgets::{put_str, RenderableWidget};

const MISSING: &str = "-";

/// One table row: a player and their season line, if it could be fetched
#[derive(Debug, Clone)]
pub struct PlayerLine<S> {
    pub name: String,
    pub stats: Option<S>,
}

impl<S> PlayerLine<S> {
    pub fn new(name: impl Into<String>, stats: Option<S>) -> Self {
        Self {
            name: name.into(),
            stats,
        }
    }

    fn stat(&self, f: impl Fn(&S) -> String) -> String {
        self.stats.as_ref().map(f).unwrap_or_else(|| MISSING.to_string())
    }
}

fn name_column<S: 'static>() -> ColumnDef<PlayerLine<S>> {
    ColumnDef::new("Player", PLAYER_NAME_COL_WIDTH, Alignment::Left, |l: &PlayerLine<S>| {
        l.name.clone()
    })
}

fn count<S: 'static>(header: &str, f: fn(&S) -> u32) -> ColumnDef<PlayerLine<S>> {
    ColumnDef::new(header, COUNT_COL_WIDTH, Alignment::Right, move |l: &PlayerLine<S>| {
        l.stat(|s| f(s).to_string())
    })
}

fn rate<S: 'static>(header: &str, f: fn(&S) -> &str) -> ColumnDef<PlayerLine<S>> {
    ColumnDef::new(header, RATE_COL_WIDTH, Alignment::Right, move |l: &PlayerLine<S>| {
        l.stat(|s| f(s).to_string())
    })
}

pub fn batter_columns(full: bool) -> Vec<ColumnDef<PlayerLine<BatterStats>>> {
    let mut columns = vec![name_column()];
    if full {
        columns.extend([
            count("G", |s: &BatterStats| s.games_played),
            count("AB", |s: &BatterStats| s.at_bats),
            count("R", |s: &BatterStats| s.runs),
            count("H", |s: &BatterStats| s.hits),
            count("2B", |s: &BatterStats| s.doubles),
            count("3B", |s: &BatterStats| s.triples),
            count("HR", |s: &BatterStats| s.home_runs),
            count("RBI", |s: &BatterStats| s.rbi),
            count("BB", |s: &BatterStats| s.base_on_balls),
            count("SO", |s: &BatterStats| s.strike_outs),
            count("SB", |s: &BatterStats| s.stolen_bases),
        ]);
    }
    columns.extend([
        rate("AVG", |s: &BatterStats| s.avg.as_str()),
        rate("OBP", |s: &BatterStats| s.obp.as_str()),
        rate("SLG", |s: &BatterStats| s.slg.as_str()),
        rate("OPS", |s: &BatterStats| s.ops.as_str()),
    ]);
    columns
}

pub fn pitcher_columns(full: bool) -> Vec<ColumnDef<PlayerLine<PitcherStats>>> {
    let mut columns = vec![name_column()];
    if full {
        columns.extend([
            count("W", |s: &PitcherStats| s.wins),
            count("L", |s: &PitcherStats| s.losses),
            count("G", |s: &PitcherStats| s.games_played),
            count("GS", |s: &PitcherStats| s.games_started),
            rate("IP", |s: &PitcherStats| s.innings_pitched.as_str()),
            count("H", |s: &PitcherStats| s.hits),
            count("ER", |s: &PitcherStats| s.earned_runs),
            count("BB", |s: &PitcherStats| s.base_on_balls),
            count("SO", |s: &PitcherStats| s.strike_outs),
            count("SV", |s: &PitcherStats| s.saves),
        ]);
    }
    columns.extend([
        rate("ERA", |s: &PitcherStats| s.era.as_str()),
        rate("WHIP", |s: &PitcherStats| s.whip.as_str()),
        rate("K/BB", |s: &PitcherStats| s.k_bb.as_str()),
        rate("HR/9", |s: &PitcherStats| s.hr9.as_str()),
    ]);
    columns
}

/// Titled single-row table
#[derive(Debug)]
pub struct StatsTable<T> {
    pub title: String,
    pub columns: Vec<ColumnDef<T>>,
    pub row: T,
}

impl<T> RenderableWidget for StatsTable<T> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let header = Style::default().fg(config.theme.header_fg());
        let text = Style::default().fg(config.theme.text_fg);
        let rule = config.box_chars.horizontal.repeat(table_width(&self.columns));

        put_str(buf, area, 0, 0, &self.title, header.add_modifier(Modifier::BOLD));
        put_str(buf, area, 1, 0, &header_line(&self.columns), header);
        put_str(buf, area, 2, 0, &rule, header);
        put_str(buf, area, 3, 0, &row_line(&self.columns, &self.row), text);
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(4)
    }
}

/// Batter table above pitcher table
#[derive(Debug, Clone, Copy)]
pub struct StatsView<'a> {
    pub update: &'a LiveUpdate,
}

impl<'a> StatsView<'a> {
    pub fn new(update: &'a LiveUpdate) -> Self {
        Self { update }
    }
}

impl RenderableWidget for StatsView<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let full = area.width >= FULL_STATS_MIN_WIDTH;
        let snapshot = &self.update.snapshot;

        let batter = StatsTable {
            title: "Batter".to_string(),
            columns: batter_columns(full),
            row: PlayerLine::new(&snapshot.batter.name, self.update.batter_stats.clone()),
        };
        let pitcher = StatsTable {
            title: "Pitcher".to_string(),
            columns: pitcher_columns(full),
            row: PlayerLine::new(&snapshot.pitcher.name, self.update.pitcher_stats.clone()),
        };

        let batter_height = batter.preferred_height().unwrap_or(4);
        let top = Rect { y: area.y + 1, height: area.height.saturating_sub(1), ..area };
        batter.render(top, buf, config);

        let offset = 1 + batter_height + 1;
        let bottom = Rect {
            y: area.y + offset,
            height: area.height.saturating_sub(offset),
            ..area
        };
        pitcher.render(bottom, buf, config);
    }
}
