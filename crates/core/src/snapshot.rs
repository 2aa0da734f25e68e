//! Shareable board exports.
//!
//! Renders a [`BoardSnapshot`] as a plain-text score table and writes it to a
//! timestamped file that can be shared outside the terminal.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::info;

use crate::board::BoardSnapshot;
use crate::catalog::Category;

const MIN_COLUMN_WIDTH: usize = 6;
const MAX_COLUMN_WIDTH: usize = 16;

/// Writes text renderings of board snapshots under a root directory.
pub struct SnapshotExporter {
    root: PathBuf,
}

impl SnapshotExporter {
    /// Exporter rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory exports are written to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Render the snapshot and write it to a fresh timestamped file, with a
    /// machine-readable JSON sidecar next to it.
    ///
    /// Returns the path of the written text file.
    pub fn export(&self, snapshot: &BoardSnapshot) -> Result<PathBuf> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("failed to create {}", self.root.display()))?;

        let file_name = format!("yachtscore_{}.txt", Local::now().format("%Y%m%d%H%M%S"));
        let path = self.root.join(file_name);
        fs::write(&path, render_text(snapshot))
            .with_context(|| format!("failed to write {}", path.display()))?;

        let sidecar = path.with_extension("json");
        let serialized =
            serde_json::to_vec_pretty(snapshot).context("failed to serialize snapshot")?;
        fs::write(&sidecar, serialized)
            .with_context(|| format!("failed to write {}", sidecar.display()))?;

        info!(path = %path.display(), "board snapshot exported");
        Ok(path)
    }
}

/// Render a snapshot as a fixed-width score table.
pub fn render_text(snapshot: &BoardSnapshot) -> String {
    let label_width = Category::ALL
        .iter()
        .map(|category| category.label().len())
        .max()
        .unwrap_or(0);
    let columns: Vec<(String, usize)> = snapshot
        .players
        .iter()
        .map(|player| {
            let name = truncate(&player.name, MAX_COLUMN_WIDTH);
            let width = name.chars().count().max(MIN_COLUMN_WIDTH);
            (name, width)
        })
        .collect();

    let mut out = String::new();
    out.push_str(&format!(
        "Yacht scoreboard, {}\n\n",
        snapshot.captured_at.format("%Y-%m-%d %H:%M UTC")
    ));

    let mut header = format!("{:label_width$}", "");
    for (name, width) in &columns {
        let width = *width;
        header.push_str(&format!(" | {name:>width$}"));
    }
    out.push_str(&header);
    out.push('\n');
    out.push_str(&rule(label_width, &columns));

    for category in Category::ALL {
        let mut row = format!("{:label_width$}", category.label());
        for (player, (_, width)) in snapshot.players.iter().zip(&columns) {
            let width = *width;
            let cell = match player.scores[category.index()] {
                Some(value) => value.to_string(),
                None => "-".to_string(),
            };
            row.push_str(&format!(" | {cell:>width$}"));
        }
        out.push_str(&row);
        out.push('\n');
        if category == Category::Sixes {
            out.push_str(&rule(label_width, &columns));
            out.push_str(&totals_row(snapshot, &columns, label_width, "Upper subtotal", |t| {
                t.upper_subtotal
            }));
            out.push_str(&totals_row(snapshot, &columns, label_width, "Bonus", |t| t.bonus));
            out.push_str(&rule(label_width, &columns));
        }
    }

    out.push_str(&rule(label_width, &columns));
    out.push_str(&totals_row(snapshot, &columns, label_width, "Lower total", |t| {
        t.lower_total
    }));
    out.push_str(&totals_row(snapshot, &columns, label_width, "Grand total", |t| {
        t.grand_total
    }));

    if let Some(winner) = &snapshot.winner {
        out.push('\n');
        let line = if winner.names.len() == 1 {
            format!("Winner: {} with {} points\n", winner.names[0], winner.max_total)
        } else {
            format!(
                "Tie at {} points: {}\n",
                winner.max_total,
                winner.names.join(", ")
            )
        };
        out.push_str(&line);
    }

    out
}

fn totals_row(
    snapshot: &BoardSnapshot,
    columns: &[(String, usize)],
    label_width: usize,
    label: &str,
    pick: impl Fn(&crate::totals::Totals) -> u32,
) -> String {
    let mut row = format!("{label:label_width$}");
    for (player, (_, width)) in snapshot.players.iter().zip(columns) {
        let width = *width;
        let value = pick(&player.totals);
        row.push_str(&format!(" | {value:>width$}"));
    }
    row.push('\n');
    row
}

fn rule(label_width: usize, columns: &[(String, usize)]) -> String {
    let mut line = "-".repeat(label_width);
    for (_, width) in columns {
        line.push_str("-+-");
        line.push_str(&"-".repeat(*width));
    }
    line.push('\n');
    line
}

fn truncate(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        name.to_string()
    } else {
        name.chars().take(max.saturating_sub(1)).collect::<String>() + "…"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Scoreboard;
    use tempfile::tempdir;

    fn finished_board() -> Scoreboard {
        let mut board = Scoreboard::new();
        let id = board.players()[0].id();
        board.rename_player(id, "Alice");
        for category in Category::ALL {
            board.set_score(id, category, "4");
        }
        board
    }

    #[test]
    fn render_lists_every_category_and_the_totals() {
        let text = render_text(&finished_board().snapshot());
        for category in Category::ALL {
            assert!(text.contains(category.label()), "missing {}", category.label());
        }
        assert!(text.contains("Upper subtotal"));
        assert!(text.contains("Bonus"));
        assert!(text.contains("Grand total"));
        assert!(text.contains("Winner: Alice"));
    }

    #[test]
    fn render_marks_unset_cells() {
        let board = Scoreboard::new();
        let text = render_text(&board.snapshot());
        assert!(text.contains('-'));
        assert!(!text.contains("Winner:"));
    }

    #[test]
    fn export_writes_a_timestamped_file() -> Result<()> {
        let dir = tempdir()?;
        let exporter = SnapshotExporter::new(dir.path());
        let path = exporter.export(&finished_board().snapshot())?;

        assert!(path.exists());
        assert!(path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| name.starts_with("yachtscore_") && name.ends_with(".txt"))
            .unwrap_or(false));
        let contents = fs::read_to_string(&path)?;
        assert!(contents.contains("Alice"));

        let sidecar = path.with_extension("json");
        assert!(sidecar.exists());
        let parsed: crate::board::BoardSnapshot =
            serde_json::from_str(&fs::read_to_string(&sidecar)?)?;
        assert_eq!(parsed.players.len(), 1);
        Ok(())
    }

    #[test]
    fn long_names_are_truncated_in_the_header() {
        let mut board = Scoreboard::new();
        let id = board.players()[0].id();
        board.rename_player(id, "An Exceedingly Long Player Name");
        let text = render_text(&board.snapshot());
        assert!(!text.contains("Exceedingly Long Player Name"));
    }
}
