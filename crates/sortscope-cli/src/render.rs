//! Plain-text render adapters for the terminal.
//!
//! Each function turns a [`Frame`] into a block of text for one display
//! mode. Highlights are shown as a one-character marker next to each value.

use std::fmt::Write;
use std::io;

use sortscope_player::{
    bar_heights, scatter_positions, DisplayMode, Frame, Highlight, TreeLayout, TreeSlot,
    TreeSpacing,
};

const BAR_WIDTH: usize = 40;
const GRID_COLS: usize = 64;
const GRID_ROWS: usize = 16;

fn marker(highlight: Highlight) -> char {
    match highlight {
        Highlight::Normal => ' ',
        Highlight::Comparing => '?',
        Highlight::Swapped => '*',
        Highlight::Sorted => '=',
        Highlight::Found => '!',
    }
}

/// Header, layout body and explanation line for `frame`.
pub fn render_frame(frame: &Frame, mode: DisplayMode) -> String {
    let body = match mode {
        DisplayMode::Bars => render_bars(frame),
        DisplayMode::Scatter => render_scatter(frame),
        DisplayMode::Tree => render_tree(frame),
    };
    format!(
        "{} | {}\n\n{}\n{}\n",
        frame.algorithm.display_name(),
        frame.progress_label(),
        body,
        frame.explanation()
    )
}

/// Writes one rendered frame to `out`, clearing the screen first when
/// `clear` is set. Fails on the first write error.
pub fn write_frame<W: io::Write>(
    out: &mut W,
    frame: &Frame,
    mode: DisplayMode,
    clear: bool,
) -> io::Result<()> {
    if clear {
        // Clear screen, cursor home.
        out.write_all(b"\x1b[2J\x1b[H")?;
    }
    out.write_all(render_frame(frame, mode).as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

pub fn render_bars(frame: &Frame) -> String {
    let mut out = String::new();
    for (i, (value, height)) in frame.array.iter().zip(bar_heights(&frame.array)).enumerate() {
        let len = (height * BAR_WIDTH as f64).round() as usize;
        let _ = writeln!(
            out,
            "{:>3} {} {:<width$} {}",
            i,
            marker(frame.highlight(i)),
            "#".repeat(len),
            value,
            width = BAR_WIDTH
        );
    }
    out
}

pub fn render_scatter(frame: &Frame) -> String {
    let mut grid = vec![vec![' '; GRID_COLS]; GRID_ROWS];
    for (i, pos) in scatter_positions(frame.array.len()).into_iter().enumerate() {
        let col = (pos.x / 100.0 * GRID_COLS as f64) as usize;
        let row = (pos.y / 100.0 * GRID_ROWS as f64) as usize;
        let label = format!("{}{}", marker(frame.highlight(i)), frame.array[i]);
        for (offset, ch) in label.chars().enumerate() {
            if let Some(cell) = grid[row.min(GRID_ROWS - 1)].get_mut(col + offset) {
                *cell = ch;
            }
        }
    }
    grid.into_iter()
        .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_tree(frame: &Frame) -> String {
    let tree = TreeLayout::build(&frame.array, &TreeSpacing::default());
    let mut out = String::new();
    for level in tree.levels() {
        let cells: Vec<String> = level
            .iter()
            .map(|node| match node.slot {
                TreeSlot::Element { index, value } => {
                    format!("{}{}", marker(frame.highlight(index)), value)
                }
                TreeSlot::Placeholder => " .".to_string(),
            })
            .collect();
        let _ = writeln!(out, "{}", cells.join("   "));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortscope_core::Algorithm;
    use sortscope_player::{PlaybackConfig, Player};
    use sortscope_steps::sort::bubble_sort_steps;

    fn frame_after(steps_taken: usize) -> Frame {
        let base = vec![5.0, 1.0, 4.0];
        let steps = bubble_sort_steps(&base);
        let mut player =
            Player::new(Algorithm::Bubble, base, steps, PlaybackConfig::default()).unwrap();
        for _ in 0..steps_taken {
            player.step_forward();
        }
        player.frame()
    }

    struct ClosedPipe;

    impl io::Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_frame_clears_then_draws() {
        let mut out = Vec::new();
        write_frame(&mut out, &frame_after(0), DisplayMode::Bars, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\x1b[2J\x1b[HBubble Sort | Step: 0 / 3"));
    }

    #[test]
    fn write_frame_reports_closed_output() {
        let err = write_frame(&mut ClosedPipe, &frame_after(1), DisplayMode::Tree, false).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn bars_mark_swapped_pair() {
        let text = render_bars(&frame_after(1));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("  0 * #"));
        assert!(lines[1].starts_with("  1 * #"));
        assert!(lines[2].starts_with("  2   #"));
        assert!(lines[1].ends_with(" 5"));
    }

    #[test]
    fn frame_includes_header_and_explanation() {
        let text = render_frame(&frame_after(0), DisplayMode::Bars);
        assert!(text.starts_with("Bubble Sort | Step: 0 / 3"));
        assert!(text.trim_end().ends_with("Press Play to start."));
    }

    #[test]
    fn scatter_places_every_value() {
        let text = render_scatter(&frame_after(0));
        for value in ["5", "1", "4"] {
            assert!(text.contains(value));
        }
    }

    #[test]
    fn tree_prints_one_line_per_level() {
        let text = render_tree(&frame_after(0));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].trim(), "1");
        assert!(lines[1].contains('5') && lines[1].contains('4'));
    }
}
