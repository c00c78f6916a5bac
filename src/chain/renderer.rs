use std::io::Write;

use console::Style;

use crate::chain::SlotLabel;
use crate::constants::canvas::{DEFAULT_HEIGHT, DEFAULT_WIDTH, PX_PER_COLUMN, PX_PER_ROW};
use crate::core::Point;
use crate::error::CycleStepperError;
use crate::playback::{FollowMode, Frame, Pointer, SpeedTier};

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(CycleStepperError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(CycleStepperError::from)
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Plain,
    Node,
    Null,
    Edge,
    Slow,
    Fast,
    Status,
}

impl Tone {
    fn style(self) -> Style {
        let style = Style::new().force_styling(true);
        match self {
            Tone::Plain => style,
            Tone::Node => style.cyan().bold(),
            Tone::Null => style.dim(),
            Tone::Edge => style.white(),
            Tone::Slow => style.red().bold(),
            Tone::Fast => style.green().bold(),
            Tone::Status => style.yellow(),
        }
    }
}

/// Fixed-size character grid with clipping
struct Canvas {
    width: usize,
    cells: Vec<Vec<(char, Tone)>>,
}

impl Canvas {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            cells: vec![vec![(' ', Tone::Plain); width]; height],
        }
    }

    fn put(&mut self, col: i64, row: i64, ch: char, tone: Tone) {
        let (Ok(col), Ok(row)) = (usize::try_from(col), usize::try_from(row)) else {
            return;
        };
        if col < self.width {
            if let Some(line) = self.cells.get_mut(row) {
                line[col] = (ch, tone);
            }
        }
    }

    fn put_str(&mut self, col: i64, row: i64, text: &str, tone: Tone) {
        for (offset, ch) in text.chars().enumerate() {
            self.put(col + offset as i64, row, ch, tone);
        }
    }

    fn put_centered(&mut self, col: i64, row: i64, text: &str, tone: Tone) {
        let width = text.chars().count() as i64;
        self.put_str(col - width / 2, row, text, tone);
    }

    fn into_lines(self, colored: bool) -> Vec<String> {
        self.cells
            .into_iter()
            .map(|line| {
                let mut out = String::new();
                let mut run = String::new();
                let mut run_tone = Tone::Plain;

                for (ch, tone) in line {
                    if tone != run_tone && !run.is_empty() {
                        push_run(&mut out, &run, run_tone, colored);
                        run.clear();
                    }
                    run_tone = tone;
                    run.push(ch);
                }
                push_run(&mut out, &run, run_tone, colored);

                out.trim_end().to_string()
            })
            .collect()
    }
}

fn push_run(out: &mut String, run: &str, tone: Tone, colored: bool) {
    if colored && tone != Tone::Plain && !run.trim().is_empty() {
        out.push_str(&tone.style().apply_to(run).to_string());
    } else {
        out.push_str(run);
    }
}

/// Draws a playback frame as text: the node strip, forward arrows, the back
/// edge into the cycle, both pointer labels and an optional status line
#[derive(Debug, Clone)]
pub struct StripRenderer {
    width: u16,
    height: u16,
    colored: bool,
    show_status: bool,
}

impl Default for StripRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl StripRenderer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            colored: false,
            show_status: true,
        }
    }

    pub fn with_color(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    pub fn with_status(mut self, show_status: bool) -> Self {
        self.show_status = show_status;
        self
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Render `frame` into one string per canvas row, trailing spaces trimmed
    pub fn render_lines(&self, frame: &Frame<'_>) -> Vec<String> {
        let mut canvas = Canvas::new(usize::from(self.width), usize::from(self.height));
        let camera = frame.view.camera();
        let slots = frame.layout.slots();

        let cells: Vec<(i64, i64)> = slots
            .iter()
            .map(|slot| to_cell(slot.position, camera))
            .collect();

        // Forward arrows between consecutive slots
        for pair in cells.windows(2) {
            let (from_col, row) = pair[0];
            let (to_col, _) = pair[1];
            canvas.put_centered((from_col + to_col) / 2 + 1, row, "─→", Tone::Edge);
        }

        // Back edge from the tail into the cycle
        if let (Some(&(target_col, row)), Some(&(last_col, _))) = (
            frame.layout.cycle_target().and_then(|i| cells.get(i)),
            frame.layout.last_node_index().and_then(|i| cells.get(i)),
        ) {
            for col in target_col..=last_col {
                canvas.put(col, row + 3, '─', Tone::Edge);
            }
            canvas.put(target_col, row + 3, '└', Tone::Edge);
            canvas.put(last_col, row + 3, '┘', Tone::Edge);
            canvas.put(last_col, row + 2, '│', Tone::Edge);
            canvas.put(target_col, row + 2, '↑', Tone::Edge);
        }

        for (slot, &(col, row)) in slots.iter().zip(&cells) {
            match slot.label {
                SlotLabel::Value(_) => {
                    canvas.put_centered(col, row, &format!("({})", slot.label), Tone::Node)
                }
                SlotLabel::Null => {
                    canvas.put_centered(col, row, &format!("[{}]", slot.label), Tone::Null)
                }
            }
        }

        let pointers = [
            (frame.view.slow_index, frame.labels.slow, -1, Tone::Slow),
            (frame.view.fast_index, frame.labels.fast, 1, Tone::Fast),
        ];
        for (index, label, row_offset, tone) in pointers {
            if let Some(&(col, row)) = index.and_then(|i| cells.get(i)) {
                canvas.put_centered(col, row + row_offset, label, tone);
            }
        }

        if self.show_status {
            let row = i64::from(self.height) - 1;
            canvas.put_str(0, row, &status_line(frame), Tone::Status);
        }

        canvas.into_lines(self.colored)
    }

    /// Write the rendered frame to `output`, one line per canvas row
    pub fn render(&self, frame: &Frame<'_>, output: &mut dyn Write) -> Result<(), CycleStepperError> {
        for line in self.render_lines(frame) {
            writeln_out!(output, "{}", line)?;
        }
        Ok(())
    }
}

fn to_cell(position: Point, camera: Point) -> (i64, i64) {
    let relative = position - camera;
    (
        (relative.x / PX_PER_COLUMN).round() as i64,
        (relative.y / PX_PER_ROW).round() as i64,
    )
}

fn status_line(frame: &Frame<'_>) -> String {
    let view = &frame.view;
    if view.step_count == 0 {
        return "empty list: nothing to trace".to_string();
    }

    let follow = match view.follow {
        FollowMode::Manual => "off".to_string(),
        FollowMode::AutoFollow(Pointer::Slow) => frame.labels.slow.to_string(),
        FollowMode::AutoFollow(Pointer::Fast) => frame.labels.fast.to_string(),
    };
    let speed = match view.speed {
        SpeedTier::Slow => "slow",
        SpeedTier::Medium => "medium",
        SpeedTier::Fast => "fast",
    };

    format!(
        "step {}/{}  follow: {}  speed: {}{}",
        view.step_index + 1,
        view.step_count,
        follow,
        speed,
        if view.is_finished { "  [done]" } else { "" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{build_chain, layout};
    use crate::core::{Algorithm, ListInput};
    use crate::playback::PlaybackController;

    fn controller(values: &[i64], cycle: i64) -> PlaybackController {
        let input = ListInput::new(values.to_vec(), cycle).unwrap();
        PlaybackController::from_input(&input, Algorithm::Floyd)
    }

    #[test]
    fn test_canvas_clips_out_of_bounds() {
        let mut canvas = Canvas::new(4, 1);
        canvas.put_str(-2, 0, "abcdef", Tone::Plain);
        canvas.put(10, 5, 'x', Tone::Plain);

        assert_eq!(canvas.into_lines(false), vec!["cdef".to_string()]);
    }

    #[test]
    fn test_first_frame_places_nodes_and_pointers() {
        let c = controller(&[1, 2, 3], -1);
        let lines = StripRenderer::new(60, 8).render_lines(&c.frame());

        // Camera starts one pitch left of the origin: node 0 sits at column 18
        assert_eq!(lines[2].trim(), "slow");
        assert_eq!(lines[2].find("slow"), Some(16));
        assert!(lines[3].contains("(1)"));
        assert!(lines[3].contains("(2)"));
        assert!(lines[3].contains("[None]"));
        assert_eq!(lines[3].find("(1)"), Some(17));
        assert_eq!(lines[4].find("fast"), Some(25));
        assert_eq!(lines[7], "step 1/2  follow: off  speed: medium");
    }

    #[test]
    fn test_cycle_back_edge() {
        let c = controller(&[3, 2, 0, -4], 1);
        let lines = StripRenderer::new(60, 8).with_status(false).render_lines(&c.frame());

        assert!(!lines[3].contains("None"));
        assert!(lines[5].contains('↑'));
        assert!(lines[6].contains('└'));
        assert!(lines[6].contains('┘'));
    }

    #[test]
    fn test_out_of_range_cycle_renders_as_acyclic() {
        let chain = build_chain(&[1, 2], Some(5));
        let c = PlaybackController::new(
            Algorithm::Floyd.trace(&chain),
            chain.index_table(),
            layout(&[1, 2], Some(5)),
        );
        let lines = StripRenderer::new(60, 8).with_status(false).render_lines(&c.frame());

        assert!(lines[3].contains("[None]"));
        assert!(!lines.iter().any(|line| line.contains('└')));
        assert_eq!(lines[4].find("fast"), Some(25));
    }

    #[test]
    fn test_empty_list_status() {
        let c = controller(&[], -1);
        let lines = StripRenderer::new(40, 6).render_lines(&c.frame());

        assert_eq!(lines[5], "empty list: nothing to trace");
    }

    #[test]
    fn test_plain_render_has_no_escape_codes() {
        let c = controller(&[5, 6], 0);
        let mut out = Vec::new();
        StripRenderer::new(40, 8).render(&c.frame(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains('\u{1b}'));
        assert_eq!(text.lines().count(), 8);
    }
}
