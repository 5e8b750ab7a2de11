//! GameView: maps a `core::GameSnapshot` into a scorecard framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! ```text
//! ┌─────┬─────┬ ... ┬───────┬───────┐
//! │  1  │  2  │     │  10   │ TOTAL │
//! ├─────┼─────┼ ... ┼───────┼───────┤
//! │ X   │ 7 / │     │ X X 4 │       │
//! │   20│   30│     │    144│    144│
//! └─────┴─────┴ ... ┴───────┴───────┘
//! ```

use crate::core::{FrameSnapshot, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{SCORING_FRAMES, TENTH_FRAME_INDEX};

/// Inner width of frames 1-9 (two balls).
const FRAME_W: u16 = 5;
/// Inner width of frame 10 (up to three balls with the bonus slots).
const TENTH_W: u16 = 7;
/// Inner width of the total column.
const TOTAL_W: u16 = 7;

/// Total card width including borders.
pub const CARD_WIDTH: u16 = 1 + (FRAME_W + 1) * 9 + (TENTH_W + 1) + (TOTAL_W + 1);
/// Total card height including borders.
pub const CARD_HEIGHT: u16 = 6;

const ROW_TOP: u16 = 0;
const ROW_HEADER: u16 = 1;
const ROW_SEPARATOR: u16 = 2;
const ROW_MARKS: u16 = 3;
const ROW_TOTALS: u16 = 4;
const ROW_BOTTOM: u16 = 5;

const BORDER: CellStyle = CellStyle::fg(Rgb::new(120, 120, 130));
const HEADER: CellStyle = CellStyle::fg(Rgb::new(180, 180, 180));
const CURRENT: CellStyle = CellStyle::fg(Rgb::new(250, 210, 80)).bold();
const STRIKE: CellStyle = CellStyle::fg(Rgb::new(230, 80, 80)).bold();
const SPARE: CellStyle = CellStyle::fg(Rgb::new(80, 160, 230)).bold();

/// Column `index` (0..=10, 10 being the total) as `(inner_x, inner_width)`.
fn column(index: usize) -> (u16, u16) {
    let i = index as u16;
    if index < TENTH_FRAME_INDEX {
        (1 + i * (FRAME_W + 1), FRAME_W)
    } else if index == TENTH_FRAME_INDEX {
        (1 + 9 * (FRAME_W + 1), TENTH_W)
    } else {
        (1 + 9 * (FRAME_W + 1) + TENTH_W + 1, TOTAL_W)
    }
}

fn mark_style(mark: char) -> CellStyle {
    match mark {
        'X' => STRIKE,
        '/' => SPARE,
        _ => CellStyle::PLAIN,
    }
}

/// Scorecard renderer.
pub struct GameView {
    highlight_current: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            highlight_current: true,
        }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable the highlight on the frame awaiting the next ball.
    pub fn with_highlight(mut self, highlight_current: bool) -> Self {
        self.highlight_current = highlight_current;
        self
    }

    /// Render the scorecard into a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot) -> FrameBuffer {
        let mut fb = FrameBuffer::new(CARD_WIDTH, CARD_HEIGHT);
        self.render_into(snap, &mut fb);
        fb
    }

    /// Render into an existing framebuffer of at least `CARD_WIDTH x CARD_HEIGHT`.
    pub fn render_into(&self, snap: &GameSnapshot, fb: &mut FrameBuffer) {
        fb.clear();
        self.draw_grid(fb);

        let current = (snap.current_frame as usize).clamp(1, SCORING_FRAMES) - 1;
        for (index, frame) in snap.scoring_frames().iter().enumerate() {
            let (x, w) = column(index);

            let label = frame.number.to_string();
            let style = if self.highlight_current && !snap.finished() && index == current {
                CURRENT
            } else {
                HEADER
            };
            fb.put_str(x + (w - label.len() as u16) / 2, ROW_HEADER, &label, style);

            if index == TENTH_FRAME_INDEX {
                let bonus = snap.frames.iter().filter(|f| f.is_bonus());
                let tenth = std::iter::once(frame).chain(bonus);
                self.draw_marks(fb, x, tenth);
            } else {
                self.draw_marks(fb, x, std::iter::once(frame));
            }

            if let Some(total) = frame.running_total {
                fb.put_str_right(x + w - 1, ROW_TOTALS, &total.to_string(), CellStyle::PLAIN);
            }
        }

        let (x, w) = column(SCORING_FRAMES);
        fb.put_str(x + 1, ROW_HEADER, "TOTAL", HEADER);
        let total_style = if snap.finished() {
            CellStyle::PLAIN.bold()
        } else {
            CellStyle::PLAIN
        };
        fb.put_str_right(x + w - 1, ROW_TOTALS, &snap.score.to_string(), total_style);
    }

    fn draw_marks<'a>(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        frames: impl Iterator<Item = &'a FrameSnapshot>,
    ) {
        let marks = frames.flat_map(|frame| frame.marks());
        for (i, mark) in marks.enumerate() {
            fb.put_char(x + 1 + 2 * i as u16, ROW_MARKS, mark, mark_style(mark));
        }
    }

    fn draw_grid(&self, fb: &mut FrameBuffer) {
        let right = CARD_WIDTH - 1;
        fb.hline(0, ROW_TOP, CARD_WIDTH, '─', BORDER);
        fb.hline(0, ROW_SEPARATOR, CARD_WIDTH, '─', BORDER);
        fb.hline(0, ROW_BOTTOM, CARD_WIDTH, '─', BORDER);

        let mut dividers = vec![0];
        dividers.extend((0..=SCORING_FRAMES).map(|i| {
            let (x, w) = column(i);
            x + w
        }));

        for &x in &dividers {
            let (top, mid, bottom) = if x == 0 {
                ('┌', '├', '└')
            } else if x == right {
                ('┐', '┤', '┘')
            } else {
                ('┬', '┼', '┴')
            };
            fb.put_char(x, ROW_TOP, top, BORDER);
            fb.put_char(x, ROW_SEPARATOR, mid, BORDER);
            fb.put_char(x, ROW_BOTTOM, bottom, BORDER);
            for y in [ROW_HEADER, ROW_MARKS, ROW_TOTALS] {
                fb.put_char(x, y, '│', BORDER);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_tile_the_card() {
        assert_eq!(column(0), (1, FRAME_W));
        let (x9, w9) = column(TENTH_FRAME_INDEX);
        let (xt, wt) = column(SCORING_FRAMES);
        assert_eq!(x9 + w9 + 1, xt);
        assert_eq!(xt + wt + 1, CARD_WIDTH);
    }

    #[test]
    fn marks_use_their_own_colors() {
        assert_eq!(mark_style('X'), STRIKE);
        assert_eq!(mark_style('/'), SPARE);
        assert_eq!(mark_style('7'), CellStyle::PLAIN);
    }
}
