//! Console: prints prompts, replies and scorecards to a terminal stream.
//!
//! Output is line-oriented and inline (no raw mode, no alternate screen), so
//! it still reads well when stdout is a pipe. Colors go through crossterm
//! commands and are skipped entirely when color is off.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::core::GameSnapshot;
use crate::engine::Reply;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::GameView;

const WARNING: CellStyle = CellStyle::fg(Rgb::new(240, 180, 60));
const NOTICE: CellStyle = CellStyle::fg(Rgb::new(120, 200, 120)).bold();

pub struct Console<W: Write> {
    out: W,
    color: bool,
    view: GameView,
    buf: Vec<u8>,
}

impl Console<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            view: GameView::default(),
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print a prompt without a trailing newline.
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print(text))?;
        self.flush_buf()
    }

    /// Print one reply in its matching style.
    pub fn reply(&mut self, reply: &Reply) -> Result<()> {
        match reply {
            Reply::Card(snap) => self.card(snap),
            Reply::GameFinished { .. } => self.line(&reply.to_string(), NOTICE),
            _ if reply.is_warning() => self.line(&reply.to_string(), WARNING),
            _ => self.line(&reply.to_string(), CellStyle::PLAIN),
        }
    }

    pub fn card(&mut self, snap: &GameSnapshot) -> Result<()> {
        let fb = self.view.render(snap);
        self.draw(&fb)
    }

    /// Print a (possibly multi-line) message followed by a newline.
    pub fn line(&mut self, text: &str, style: CellStyle) -> Result<()> {
        self.buf.clear();
        apply_style_into(&mut self.buf, style, self.color)?;
        self.buf.queue(Print(text))?;
        reset_into(&mut self.buf, self.color)?;
        self.buf.queue(Print("\n"))?;
        self.flush_buf()
    }

    /// Print a framebuffer row by row.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_lines_into(fb, &mut self.buf, self.color)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode a framebuffer as plain lines into `out`.
///
/// Style changes are only emitted between runs of differently styled cells,
/// and trailing blanks of each row are dropped.
pub fn encode_lines_into(fb: &FrameBuffer, out: &mut Vec<u8>, color: bool) -> Result<()> {
    for y in 0..fb.height() {
        let row = fb.row(y);
        let end = row
            .iter()
            .rposition(|cell| cell.ch != ' ')
            .map(|i| i + 1)
            .unwrap_or(0);

        let mut current_style: Option<CellStyle> = None;
        for cell in &row[..end] {
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style, color)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        reset_into(out, color)?;
        out.queue(Print("\n"))?;
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle, color: bool) -> Result<()> {
    if !color {
        return Ok(());
    }
    out.queue(SetAttribute(Attribute::Reset))?;
    match style.fg {
        Some(rgb) => out.queue(SetForegroundColor(rgb_to_color(rgb)))?,
        None => out.queue(ResetColor)?,
    };
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn reset_into(out: &mut Vec<u8>, color: bool) -> Result<()> {
    if color {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
