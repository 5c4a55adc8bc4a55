//! BoardView: maps a [`TermSurface`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). Layout is computed once per frame by
//! [`BoardView::layout`] and shared by drawing and mouse hit-testing, so a
//! click always lands on the cell that is drawn under it.
//!
//! ```text
//!          Time 42s   Pairs 3/8          <- status line
//!   ┌─────────────────────────────┐
//!   │ ░░░░░ ░░░░░ ░░░░░ ░░░░░     │       <- cells, one column / row gap
//!   │ ...                         │
//!   └─────────────────────────────┘
//!        <message line>
//! ```

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::surface::TermSurface;
use crate::types::{CellPosition, Theme};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Gap between neighbouring cells.
const GAP: u16 = 1;

/// Screen placement of the grid for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub status_y: u16,
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    pub message_y: u16,
    cell_w: u16,
    cell_h: u16,
    /// Cell size plus the gap, per column and per row.
    stride_x: u16,
    stride_y: u16,
    rows: u16,
    cols: u16,
}

impl Layout {
    /// Top-left corner of a cell.
    pub fn cell_origin(&self, pos: CellPosition) -> (u16, u16) {
        (
            self.frame_x + 2 + pos.col * self.stride_x,
            self.frame_y + 1 + pos.row * self.stride_y,
        )
    }

    /// Cell under a screen coordinate, if any. Gaps and the border hit nothing.
    pub fn cell_at(&self, x: u16, y: u16) -> Option<CellPosition> {
        let ox = x.checked_sub(self.frame_x + 2)?;
        let oy = y.checked_sub(self.frame_y + 1)?;
        let (col, in_x) = (ox / self.stride_x, ox % self.stride_x);
        let (row, in_y) = (oy / self.stride_y, oy % self.stride_y);
        if col >= self.cols || row >= self.rows || in_x >= self.cell_w || in_y >= self.cell_h {
            return None;
        }
        Some(CellPosition::new(row, col))
    }
}

/// A lightweight terminal renderer for the memory board.
pub struct BoardView {
    theme: Theme,
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl BoardView {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Place the surface's grid in the viewport.
    ///
    /// `None` when there is no grid or the terminal is too small to show it.
    pub fn layout(&self, surface: &TermSurface, viewport: Viewport) -> Option<Layout> {
        let (rows, cols) = (surface.rows(), surface.cols());
        if rows == 0 || cols == 0 {
            return None;
        }
        let cell_w = self.theme.cell_width.max(1);
        let cell_h = self.theme.cell_height.max(1);

        let stride_x = cell_w.checked_add(GAP)?;
        let stride_y = cell_h.checked_add(GAP)?;
        let board_w = cols.checked_mul(stride_x)? - GAP;
        let board_h = rows.checked_mul(stride_y)? - GAP;
        // One column of padding each side inside the border.
        let frame_w = board_w.checked_add(4)?;
        let frame_h = board_h.checked_add(2)?;
        // Status line above, message line below with a blank row between.
        let total_h = frame_h.checked_add(3)?;
        if frame_w > viewport.width || total_h > viewport.height {
            return None;
        }

        let frame_x = (viewport.width - frame_w) / 2;
        let status_y = (viewport.height - total_h) / 2;
        let frame_y = status_y + 1;
        Some(Layout {
            status_y,
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            message_y: frame_y + frame_h + 1,
            cell_w,
            cell_h,
            stride_x,
            stride_y,
            rows,
            cols,
        })
    }

    /// Cell under a terminal coordinate (e.g. a mouse click).
    pub fn cell_at(
        &self,
        surface: &TermSurface,
        viewport: Viewport,
        x: u16,
        y: u16,
    ) -> Option<CellPosition> {
        self.layout(surface, viewport)?.cell_at(x, y)
    }

    /// Render a new framebuffer.
    pub fn render(
        &self,
        surface: &TermSurface,
        cursor: Option<CellPosition>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(surface, cursor, viewport, &mut fb);
        fb
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        surface: &TermSurface,
        cursor: Option<CellPosition>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default());

        let text = CellStyle::new(self.theme.text_fg.into(), Rgb::new(0, 0, 0));

        match self.layout(surface, viewport) {
            Some(layout) => {
                self.draw_status(fb, surface, &layout, viewport, text);
                self.draw_grid(fb, surface, cursor, &layout);
                if let Some(msg) = surface.message() {
                    fb.put_str_centered(0, layout.message_y, viewport.width, msg, text.bold());
                }
            }
            None if surface.has_grid() => {
                fb.put_str_centered(
                    0,
                    viewport.height / 2,
                    viewport.width,
                    "Terminal too small - enlarge the window",
                    text,
                );
            }
            None => {
                let mid = viewport.height / 2;
                if let Some(msg) = surface.message() {
                    fb.put_str_centered(0, mid.saturating_sub(3), viewport.width, msg, text.bold());
                }
                fb.put_str_centered(0, mid.saturating_sub(1), viewport.width, "M E M O R Y", text.bold());
                if surface.start_visible() {
                    fb.put_str_centered(
                        0,
                        mid + 1,
                        viewport.width,
                        "Press Enter to start  ·  q to quit",
                        text,
                    );
                }
            }
        }
    }

    /// Centred on the whole viewport; the line can be wider than a small grid.
    fn draw_status(
        &self,
        fb: &mut FrameBuffer,
        surface: &TermSurface,
        layout: &Layout,
        viewport: Viewport,
        style: CellStyle,
    ) {
        let (score, total) = surface.score();
        let mut line = format!("Time {}s   Pairs {}/{}", surface.time_remaining(), score, total);
        if surface.paused() {
            line.push_str("   [paused]");
        }
        fb.put_str_centered(0, layout.status_y, viewport.width, &line, style);
    }

    fn draw_grid(
        &self,
        fb: &mut FrameBuffer,
        surface: &TermSurface,
        cursor: Option<CellPosition>,
        layout: &Layout,
    ) {
        let border = CellStyle::new(self.theme.border_fg.into(), Rgb::new(0, 0, 0));
        fb.draw_box(layout.frame_x, layout.frame_y, layout.frame_w, layout.frame_h, border);

        for row in 0..surface.rows() {
            for col in 0..surface.cols() {
                let pos = CellPosition::new(row, col);
                let Some(cell) = surface.cell(pos) else {
                    continue;
                };
                let (x, y) = layout.cell_origin(pos);

                let bg: Rgb = if cursor == Some(pos) {
                    self.theme.cursor_bg.into()
                } else if cell.revealed {
                    self.theme.revealed_bg.into()
                } else {
                    self.theme.hidden_bg.into()
                };
                let style = CellStyle::new(self.theme.symbol_fg.into(), bg);
                fb.fill_rect(x, y, layout.cell_w, layout.cell_h, ' ', style);

                let label = match (cell.revealed, cell.symbol) {
                    (true, Some(symbol)) => symbol.to_string(),
                    _ => "?".to_string(),
                };
                let style = if cell.revealed { style.bold() } else { style };
                fb.put_str_centered(x, y + layout.cell_h / 2, layout.cell_w, &label, style);
            }
        }
    }
}
