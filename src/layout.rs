//! Roster cell placement.
//!
//! Row heights are fixed per template. Long rosters run past the bottom of
//! the canvas rather than shrinking.

use crate::model::TextLayout;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn inset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w - 2.0 * dx, self.h - 2.0 * dy)
    }

    pub fn right(self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn center_y(self) -> f32 {
        self.y + self.h / 2.0
    }

    pub fn tuple(self) -> (f32, f32, f32, f32) {
        (self.x, self.y, self.w, self.h)
    }
}

/// How a sequence of cells is spread over an area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrangement {
    SingleColumn,
    /// Left, right, left, right ...
    Alternating,
    /// First half down the left column, the rest down the right.
    Halved,
    Grid { columns: usize },
}

impl From<TextLayout> for Arrangement {
    fn from(layout: TextLayout) -> Self {
        match layout {
            TextLayout::SingleColumn => Self::SingleColumn,
            TextLayout::TwoColumnAlternating => Self::Alternating,
            TextLayout::TwoColumnHalved => Self::Halved,
            TextLayout::Grid => Self::Grid { columns: 2 },
        }
    }
}

impl Arrangement {
    pub fn columns(self) -> usize {
        match self {
            Self::SingleColumn => 1,
            Self::Alternating | Self::Halved => 2,
            Self::Grid { columns } => columns.max(1),
        }
    }

    /// `(column, row)` of item `index` out of `count`.
    pub fn slot(self, index: usize, count: usize) -> (usize, usize) {
        match self {
            Self::SingleColumn => (0, index),
            Self::Alternating => (index % 2, index / 2),
            Self::Halved => {
                let left = count.div_ceil(2);
                if index < left {
                    (0, index)
                } else {
                    (1, index - left)
                }
            }
            Self::Grid { .. } => {
                let cols = self.columns();
                (index % cols, index / cols)
            }
        }
    }

    pub fn row_count(self, count: usize) -> usize {
        count.div_ceil(self.columns())
    }
}

/// Placement of cell `index`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub index: usize,
    pub rect: Rect,
}

/// Lay `count` cells of height `row_height` over `area`, `gap` apart.
pub fn arrange(
    arrangement: Arrangement,
    count: usize,
    area: Rect,
    row_height: f32,
    gap: f32,
) -> Vec<Cell> {
    let cols = arrangement.columns() as f32;
    let cell_w = (area.w - gap * (cols - 1.0)) / cols;
    (0..count)
        .map(|index| {
            let (col, row) = arrangement.slot(index, count);
            Cell {
                index,
                rect: Rect::new(
                    area.x + col as f32 * (cell_w + gap),
                    area.y + row as f32 * (row_height + gap),
                    cell_w,
                    row_height,
                ),
            }
        })
        .collect()
}

/// Total height taken by `count` cells.
pub fn stack_height(arrangement: Arrangement, count: usize, row_height: f32, gap: f32) -> f32 {
    let rows = arrangement.row_count(count) as f32;
    if rows == 0.0 {
        0.0
    } else {
        rows * row_height + (rows - 1.0) * gap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect::new(0.0, 100.0, 1000.0, 800.0);

    #[test]
    fn single_column_stacks() {
        let cells = arrange(Arrangement::SingleColumn, 3, AREA, 50.0, 10.0);
        assert_eq!(cells[2].rect.y, 220.0);
        assert_eq!(cells[2].rect.w, 1000.0);
    }

    #[test]
    fn alternating_zigzags() {
        let cells = arrange(Arrangement::Alternating, 4, AREA, 50.0, 0.0);
        assert_eq!(cells[0].rect.x, 0.0);
        assert_eq!(cells[1].rect.x, 500.0);
        assert_eq!(cells[1].rect.y, cells[0].rect.y);
        assert_eq!(cells[2].rect.y, 150.0);
    }

    #[test]
    fn halved_fills_left_first() {
        let slots: Vec<_> = (0..5).map(|i| Arrangement::Halved.slot(i, 5)).collect();
        assert_eq!(slots, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1)]);
    }

    #[test]
    fn grid_rows() {
        let grid = Arrangement::Grid { columns: 3 };
        assert_eq!(grid.row_count(8), 3);
        assert_eq!(grid.slot(4, 8), (1, 1));
        assert_eq!(stack_height(grid, 8, 100.0, 10.0), 320.0);
        assert_eq!(stack_height(grid, 0, 100.0, 10.0), 0.0);
    }
}
