//! Grid layout for the `grid` demo.

use stagehand_common::{Geometry, Size};
use stagehand_engine::SpawnRequest;

/// Rows and columns of equal cells inside a margin, separated by `gap`.
#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    pub rows: u32,
    pub cols: u32,
    pub screen: Size,
    pub margin: u32,
    pub gap: u32,
}

impl GridLayout {
    /// Size of one cell; zero when margins and gaps eat the whole screen.
    pub fn cell_size(&self) -> Size {
        let avail = |total: u32, n: u32| {
            total
                .saturating_sub(self.margin.saturating_mul(2))
                .saturating_sub(n.saturating_sub(1).saturating_mul(self.gap))
                / n.max(1)
        };
        Size::new(
            avail(self.screen.width, self.cols),
            avail(self.screen.height, self.rows),
        )
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> Vec<Geometry> {
        let cell = self.cell_size();
        let step = |n: u32, len: u32| {
            let offset = n.saturating_mul(len.saturating_add(self.gap));
            i32::try_from(self.margin.saturating_add(offset)).unwrap_or(i32::MAX)
        };
        (0..self.rows)
            .flat_map(|r| (0..self.cols).map(move |c| (r, c)))
            .map(|(r, c)| {
                Geometry::new(
                    step(c, cell.width),
                    step(r, cell.height),
                    cell.width,
                    cell.height,
                )
            })
            .collect()
    }

    /// One labelled terminal per cell, titled `GridWin_<n>` from 1.
    pub fn requests(&self, terminal: &str) -> Vec<SpawnRequest> {
        self.cells()
            .into_iter()
            .enumerate()
            .map(|(i, geometry)| {
                let n = i + 1;
                let title = window_title(n);
                SpawnRequest::new(
                    format!("{terminal} --title={title} -e sh -c 'echo {n}; sleep infinity'"),
                    stagehand_engine::TitleExact(title),
                    geometry,
                )
            })
            .collect()
    }
}

/// Prefix shared by every grid window title.
pub const TITLE_PREFIX: &str = "GridWin_";

pub fn window_title(n: usize) -> String {
    format!("{TITLE_PREFIX}{n}")
}
