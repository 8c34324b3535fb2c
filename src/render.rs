//! Turns ordered slices into document sections through the sink interface.
//! Physical layout belongs to the document product; this module only decides
//! section order and wording.

use std::fmt;

use crate::cache::ResourceCache;
use crate::error::Result;
use crate::slice::{Slice, SliceExtractor};
use crate::topology;
use crate::types::Grid;

/// Sequential write access to the external document product. Images append
/// to the most recently started paragraph.
pub trait DocumentSink {
    fn create_document(&mut self, title: &str) -> Result<()>;
    fn heading(&mut self, text: &str) -> Result<()>;
    fn paragraph(&mut self, text: &str) -> Result<()>;
    fn image(&mut self, bytes: &[u8], width: u32, height: u32) -> Result<()>;
    fn page_break(&mut self) -> Result<()>;
    fn rule(&mut self) -> Result<()>;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    Rows,
    Columns,
    Groups,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::Rows => "ROWS",
            Axis::Columns => "COLUMNS",
            Axis::Groups => "GROUPS",
        })
    }
}

/// The two fixed section-title phrasings; which one prints is a single
/// configuration bit.
pub fn section_title(axis: Axis, inclusive: bool) -> String {
    if inclusive {
        format!("{} may only contain one of these values", axis)
    } else {
        format!("{} must not contain any of these values", axis)
    }
}

#[derive(Debug, Copy, Clone)]
pub struct RenderConfig {
    /// Selects the "may only contain" phrasing over "must not contain".
    pub inclusive_titles: bool,
    /// Pass-through dimensions for every appended image.
    pub image_width: u32,
    pub image_height: u32,
}

pub struct RenderDriver<'a, 'b> {
    sink: &'a mut dyn DocumentSink,
    cache: &'a mut ResourceCache<'b>,
    config: RenderConfig,
}

impl<'a, 'b> RenderDriver<'a, 'b> {
    pub fn new(
        sink: &'a mut dyn DocumentSink,
        cache: &'a mut ResourceCache<'b>,
        config: RenderConfig,
    ) -> Self {
        RenderDriver {
            sink,
            cache,
            config,
        }
    }

    /// Renders one puzzle's full booklet: the three constraint sections, the
    /// reference page, and the solution page.
    pub fn render_booklet(
        &mut self,
        title: &str,
        puzzle: &Grid,
        solution: &Grid,
        extractor: &SliceExtractor,
    ) -> Result<()> {
        self.sink.create_document(title)?;

        let size = puzzle.size();
        let boundaries = topology::boundaries_for(size);

        self.render_axis(Axis::Rows, &extractor.row_slices(puzzle)?)?;
        self.render_axis(Axis::Columns, &extractor.column_slices(puzzle)?)?;
        self.render_axis(Axis::Groups, &extractor.group_slices(puzzle, &boundaries)?)?;

        // Reference page: one row per value, each image repeated N times.
        self.sink.page_break()?;
        self.sink.heading("REFERENCE")?;
        let reference = extractor.reference_slice(size)?;
        for row in reference.entries.chunks(size.side_len()) {
            self.sink.paragraph("")?;
            for entry in row {
                self.render_image(&entry.locator)?;
            }
        }

        // Solution page: the solved grid as text.
        self.sink.page_break()?;
        self.sink.heading("SOLUTION")?;
        self.sink.paragraph(&grid_text(solution))?;

        Ok(())
    }

    fn render_axis(&mut self, axis: Axis, slices: &[Slice]) -> Result<()> {
        self.sink
            .heading(&section_title(axis, self.config.inclusive_titles))?;

        for (i, slice) in slices.iter().enumerate() {
            self.sink.paragraph(&format!("{} {}", axis_label(axis), i + 1))?;
            for entry in &slice.entries {
                self.render_image(&entry.locator)?;
            }
        }

        self.sink.rule()?;
        Ok(())
    }

    fn render_image(&mut self, locator: &str) -> Result<()> {
        let resource = self.cache.get(locator)?;
        self.sink.image(
            &resource.bytes,
            self.config.image_width,
            self.config.image_height,
        )
    }
}

fn axis_label(axis: Axis) -> &'static str {
    match axis {
        Axis::Rows => "Row",
        Axis::Columns => "Column",
        Axis::Groups => "Group",
    }
}

/// The solved grid as padded text, dot for an empty cell.
pub fn grid_text(grid: &Grid) -> String {
    let mut output = String::new();

    let n = grid.size().side_len();
    let pad_size = grid.size().max_value().to_string().len() + 1;

    for r in 0..n {
        for c in 0..n {
            let display = match grid.cell(r, c) {
                None => ".".to_string(),
                Some(cell) => cell.value.to_string(),
            };
            (0..pad_size - display.len()).for_each(|_| output.push(' '));
            output.push_str(&display);
        }
        output.push('\n');
    }

    output
}
