//! Sequential batch processing: each row of the batch sheet describes one
//! puzzle, which is validated, sliced, rendered, and stamped onto a template
//! copy before the next row starts. Nothing is rolled back on failure.

use clap::ArgEnum;

use crate::cache::{Fetcher, ResourceCache};
use crate::error::{Error, Result};
use crate::grid::{self, GivenPolicy};
use crate::render::{DocumentSink, RenderConfig, RenderDriver};
use crate::resolve::{self, CellAddressResolver, ResolverConfig};
use crate::slice::SliceExtractor;
use crate::source::{DataSource, TemplateSheets};

/// The literal written into given cells of the template copy.
pub const GIVEN_MARKER: &str = "X";

/// What to do with a batch row that has no puzzle name. Both behaviors
/// shipped at different times, so the choice is configuration.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ArgEnum)]
pub enum BatchPolicy {
    /// The first unnamed row ends the batch.
    Stop,
    /// Unnamed rows are skipped; the batch continues.
    Skip,
}

#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub policy: BatchPolicy,
    pub column_offset: usize,
    pub given: GivenPolicy,
    pub render: RenderConfig,
    pub template: String,
    /// First batch row to consider (header rows above it are ignored).
    pub start_row: usize,
}

#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Names of the puzzles rendered, in batch order.
    pub rendered: Vec<String>,
    pub skipped: usize,
}

/// Runs every row of the batch sheet. An unnamed row follows the configured
/// policy; any other failure stops the run after reporting it. Completed
/// puzzles stay in the document store either way.
pub fn run_batch<S>(
    source: &mut S,
    sink: &mut dyn DocumentSink,
    fetcher: &dyn Fetcher,
    config: &BatchConfig,
    mut report: impl FnMut(&str),
) -> Result<BatchOutcome>
where
    S: DataSource + TemplateSheets,
{
    let mut cache = ResourceCache::new(fetcher);
    let mut outcome = BatchOutcome::default();

    for row in config.start_row..source.num_rows() {
        let name = match source.cell_value(row, 0)?.as_text() {
            Some(name) => name.to_string(),
            None => match config.policy {
                BatchPolicy::Stop => break,
                BatchPolicy::Skip => {
                    outcome.skipped += 1;
                    report(&format!("Row {}: no puzzle name, skipping", row + 1));
                    continue;
                }
            },
        };

        match process_row(source, sink, &mut cache, config, row, &name) {
            Ok(()) => {
                report(&format!("Rendered booklet for {}", name));
                outcome.rendered.push(name);
            }
            Err(err) => {
                report(&format!("Row {} ({}) failed: {}", row + 1, name, err));
                return Err(err);
            }
        }
    }

    Ok(outcome)
}

/// Batch row layout: column 0 holds the puzzle name, column 1 a
/// `Sheet!A1:B2` reference to the solved grid, and the image formulas start
/// at the configured column offset.
fn process_row<S>(
    source: &mut S,
    sink: &mut dyn DocumentSink,
    cache: &mut ResourceCache,
    config: &BatchConfig,
    row: usize,
    name: &str,
) -> Result<()>
where
    S: DataSource + TemplateSheets,
{
    let resolver_config = ResolverConfig {
        header_row: row,
        column_offset: config.column_offset,
    };
    let size = resolve::resolve_grid_size(&*source, &resolver_config)?;

    let (grid_sheet, grid_range) = grid_reference(&*source, row)?;
    let values = source.range(&grid_sheet, &grid_range)?;
    let bold = source.range_bold(&grid_sheet, &grid_range)?;

    let puzzle = grid::from_range(&values, &bold, size, config.given)?;
    let solution = grid::from_range(&values, &bold, size, GivenPolicy::All)?;

    {
        let resolver = CellAddressResolver::new(&*source, resolver_config, size);
        let extractor = SliceExtractor::new(&resolver);
        let mut driver = RenderDriver::new(sink, cache, config.render);
        driver.render_booklet(name, &puzzle, &solution, &extractor)?;
    }

    // Stamp the template copy, marking the given subset.
    source.delete_if_exists(name)?;
    source.copy_template(&config.template, name)?;
    for (r, c) in solution.given_cells() {
        source.set_cell(name, r, c, GIVEN_MARKER)?;
    }

    Ok(())
}

fn grid_reference<S: DataSource + ?Sized>(source: &S, row: usize) -> Result<(String, String)> {
    let scalar = source.cell_value(row, 1)?;
    let text = scalar.as_text().ok_or_else(|| {
        Error::Collaborator(format!("row {} has no grid range in column 2", row + 1))
    })?;

    match text.split_once('!') {
        Some((sheet, range)) if !sheet.is_empty() && !range.is_empty() => {
            Ok((sheet.to_string(), range.to_string()))
        }
        _ => Err(Error::Collaborator(format!(
            "row {} grid range {:?} is not a Sheet!Range reference",
            row + 1,
            text
        ))),
    }
}
