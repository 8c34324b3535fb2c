//! Grid-size inference and value-to-locator resolution against the header
//! row of image formulas.

use crate::error::{Error, Result};
use crate::formula::{self, ImageArg};
use crate::source::DataSource;
use crate::types::{CellValue, GridSize};

/// The header scan window is always 6 cells wide; a 4x4 puzzle simply leaves
/// the last two cells without an image formula.
pub const SCAN_WINDOW: usize = 6;

/// Where a puzzle's image formulas live. The column offset drifted between
/// source-format revisions (3- and 4-cell shifts both exist), so it is
/// explicit configuration rather than a constant.
#[derive(Debug, Copy, Clone)]
pub struct ResolverConfig {
    pub header_row: usize,
    pub column_offset: usize,
}

/// Infers the grid size from how many image slots the header row populates.
/// The sheet layout is identical for both sizes, so the count is the only
/// size signal available.
pub fn resolve_grid_size(source: &dyn DataSource, config: &ResolverConfig) -> Result<GridSize> {
    let row = config.header_row;
    let col_start = config.column_offset;

    let mut found = 0;
    for col in col_start..col_start + SCAN_WINDOW {
        let cell = source.cell_formula(row, col)?;
        if formula::image_argument(&cell).is_some() {
            found += 1;
        }
    }

    match found {
        4 => Ok(GridSize::Four),
        6 => Ok(GridSize::Six),
        _ => Err(Error::InvalidGridSize {
            row,
            col_start,
            col_end: col_start + SCAN_WINDOW - 1,
            found,
        }),
    }
}

/// Resolves a puzzle value 1..=N to the locator of its image, following at
/// most one cross-sheet hop.
pub struct CellAddressResolver<'a> {
    source: &'a dyn DataSource,
    config: ResolverConfig,
    size: GridSize,
}

impl<'a> CellAddressResolver<'a> {
    pub fn new(source: &'a dyn DataSource, config: ResolverConfig, size: GridSize) -> Self {
        CellAddressResolver {
            source,
            config,
            size,
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn resolve(&self, value: CellValue) -> Result<String> {
        if value < 1 || value > self.size.max_value() {
            return Err(Error::ValueOutOfRange {
                value,
                max: self.size.max_value(),
            });
        }

        let row = self.config.header_row;
        let col = self.config.column_offset + (value as usize) - 1;

        let cell = self.source.cell_formula(row, col)?;
        let arg = formula::image_argument(&cell).ok_or_else(|| Error::MissingFormula {
            row,
            col,
            found: cell.clone(),
        })?;

        match formula::classify_argument(arg) {
            None => Err(Error::MalformedFormula {
                row,
                col,
                formula: cell,
            }),
            Some(ImageArg::Literal(locator)) => Ok(locator),
            Some(ImageArg::CrossReference(address)) => {
                let cells = self.source.range(&address.sheet, &address.address)?;
                let locator = cells
                    .first()
                    .and_then(|row| row.first())
                    .and_then(|scalar| scalar.as_text());
                match locator {
                    Some(locator) => Ok(locator.to_string()),
                    None => Err(Error::EmptyReference {
                        reference: address.to_string(),
                    }),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Scalar;
    use std::collections::HashMap;

    /// Header-row stub: formulas keyed by column, plus one catalog sheet.
    struct StubSource {
        header: HashMap<usize, String>,
        catalog: HashMap<String, Scalar>,
    }

    impl DataSource for StubSource {
        fn cell_formula(&self, _row: usize, col: usize) -> Result<String> {
            Ok(self.header.get(&col).cloned().unwrap_or_default())
        }

        fn cell_value(&self, _row: usize, _col: usize) -> Result<Scalar> {
            Ok(Scalar::Empty)
        }

        fn num_rows(&self) -> usize {
            1
        }

        fn range(&self, _sheet: &str, a1_range: &str) -> Result<Vec<Vec<Scalar>>> {
            let scalar = self
                .catalog
                .get(a1_range)
                .cloned()
                .unwrap_or(Scalar::Empty);
            Ok(vec![vec![scalar]])
        }

        fn range_bold(&self, _sheet: &str, _a1_range: &str) -> Result<Vec<Vec<bool>>> {
            Ok(vec![vec![false]])
        }
    }

    fn source_with(count: usize) -> StubSource {
        let header = (0..count)
            .map(|i| (4 + i, format!("=image(\"http://x/img{}.png\")", i + 1)))
            .collect();
        StubSource {
            header,
            catalog: HashMap::new(),
        }
    }

    const CONFIG: ResolverConfig = ResolverConfig {
        header_row: 0,
        column_offset: 4,
    };

    #[test]
    fn four_image_cells_mean_a_4x4_grid() {
        let source = source_with(4);
        assert_eq!(resolve_grid_size(&source, &CONFIG).unwrap(), GridSize::Four);
    }

    #[test]
    fn six_image_cells_mean_a_6x6_grid() {
        let source = source_with(6);
        assert_eq!(resolve_grid_size(&source, &CONFIG).unwrap(), GridSize::Six);
    }

    #[test]
    fn five_image_cells_are_ambiguous() {
        let source = source_with(5);
        let err = resolve_grid_size(&source, &CONFIG).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidGridSize {
                found: 5,
                col_start: 4,
                col_end: 9,
                ..
            }
        ));
    }

    #[test]
    fn empty_window_is_ambiguous_too() {
        let source = source_with(0);
        let err = resolve_grid_size(&source, &CONFIG).unwrap_err();
        assert!(matches!(err, Error::InvalidGridSize { found: 0, .. }));
    }

    #[test]
    fn quoted_literal_resolves_directly() {
        let source = source_with(4);
        let resolver = CellAddressResolver::new(&source, CONFIG, GridSize::Four);
        assert_eq!(resolver.resolve(3).unwrap(), "http://x/img3.png");
    }

    #[test]
    fn cross_reference_follows_one_hop() {
        let mut source = source_with(4);
        source
            .header
            .insert(5, "=image(Catalog!B5)".to_string());
        source.catalog.insert(
            "B5".to_string(),
            Scalar::Text("http://x/via-catalog.png".to_string()),
        );

        let resolver = CellAddressResolver::new(&source, CONFIG, GridSize::Four);
        assert_eq!(resolver.resolve(2).unwrap(), "http://x/via-catalog.png");
    }

    #[test]
    fn empty_cross_reference_is_an_error() {
        let mut source = source_with(4);
        source
            .header
            .insert(5, "=image(Catalog!B5)".to_string());

        let resolver = CellAddressResolver::new(&source, CONFIG, GridSize::Four);
        let err = resolver.resolve(2).unwrap_err();
        match err {
            Error::EmptyReference { reference } => assert_eq!(reference, "Catalog!B5"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn non_image_cell_is_a_missing_formula() {
        let mut source = source_with(4);
        source.header.insert(6, "=sum(A1:A4)".to_string());

        let resolver = CellAddressResolver::new(&source, CONFIG, GridSize::Four);
        assert!(matches!(
            resolver.resolve(3).unwrap_err(),
            Error::MissingFormula { col: 6, .. }
        ));
    }

    #[test]
    fn unextractable_argument_is_malformed() {
        let mut source = source_with(4);
        source.header.insert(4, "=image()".to_string());

        let resolver = CellAddressResolver::new(&source, CONFIG, GridSize::Four);
        assert!(matches!(
            resolver.resolve(1).unwrap_err(),
            Error::MalformedFormula { col: 4, .. }
        ));
    }

    #[test]
    fn out_of_range_value_is_rejected() {
        let source = source_with(4);
        let resolver = CellAddressResolver::new(&source, CONFIG, GridSize::Four);
        assert!(matches!(
            resolver.resolve(5).unwrap_err(),
            Error::ValueOutOfRange { value: 5, max: 4 }
        ));
        assert!(matches!(
            resolver.resolve(0).unwrap_err(),
            Error::ValueOutOfRange { value: 0, max: 4 }
        ));
    }
}
