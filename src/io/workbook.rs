//! A JSON-file workbook: named sheets of `{v, f, b}` cell records. This is
//! the concrete data source and template store the CLI runs against.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::formula;
use crate::source::{DataSource, Scalar, TemplateSheets};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CellRecord {
    /// The cell's scalar value.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub v: Value,
    /// The cell's formula text, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub f: Option<String>,
    /// Bold styling; the source's "given clue" signal.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub b: bool,
}

impl CellRecord {
    fn scalar(&self) -> Scalar {
        match &self.v {
            Value::Null => Scalar::Empty,
            Value::Number(n) => match n.as_f64() {
                Some(n) => Scalar::Number(n),
                None => Scalar::Empty,
            },
            Value::String(s) => Scalar::Text(s.clone()),
            other => Scalar::Text(other.to_string()),
        }
    }
}

type Sheet = Vec<Vec<CellRecord>>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workbook {
    /// Name of the batch sheet.
    pub active: String,
    pub sheets: BTreeMap<String, Sheet>,
}

impl Workbook {
    pub fn from_json(json: &str) -> Result<Workbook> {
        let workbook: Workbook =
            serde_json::from_str(json).map_err(|e| Error::collaborator("workbook parse", e))?;
        if !workbook.sheets.contains_key(&workbook.active) {
            return Err(Error::Collaborator(format!(
                "active sheet {:?} not present in workbook",
                workbook.active
            )));
        }
        Ok(workbook)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::collaborator("workbook write", e))
    }

    fn sheet(&self, name: &str) -> Result<&Sheet> {
        self.sheets
            .get(name)
            .ok_or_else(|| Error::Collaborator(format!("no sheet named {:?}", name)))
    }

    fn active_sheet(&self) -> &Sheet {
        // Checked at load time.
        &self.sheets[&self.active]
    }

    fn record(sheet: &Sheet, row: usize, col: usize) -> Option<&CellRecord> {
        sheet.get(row).and_then(|r| r.get(col))
    }
}

impl DataSource for Workbook {
    fn cell_formula(&self, row: usize, col: usize) -> Result<String> {
        Ok(Self::record(self.active_sheet(), row, col)
            .and_then(|cell| cell.f.clone())
            .unwrap_or_default())
    }

    fn cell_value(&self, row: usize, col: usize) -> Result<Scalar> {
        Ok(Self::record(self.active_sheet(), row, col)
            .map(CellRecord::scalar)
            .unwrap_or(Scalar::Empty))
    }

    fn num_rows(&self) -> usize {
        self.active_sheet().len()
    }

    fn range(&self, sheet: &str, a1_range: &str) -> Result<Vec<Vec<Scalar>>> {
        let sheet_data = self.sheet(sheet)?;
        let (row_start, col_start, row_end, col_end) = parse_range(sheet, a1_range)?;

        Ok((row_start..=row_end)
            .map(|r| {
                (col_start..=col_end)
                    .map(|c| {
                        Self::record(sheet_data, r, c)
                            .map(CellRecord::scalar)
                            .unwrap_or(Scalar::Empty)
                    })
                    .collect()
            })
            .collect())
    }

    fn range_bold(&self, sheet: &str, a1_range: &str) -> Result<Vec<Vec<bool>>> {
        let sheet_data = self.sheet(sheet)?;
        let (row_start, col_start, row_end, col_end) = parse_range(sheet, a1_range)?;

        Ok((row_start..=row_end)
            .map(|r| {
                (col_start..=col_end)
                    .map(|c| {
                        Self::record(sheet_data, r, c)
                            .map(|cell| cell.b)
                            .unwrap_or(false)
                    })
                    .collect()
            })
            .collect())
    }
}

impl TemplateSheets for Workbook {
    fn delete_if_exists(&mut self, name: &str) -> Result<()> {
        self.sheets.remove(name);
        Ok(())
    }

    fn copy_template(&mut self, template: &str, name: &str) -> Result<()> {
        let copy = self.sheet(template)?.clone();
        self.sheets.insert(name.to_string(), copy);
        Ok(())
    }

    fn set_cell(&mut self, sheet: &str, row: usize, col: usize, value: &str) -> Result<()> {
        let sheet_data = self
            .sheets
            .get_mut(sheet)
            .ok_or_else(|| Error::Collaborator(format!("no sheet named {:?}", sheet)))?;

        if sheet_data.len() <= row {
            sheet_data.resize(row + 1, Vec::new());
        }
        let row_data = &mut sheet_data[row];
        if row_data.len() <= col {
            row_data.resize(col + 1, CellRecord::default());
        }
        row_data[col].v = Value::String(value.to_string());
        Ok(())
    }
}

fn parse_range(sheet: &str, a1_range: &str) -> Result<(usize, usize, usize, usize)> {
    formula::parse_a1_range(a1_range).ok_or_else(|| {
        Error::Collaborator(format!("bad range {:?} for sheet {:?}", a1_range, sheet))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORKBOOK: &str = r#"{
        "active": "Puzzles",
        "sheets": {
            "Puzzles": [
                [
                    {"v": "Animals"},
                    {"v": "Grids!A1:B2"},
                    {"f": "=image(\"http://x/1.png\")"}
                ]
            ],
            "Grids": [
                [{"v": 1, "b": true}, {"v": 2}],
                [{"v": 2}, {"v": 1, "b": true}]
            ]
        }
    }"#;

    #[test]
    fn reads_cells_and_ranges() {
        let workbook = Workbook::from_json(WORKBOOK).unwrap();

        assert_eq!(
            workbook.cell_value(0, 0).unwrap(),
            Scalar::Text("Animals".to_string())
        );
        assert_eq!(
            workbook.cell_formula(0, 2).unwrap(),
            "=image(\"http://x/1.png\")"
        );
        assert_eq!(workbook.num_rows(), 1);

        let values = workbook.range("Grids", "A1:B2").unwrap();
        assert_eq!(values[0][0], Scalar::Number(1.0));
        assert_eq!(values[1][1], Scalar::Number(1.0));

        let bold = workbook.range_bold("Grids", "A1:B2").unwrap();
        assert_eq!(bold, vec![vec![true, false], vec![false, true]]);
    }

    #[test]
    fn out_of_bounds_cells_read_as_empty() {
        let workbook = Workbook::from_json(WORKBOOK).unwrap();
        assert_eq!(workbook.cell_value(7, 7).unwrap(), Scalar::Empty);
        assert_eq!(workbook.cell_formula(7, 7).unwrap(), "");
    }

    #[test]
    fn missing_active_sheet_is_rejected() {
        let err = Workbook::from_json(r#"{"active": "Nope", "sheets": {}}"#).unwrap_err();
        assert!(matches!(err, Error::Collaborator(_)));
    }

    #[test]
    fn template_copy_and_marking() {
        let mut workbook = Workbook::from_json(WORKBOOK).unwrap();

        workbook.copy_template("Grids", "Animals").unwrap();
        workbook.set_cell("Animals", 0, 0, "X").unwrap();
        workbook.set_cell("Animals", 3, 3, "X").unwrap();

        let copy = workbook.range("Animals", "A1:D4").unwrap();
        assert_eq!(copy[0][0], Scalar::Text("X".to_string()));
        assert_eq!(copy[3][3], Scalar::Text("X".to_string()));
        // The original is untouched.
        assert_eq!(
            workbook.range("Grids", "A1:A1").unwrap()[0][0],
            Scalar::Number(1.0)
        );

        workbook.delete_if_exists("Animals").unwrap();
        assert!(workbook.range("Animals", "A1:A1").is_err());
        workbook.delete_if_exists("Animals").unwrap();
    }
}
