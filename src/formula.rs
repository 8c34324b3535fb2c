//! The tiny `=image(...)` grammar the spreadsheet uses to attach a picture to
//! a value, plus `Sheet!A1` address parsing for the cross-sheet indirection.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

/// A symbolic cell address in a named sheet, e.g. `Catalog!B5`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetAddress {
    pub sheet: String,
    pub address: String,
}

impl fmt::Display for SheetAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}!{}", self.sheet, self.address)
    }
}

/// The single argument of an image formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageArg {
    /// A locator usable as-is.
    Literal(String),
    /// One more hop: the locator lives in the referenced cell.
    CrossReference(SheetAddress),
}

/// Extracts the raw argument of an `=image(...)` formula, or `None` if the
/// cell does not hold one.
pub fn image_argument(formula: &str) -> Option<&str> {
    lazy_static! {
        static ref IMAGE_REGEX: Regex =
            Regex::new("(?i)^\\s*=\\s*image\\s*\\((.*)\\)\\s*$").unwrap();
    }

    IMAGE_REGEX
        .captures(formula)
        .map(|cap| cap.get(1).unwrap().as_str().trim())
}

/// Classifies an extracted argument, or `None` if it cannot be made sense of.
pub fn classify_argument(arg: &str) -> Option<ImageArg> {
    lazy_static! {
        static ref QUOTED_REGEX: Regex = Regex::new("^\"(.*)\"$").unwrap();
        static ref CROSS_REF_REGEX: Regex =
            Regex::new("^([A-Za-z_][A-Za-z0-9_ ]*)!([A-Za-z]+[0-9]+)$").unwrap();
    }

    if arg.is_empty() {
        return None;
    }

    if let Some(cap) = QUOTED_REGEX.captures(arg) {
        return Some(ImageArg::Literal(cap[1].to_string()));
    }

    // An unterminated quote is the one malformed shape seen in practice.
    if arg.contains('"') {
        return None;
    }

    if let Some(cap) = CROSS_REF_REGEX.captures(arg) {
        return Some(ImageArg::CrossReference(SheetAddress {
            sheet: cap[1].trim().to_string(),
            address: cap[2].to_uppercase(),
        }));
    }

    // Any other unquoted content is taken verbatim.
    Some(ImageArg::Literal(arg.to_string()))
}

/// Parses a bare A1 address like `B5` into 0-indexed `(row, col)`.
pub fn parse_a1(address: &str) -> Option<(usize, usize)> {
    lazy_static! {
        static ref A1_REGEX: Regex = Regex::new("^([A-Za-z]+)([0-9]+)$").unwrap();
    }

    let cap = A1_REGEX.captures(address)?;

    let mut col: usize = 0;
    for c in cap[1].chars() {
        col = col * 26 + (c.to_ascii_uppercase() as usize - 'A' as usize + 1);
    }

    let row = cap[2].parse::<usize>().ok().filter(|&r| r > 0)?;
    Some((row - 1, col - 1))
}

/// Parses `A1` or `A1:F6` into an inclusive 0-indexed rectangle
/// `(row_start, col_start, row_end, col_end)`.
pub fn parse_a1_range(range: &str) -> Option<(usize, usize, usize, usize)> {
    match range.split_once(':') {
        None => {
            let (row, col) = parse_a1(range)?;
            Some((row, col, row, col))
        }
        Some((start, end)) => {
            let (row_start, col_start) = parse_a1(start)?;
            let (row_end, col_end) = parse_a1(end)?;
            if row_end < row_start || col_end < col_start {
                return None;
            }
            Some((row_start, col_start, row_end, col_end))
        }
    }
}
