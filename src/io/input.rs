use std::io::Read;
use std::{fs, io};

/// Reads the workbook file, or stdin when the path is `-`.
pub fn load(input: &str) -> Result<String, io::Error> {
    if input == "-" {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }

    fs::read_to_string(input)
}
