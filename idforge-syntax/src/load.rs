//! Compilation loading from TOML fixtures.

use std::{path::Path, str::FromStr};

use crate::{Compilation, Error, Result};

impl FromStr for Compilation {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_compilation(s, "compilation.toml")
    }
}

impl Compilation {
    /// Load a compilation fixture from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_compilation(&content, &path.display().to_string())
    }

    /// Parse a fixture from a string with a custom filename for error
    /// reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_compilation(content, filename)
    }
}

/// Parse a compilation from fixture content.
pub fn parse_compilation(content: &str, filename: &str) -> Result<Compilation> {
    let compilation: Compilation =
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
    validate_compilation(&compilation, content, filename)?;
    Ok(compilation)
}

/// Validate the compilation after parsing.
fn validate_compilation(compilation: &Compilation, src: &str, filename: &str) -> Result<()> {
    for declaration in &compilation.declarations {
        if declaration.name.trim().is_empty() {
            return Err(Error::validation(
                "declaration has a blank name",
                src,
                filename,
            ));
        }
        for annotation in &declaration.annotations {
            if annotation.path.trim().is_empty() {
                return Err(Error::validation(
                    format!("annotation on '{}' has a blank path", declaration.name),
                    src,
                    filename,
                ));
            }
        }
    }

    for unit in &compilation.units {
        for annotation in &unit.annotations {
            if annotation.path.trim().is_empty() {
                return Err(Error::validation(
                    "assembly-scope annotation has a blank path",
                    src,
                    filename,
                ));
            }
        }
    }

    Ok(())
}
