//! Writing emissions to disk.

use std::path::{Path, PathBuf};

use eyre::Result;
use idforge_ir::Emission;

/// Writes generated artifacts under an output directory.
///
/// Artifacts are generated code and always overwritten; parent directories
/// are created as needed.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    root: PathBuf,
}

impl ArtifactWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The output directory artifacts are written under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write one emission, returning the path it landed at.
    pub fn write(&self, emission: &Emission) -> Result<PathBuf> {
        let path = self.root.join(&emission.artifact_name);
        write_file(&path, &emission.source_text)?;
        Ok(path)
    }

    /// Write every emission, returning the paths in input order.
    pub fn write_all(&self, emissions: &[Emission]) -> Result<Vec<PathBuf>> {
        emissions.iter().map(|e| self.write(e)).collect()
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_creates_directories() {
        let temp = TempDir::new().unwrap();
        let writer = ArtifactWriter::new(temp.path().join("generated"));

        let emission = Emission::new("Shop.OrderId.g.cs", "struct OrderId { }\n");
        let path = writer.write(&emission).unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "struct OrderId { }\n");
    }

    #[test]
    fn test_write_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let writer = ArtifactWriter::new(temp.path());

        writer
            .write(&Emission::new("A.g.cs", "first"))
            .unwrap();
        let path = writer.write(&Emission::new("A.g.cs", "second")).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_all_preserves_order() {
        let temp = TempDir::new().unwrap();
        let writer = ArtifactWriter::new(temp.path());

        let emissions = vec![
            Emission::new("A.g.cs", "a"),
            Emission::new("B.g.cs", "b"),
        ];
        let paths = writer.write_all(&emissions).unwrap();
        assert_eq!(paths.len(), 2);
        assert!(paths[0].ends_with("A.g.cs"));
        assert!(paths[1].ends_with("B.g.cs"));
    }
}
