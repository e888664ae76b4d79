// src/file.rs

use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::write_table;
use crate::error::ExportError;
use crate::table::LinesTable;

/// Write the table to the path implied by `export`. Returns the final path.
pub fn export_table(export: &ExportOptions, table: &LinesTable) -> Result<PathBuf, ExportError> {
    let path = resolve_single_out_path(export.out.as_deref(), &export.default_filename())?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(&path)?; // truncate/overwrite
    write_table(BufWriter::new(file), table, export.format, export.include_headers)?;
    Ok(path)
}

/// `None` or empty → default file name in the working directory.
/// A directory (existing, or hinted with a trailing separator) gets the
/// default file name appended.
pub fn resolve_single_out_path(user_o: Option<&Path>, default_filename: &str) -> Result<PathBuf, ExportError> {
    let Some(user_o) = user_o.filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(PathBuf::from(default_filename));
    };
    let p = PathBuf::from(normalize_separators(&user_o.to_string_lossy()));
    if looks_like_dir_hint(&p) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(default_filename))
    } else {
        Ok(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_when_unset() {
        assert_eq!(resolve_single_out_path(None, "lines.csv").unwrap(), PathBuf::from("lines.csv"));
        assert_eq!(
            resolve_single_out_path(Some(Path::new("")), "lines.csv").unwrap(),
            PathBuf::from("lines.csv")
        );
    }

    #[test]
    fn dir_hint_gets_default_name() {
        let tmp = tempfile::tempdir().unwrap();
        let hint = format!("{}/out/", tmp.path().display());
        let p = resolve_single_out_path(Some(Path::new(&hint)), "lines.tsv").unwrap();
        assert!(p.ends_with("lines.tsv"));
        assert!(tmp.path().join("out").is_dir());
    }

    #[test]
    fn existing_file_is_not_a_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let f = tmp.path().join("taken");
        fs::write(&f, "x").unwrap();
        let err = ensure_directory(&f).unwrap_err();
        assert!(matches!(err, ExportError::NotADirectory(_)));
    }
}
