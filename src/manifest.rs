//! Manifest synthesis: representation selection and `config.json`.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::translit::TranslitTable;
use crate::wordlist::TRANSLIT_FILE_PREFIX;

/// Filename of the manifest document inside the output directory.
pub const MANIFEST_FILENAME: &str = "config.json";

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("missing {kind} artifact for wordlist '{list}': {path}")]
    MissingArtifact {
        list: String,
        kind: &'static str,
        path: PathBuf,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The representation a runtime consumer should load for a wordlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    Txt,
    Dawg,
}

impl Representation {
    pub fn extension(self) -> &'static str {
        match self {
            Representation::Txt => "txt",
            Representation::Dawg => "dawg",
        }
    }
}

/// Pick the smaller representation; a tie favors plain text.
pub fn select_representation(text_size: u64, dawg_size: u64) -> Representation {
    if text_size <= dawg_size {
        Representation::Txt
    } else {
        Representation::Dawg
    }
}

#[derive(Debug, Serialize)]
pub struct ListSource {
    #[serde(rename = "type")]
    pub kind: Representation,
    pub filename: String,
}

/// The build's final output: per-list representation choices plus the
/// mapping tables a runtime needs to translate user input.
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub translate_mapping: BTreeMap<String, String>,
    pub reverse_translate_mapping: BTreeMap<String, String>,
    pub wordlists: BTreeMap<String, ListSource>,
}

fn artifact_size(path: &Path, list: &str, kind: &'static str) -> Result<u64, ManifestError> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.len()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ManifestError::MissingArtifact {
            list: list.to_string(),
            kind,
            path: path.to_path_buf(),
        }),
        Err(e) => Err(e.into()),
    }
}

/// Inspect every wordlist directory under `output_dir` and assemble the
/// manifest. Requires the encode stage to have run: a list without a trie
/// file is a consistency error.
pub fn build(
    output_dir: &Path,
    table: &TranslitTable,
    base_name: &str,
) -> Result<Manifest, ManifestError> {
    let base = format!("{TRANSLIT_FILE_PREFIX}{base_name}");

    let mut wordlists = BTreeMap::new();
    for entry in fs::read_dir(output_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let id = entry.file_name().to_string_lossy().into_owned();

        let text_size = artifact_size(&entry.path().join(format!("{base}.txt")), &id, "text")?;
        let dawg_size = artifact_size(&entry.path().join(format!("{base}.dawg")), &id, "dawg")?;

        let kind = select_representation(text_size, dawg_size);
        tracing::debug!(id = %id, text_size, dawg_size, ?kind, "representation selected");
        wordlists.insert(
            id,
            ListSource {
                kind,
                filename: format!("{base}.{}", kind.extension()),
            },
        );
    }

    Ok(Manifest {
        translate_mapping: table.forward().clone(),
        reverse_translate_mapping: table.inverse().clone(),
        wordlists,
    })
}

/// Serialize the manifest to `config.json` in the output directory.
pub fn write(manifest: &Manifest, output_dir: &Path) -> Result<PathBuf, ManifestError> {
    let path = output_dir.join(MANIFEST_FILENAME);
    fs::write(&path, serde_json::to_string_pretty(manifest)?)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::translit::TranslitTable;

    #[test]
    fn test_select_representation() {
        assert_eq!(select_representation(10, 20), Representation::Txt);
        assert_eq!(select_representation(20, 20), Representation::Txt);
        assert_eq!(select_representation(21, 20), Representation::Dawg);
        assert_eq!(select_representation(0, 0), Representation::Txt);
    }

    #[test]
    fn test_build_selects_smaller_file_per_list() {
        let dir = tempfile::tempdir().unwrap();

        // List a: trie smaller than text.
        let a = dir.path().join("a");
        fs::create_dir(&a).unwrap();
        fs::write(a.join("eHebDict.txt"), "aaaaaaaaaa").unwrap();
        fs::write(a.join("eHebDict.dawg"), "bb").unwrap();

        // List b: text and trie equal in size.
        let b = dir.path().join("b");
        fs::create_dir(&b).unwrap();
        fs::write(b.join("eHebDict.txt"), "cc").unwrap();
        fs::write(b.join("eHebDict.dawg"), "dd").unwrap();

        let table = TranslitTable::default();
        let manifest = build(dir.path(), &table, "HebDict").unwrap();

        assert_eq!(manifest.wordlists["a"].kind, Representation::Dawg);
        assert_eq!(manifest.wordlists["a"].filename, "eHebDict.dawg");
        assert_eq!(manifest.wordlists["b"].kind, Representation::Txt);
        assert_eq!(manifest.wordlists["b"].filename, "eHebDict.txt");
    }

    #[test]
    fn test_build_fails_without_trie_file() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a");
        fs::create_dir(&a).unwrap();
        fs::write(a.join("eHebDict.txt"), "words").unwrap();

        let table = TranslitTable::default();
        let err = build(dir.path(), &table, "HebDict").unwrap_err();
        assert!(matches!(
            err,
            ManifestError::MissingArtifact { kind: "dawg", .. }
        ));
    }

    #[test]
    fn test_build_ignores_stray_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.json"), "{}").unwrap();

        let table = TranslitTable::default();
        let manifest = build(dir.path(), &table, "HebDict").unwrap();
        assert!(manifest.wordlists.is_empty());
    }

    #[test]
    fn test_write_produces_consumable_json() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a");
        fs::create_dir(&a).unwrap();
        fs::write(a.join("eHebDict.txt"), "x").unwrap();
        fs::write(a.join("eHebDict.dawg"), "yy").unwrap();

        let table = TranslitTable::default();
        let manifest = build(dir.path(), &table, "HebDict").unwrap();
        let path = write(&manifest, dir.path()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value["translate_mapping"]["ש"], "S");
        assert_eq!(value["reverse_translate_mapping"]["S"], "ש");
        assert_eq!(value["wordlists"]["a"]["type"], "txt");
        assert_eq!(value["wordlists"]["a"]["filename"], "eHebDict.txt");
    }
}
