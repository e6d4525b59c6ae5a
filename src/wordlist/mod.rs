//! Wordlist discovery, filtering and output generation.
//!
//! Each `words_<id>.txt` file in the input directory defines one wordlist.
//! Its lines are filtered and merged with the shared extra-words files into
//! a deduplicated set, then written out twice: once in the original script
//! and once transliterated, each independently sorted.


use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::pipeline::BuildConfig;
use crate::translit::TranslitTable;

/// Filename prefix of the original-script output (`h<base>.txt`).
pub const ORIGINAL_FILE_PREFIX: char = 'h';
/// Filename prefix of the transliterated output (`e<base>.txt`).
pub const TRANSLIT_FILE_PREFIX: char = 'e';

const COMMENT_MARKER: char = '#';
const EMPHASIS_MARKER: char = '+';

#[derive(Debug, thiserror::Error)]
pub enum WordlistError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("error reading {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("no {prefix}*.txt files found in {dir}")]
    NoSources { prefix: String, dir: PathBuf },
}

/// A discovered wordlist: its identifier, the source file behind it, and an
/// optional license file.
pub struct WordlistSource {
    pub id: String,
    pub file: PathBuf,
    pub license: Option<PathBuf>,
}

/// A wordlist ready to be written: a deduplicated, sorted entry set.
pub struct Wordlist {
    pub id: String,
    pub entries: BTreeSet<String>,
    pub license: Option<PathBuf>,
}

/// Per-list build stats, returned for progress reporting.
pub struct BuiltList {
    pub id: String,
    pub words: usize,
}

/// List wordlist sources in the input directory, sorted by identifier.
///
/// A file qualifies when its name is `<source_prefix><id>.txt`; the license
/// file, when present, is `<license_prefix><id>.txt`.
pub fn discover(config: &BuildConfig) -> Result<Vec<WordlistSource>, WordlistError> {
    let mut sources: Vec<WordlistSource> = fs::read_dir(&config.input_dir)?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            let id = name
                .strip_prefix(&config.source_prefix)?
                .strip_suffix(".txt")?;
            if id.is_empty() {
                return None;
            }
            let license_path = config
                .input_dir
                .join(format!("{}{id}.txt", config.license_prefix));
            Some(WordlistSource {
                id: id.to_string(),
                file: entry.path(),
                license: license_path.exists().then_some(license_path),
            })
        })
        .collect();
    sources.sort_by(|a, b| a.id.cmp(&b.id));

    if sources.is_empty() {
        return Err(WordlistError::NoSources {
            prefix: config.source_prefix.clone(),
            dir: config.input_dir.clone(),
        });
    }

    Ok(sources)
}

fn read_lines(path: &Path) -> Result<Vec<String>, WordlistError> {
    let content = fs::read_to_string(path).map_err(|e| WordlistError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(content.lines().map(|l| l.trim_end().to_string()).collect())
}

/// Filtered candidate entries from a wordlist source file.
///
/// Comment and blank lines are skipped, as are structural lines (headword
/// groupings marked by a hyphen or a quote character). The emphasis marker
/// is stripped from the surviving lines.
fn filtered_entries(path: &Path) -> Result<Vec<String>, WordlistError> {
    let mut entries = Vec::new();
    for line in read_lines(path)? {
        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            continue;
        }
        if line.contains('-') || line.contains('"') {
            continue;
        }
        let entry: String = line.chars().filter(|&c| c != EMPHASIS_MARKER).collect();
        if entry.is_empty() {
            continue;
        }
        entries.push(entry);
    }
    Ok(entries)
}

/// Entries from an extra-words file: only comment and blank lines are
/// skipped, no structural filtering.
fn extra_entries(path: &Path) -> Result<Vec<String>, WordlistError> {
    Ok(read_lines(path)?
        .into_iter()
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_MARKER))
        .collect())
}

/// Merge a source file with the extra-words files into one deduplicated set.
pub fn collect(
    source: &WordlistSource,
    extras: &[PathBuf],
) -> Result<Wordlist, WordlistError> {
    let mut entries: BTreeSet<String> = filtered_entries(&source.file)?.into_iter().collect();
    for extra in extras {
        entries.extend(extra_entries(extra)?);
    }
    Ok(Wordlist {
        id: source.id.clone(),
        entries,
        license: source.license.clone(),
    })
}

/// Remove and recreate the output directory so no stale artifacts survive.
pub fn reset_output_dir(dir: &Path) -> Result<(), WordlistError> {
    match fs::remove_dir_all(dir) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Write a wordlist's output directory: original and transliterated text
/// files plus the license copy.
///
/// The two text files are sorted independently; each is "all entries, in
/// that file's collation". Consumers translate per character through the
/// manifest tables and never pair the files by line position.
pub fn write_outputs(
    list: &Wordlist,
    table: &TranslitTable,
    output_dir: &Path,
    base_name: &str,
) -> Result<(), WordlistError> {
    let dir = output_dir.join(&list.id);
    fs::create_dir_all(&dir)?;

    let originals: Vec<&str> = list.entries.iter().map(String::as_str).collect();
    let mut transliterated: Vec<String> = list
        .entries
        .iter()
        .map(|entry| table.transliterate(entry))
        .collect();
    transliterated.sort();

    fs::write(
        dir.join(format!("{ORIGINAL_FILE_PREFIX}{base_name}.txt")),
        originals.join("\n"),
    )?;
    fs::write(
        dir.join(format!("{TRANSLIT_FILE_PREFIX}{base_name}.txt")),
        transliterated.join("\n"),
    )?;

    if let Some(license) = &list.license {
        fs::copy(license, dir.join("LICENSE"))?;
    }

    Ok(())
}

/// Stage entry point: discover sources, reset the output tree and write
/// every list's artifacts.
pub fn build_all(
    config: &BuildConfig,
    table: &TranslitTable,
) -> Result<Vec<BuiltList>, WordlistError> {
    let sources = discover(config)?;
    reset_output_dir(&config.output_dir)?;

    let extras = config.extra_paths();
    let mut built = Vec::with_capacity(sources.len());
    for source in &sources {
        eprintln!("Processing {}...", source.file.display());
        let list = collect(source, &extras)?;
        write_outputs(&list, table, &config.output_dir, &config.output_name)?;
        tracing::debug!(id = %list.id, words = list.entries.len(), "wordlist written");
        eprintln!("  {} unique words", list.entries.len());
        built.push(BuiltList {
            id: list.id.clone(),
            words: list.entries.len(),
        });
    }
    Ok(built)
}
