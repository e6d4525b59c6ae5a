//! Sequential build pipeline: text outputs → DAWG encoding → manifest.
//!
//! Four non-retrying batch stages. The first error aborts the run; output
//! already written by earlier stages is left in place for inspection.

use std::path::PathBuf;

use crate::encoder::{DawgEncoder, EncodeError};
use crate::manifest::{self, Manifest, ManifestError};
use crate::translit::TranslitTable;
use crate::wordlist::{self, WordlistError};

pub const DEFAULT_OUTPUT_NAME: &str = "HebDict";
pub const DEFAULT_SOURCE_PREFIX: &str = "words_";
pub const DEFAULT_LICENSE_PREFIX: &str = "license_";
pub const DEFAULT_EXTRA_FILES: [&str; 2] = ["extrawords.txt", "customwords.txt"];

/// Everything a run needs to know about its filesystem layout and naming.
/// Constructed once and borrowed by every stage.
pub struct BuildConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Base name of the per-list output files (`h<name>.txt`, `e<name>.txt`).
    pub output_name: String,
    /// Filename prefix marking a file as a wordlist source.
    pub source_prefix: String,
    /// Filename prefix marking a file as a wordlist's license.
    pub license_prefix: String,
    /// Fixed-name files whose entries are merged into every list unfiltered.
    pub extra_files: Vec<String>,
}

impl BuildConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        BuildConfig {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
            source_prefix: DEFAULT_SOURCE_PREFIX.to_string(),
            license_prefix: DEFAULT_LICENSE_PREFIX.to_string(),
            extra_files: DEFAULT_EXTRA_FILES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Paths of the extra-words files that actually exist in the input dir.
    pub fn extra_paths(&self) -> Vec<PathBuf> {
        self.extra_files
            .iter()
            .map(|name| self.input_dir.join(name))
            .filter(|path| path.exists())
            .collect()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("wordlist stage failed: {0}")]
    Wordlist(#[from] WordlistError),

    #[error("encode stage failed: {0}")]
    Encode(#[from] EncodeError),

    #[error("manifest stage failed: {0}")]
    Manifest(#[from] ManifestError),
}

/// Run the whole pipeline and write the manifest.
///
/// The encoder is passed as a trait object so tests can substitute a fake
/// for the external tool.
pub fn run(
    config: &BuildConfig,
    table: &TranslitTable,
    encoder: &dyn DawgEncoder,
) -> Result<Manifest, PipelineError> {
    tracing::info!(input = %config.input_dir.display(), "build started");

    wordlist::build_all(config, table)?;
    encoder.encode(&config.output_dir)?;

    let manifest = manifest::build(&config.output_dir, table, &config.output_name)?;
    manifest::write(&manifest, &config.output_dir)?;

    tracing::info!(lists = manifest.wordlists.len(), "build finished");
    Ok(manifest)
}
