//! Invocation of the external DAWG batch encoder.
//!
//! The encoder itself is an external tool with a pinned toolchain, run
//! inside a Docker image so builds are reproducible across machines. The
//! pipeline only depends on its contract: for every prepared text file under
//! the mounted wordlist directory it writes a same-named `.dawg` file, and
//! its exit status is the sole success signal.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Default tag for the encoder image.
pub const DEFAULT_IMAGE_TAG: &str = "lastword_dict";

const ENCODE_SCRIPT: &str = "./dawg_encode.sh";

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to build encoder image: {0}")]
    ImageBuild(String),

    #[error("DAWG encoding failed: {0}")]
    Run(String),
}

/// A batch encoder that turns every prepared text file in a wordlist
/// directory into a compact trie file alongside it.
pub trait DawgEncoder {
    fn encode(&self, words_dir: &Path) -> Result<(), EncodeError>;
}

/// Docker-backed encoder: builds the image from a context directory holding
/// the Dockerfile and encode script, then runs it with the context mounted
/// at `/app` and the wordlist directory at `/words`.
pub struct DockerDawgEncoder {
    image_tag: String,
    context_dir: PathBuf,
}

impl DockerDawgEncoder {
    pub fn new(image_tag: impl Into<String>, context_dir: impl Into<PathBuf>) -> Self {
        DockerDawgEncoder {
            image_tag: image_tag.into(),
            context_dir: context_dir.into(),
        }
    }

    fn build_image(&self) -> Result<(), EncodeError> {
        let output = Command::new("docker")
            .args(["build", "-t", self.image_tag.as_str(), "."])
            .current_dir(&self.context_dir)
            .output()?;
        if !output.status.success() {
            return Err(EncodeError::ImageBuild(
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ));
        }
        Ok(())
    }
}

impl DawgEncoder for DockerDawgEncoder {
    fn encode(&self, words_dir: &Path) -> Result<(), EncodeError> {
        self.build_image()?;

        // Bind mounts need absolute paths.
        let context_dir = self.context_dir.canonicalize()?;
        let words_dir = words_dir.canonicalize()?;

        let app_mount = format!("type=bind,source={},target=/app", context_dir.display());
        let words_mount = format!("type=bind,source={},target=/words", words_dir.display());
        let output = Command::new("docker")
            .args(["run", "--rm"])
            .args(["--mount", app_mount.as_str()])
            .args(["--mount", words_mount.as_str()])
            .arg(&self.image_tag)
            .args(["/bin/bash", "-c", ENCODE_SCRIPT])
            .output()?;
        if !output.status.success() {
            return Err(EncodeError::Run(
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ));
        }
        Ok(())
    }
}
