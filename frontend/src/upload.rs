use std::path::PathBuf;

use spellbook::{SpellbookError, validate};
use tokio::fs::read;
use tracing::{error, info, warn};

use crate::{api::SpellService, error::Alert};

pub const UPLOADED_MESSAGE: &str = "YAML file uploaded successfully!";

/// Spellbook upload form.
///
/// The file is read and checked locally first. Only a well-shaped spellbook is sent,
/// the raw text goes out unchanged. Bytes that are not UTF-8 become U+FFFD.
#[derive(Debug, Default)]
pub struct SpellbookUpload {
    pub file: Option<PathBuf>,
}

impl SpellbookUpload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, file: impl Into<PathBuf>) {
        self.file = Some(file.into());
    }

    pub async fn upload<S: SpellService>(&self, service: &S) -> Result<usize, Alert> {
        let Some(path) = &self.file else {
            return Err(Alert::NoFileSelected);
        };

        let bytes = read(path).await.map_err(|e| {
            error!("Failed to read {}: {e}", path.display());
            Alert::UploadFailed
        })?;
        let yaml_content = String::from_utf8_lossy(&bytes).into_owned();

        let spellbook = match validate(&yaml_content) {
            Ok(spellbook) => spellbook,
            Err(SpellbookError::Validation(e)) => {
                warn!("Rejected {}: {e}", path.display());
                return Err(Alert::InvalidStructure);
            }
            Err(e) => {
                error!("Failed to parse {}: {e}", path.display());
                return Err(Alert::UploadFailed);
            }
        };

        service.import(&yaml_content).await.map_err(|e| {
            error!("Failed to upload YAML: {e}");
            Alert::UploadFailed
        })?;

        info!("Uploaded {} spells from {}", spellbook.spells.len(), path.display());

        Ok(spellbook.spells.len())
    }
}
