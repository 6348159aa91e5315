use crate::deck::{Card, CardDeck, export_name};
use crate::render::render_card;
use anyhow::{Context, Result, anyhow};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Turns one card into image (or other) bytes
pub trait Rasterizer {
    /// File extension of produced entries, without the dot
    fn extension(&self) -> &str;

    fn rasterize(
        &mut self,
        card: &Card<'_>,
    ) -> Result<Vec<u8>>;
}

/// Collects rasterized cards under their archive names
pub trait ArchiveSink {
    fn add(
        &mut self,
        name: &str,
        bytes: &[u8],
    ) -> Result<()>;

    fn finish(&mut self) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportStage {
    Rasterize,
    Archive,
}

/// Export failure; the deck itself is untouched
#[derive(Debug)]
pub struct ExportError {
    pub stage: ExportStage,
    /// 1-based card number, `None` when finishing the archive
    pub card: Option<usize>,
    pub message: String,
}

impl std::fmt::Display for ExportError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        let stage = match self.stage {
            ExportStage::Rasterize => "rasterizing",
            ExportStage::Archive => "archiving",
        };
        match self.card {
            Some(n) => write!(f, "export failed while {stage} card {n}: {}", self.message),
            None => write!(f, "export failed while {stage}: {}", self.message),
        }
    }
}

impl std::error::Error for ExportError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub files: Vec<String>,
    pub bytes: usize,
}

/// Rasterizes and archives every card, strictly one at a time so only a
/// single card's bytes are alive at once.
pub fn export_deck(
    deck: &CardDeck,
    prefix: &str,
    rasterizer: &mut dyn Rasterizer,
    sink: &mut dyn ArchiveSink,
) -> Result<ExportReport> {
    let mut report = ExportReport {
        files: Vec::with_capacity(deck.card_count()),
        bytes: 0,
    };
    for (pos, card) in deck.cards().enumerate() {
        let n = pos + 1;
        let bytes = rasterizer.rasterize(&card).map_err(|e| {
            anyhow!(ExportError {
                stage: ExportStage::Rasterize,
                card: Some(n),
                message: format!("{e:#}"),
            })
        })?;
        let name = export_name(prefix, n, rasterizer.extension());
        sink.add(&name, &bytes).map_err(|e| {
            anyhow!(ExportError {
                stage: ExportStage::Archive,
                card: Some(n),
                message: format!("{e:#}"),
            })
        })?;
        debug!(card = n, name = %name, bytes = bytes.len(), "exported card");
        report.bytes += bytes.len();
        report.files.push(name);
    }
    sink.finish().map_err(|e| {
        anyhow!(ExportError {
            stage: ExportStage::Archive,
            card: None,
            message: format!("{e:#}"),
        })
    })?;
    info!(cards = report.files.len(), bytes = report.bytes, "export finished");
    Ok(report)
}

/// Renders the plain-text preview of each card
pub struct TextRasterizer {
    pub width: usize,
    /// Body wrap column, normally `PageBreakConfig::chars_per_line`
    pub chars_per_line: usize,
}

impl Rasterizer for TextRasterizer {
    fn extension(&self) -> &str {
        "txt"
    }

    fn rasterize(
        &mut self,
        card: &Card<'_>,
    ) -> Result<Vec<u8>> {
        Ok(render_card(card, self.width, self.chars_per_line).into_bytes())
    }
}

/// Writes every entry as a file inside one directory
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn create(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)
            .with_context(|| format!("cannot create export directory {}", dir.display()))?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }
}

impl ArchiveSink for DirectorySink {
    fn add(
        &mut self,
        name: &str,
        bytes: &[u8],
    ) -> Result<()> {
        let path = self.dir.join(name);
        fs::write(&path, bytes).with_context(|| format!("cannot write {}", path.display()))
    }

    fn finish(&mut self) -> Result<()> {
        // every entry is already on disk, nothing to flush
        Ok(())
    }
}
