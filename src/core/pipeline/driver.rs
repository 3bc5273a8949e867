//! Chunking pipeline orchestration.
//!
//! Coordinates one end-to-end run:
//! 1. Materialize page files for configured PDF sources
//! 2. Discover page files in the input directory
//! 3. Load and validate page records
//! 4. Group pages by document, ordered by page number
//! 5. Normalize, split and pack each page into chunks
//! 6. Stitch neighbor context across each document
//! 7. Validate and write chunk files

use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;
use std::time::Instant;

use crate::core::chunking::{normalize_text, split_paragraphs, stitch_context, ChunkBuilder};
use crate::core::config::{Config, OutputLayout};
use crate::core::error::{ChunkError, Result};
use crate::core::extract::{PageExtractor, PdfExtractor};
use crate::core::pipeline::grouping::{group_by_document, LoadedPage};
use crate::core::pipeline::walker::PageFileWalker;
use crate::core::storage::chunk_writer::{chunk_file_name, document_file_name};
use crate::core::storage::validator::describe;
use crate::core::storage::{validate_chunk, ChunkWriter, PageStore, Resolution};
use crate::core::types::{ChunkRecord, RunReport, SkipKind};

/// Orchestrates the chunking pipeline
pub struct ChunkingPipeline {
    input_dir: PathBuf,
    pdf_sources: Vec<PathBuf>,
    preserve_paragraphs: bool,
    layout: OutputLayout,
    walker: PageFileWalker,
    builder: ChunkBuilder,
    store: PageStore,
    writer: ChunkWriter,
    extractor: Box<dyn PageExtractor>,
}

impl ChunkingPipeline {
    /// Create a pipeline from a validated configuration.
    ///
    /// Uses [`PdfExtractor`] for PDF sources; see
    /// [`with_extractor`](Self::with_extractor) to replace it.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        let walker = PageFileWalker::new(
            config.paths.include_patterns.clone(),
            config.paths.exclude_patterns.clone(),
        )?;
        let builder = ChunkBuilder::new(config.chunking.min_chars, config.chunking.max_chars);

        Ok(Self {
            input_dir: config.paths.input_dir.clone(),
            pdf_sources: config.paths.pdf_sources.clone(),
            preserve_paragraphs: config.chunking.preserve_paragraphs,
            layout: config.output.layout,
            walker,
            builder,
            store: PageStore::new(config.paths.input_dir.clone())
                .with_pretty(config.output.pretty),
            writer: ChunkWriter::new(config.paths.output_dir.clone(), config.output.pretty),
            extractor: Box::new(PdfExtractor::new()),
        })
    }

    /// Replace the extractor used for PDF sources
    pub fn with_extractor(mut self, extractor: Box<dyn PageExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Run the pipeline once over the input directory.
    ///
    /// # Errors
    ///
    /// Returns an error only when the output directory cannot be
    /// created or the input directory cannot be listed. Everything
    /// else is skipped, logged and recorded in the report.
    pub fn run(&self) -> Result<RunReport> {
        let start = Instant::now();
        let mut report = RunReport::new();

        self.writer.ensure_dir()?;

        // Step 1: Make sure PDF sources have page files
        self.materialize_sources(&mut report);

        // Step 2: Collect page files
        tracing::info!("Collecting page files from {:?}", self.input_dir);
        let files = self.walker.collect_files(&self.input_dir)?;
        tracing::info!("Found {} page files", files.len());

        // Step 3: Load page records
        let pages = self.load_pages(&files, &mut report);

        // Step 4: Group by document
        let documents = group_by_document(pages);
        report.documents = documents.len();

        // Steps 5-6: Chunk and stitch each document, then partition for output
        let mut outputs: BTreeMap<String, Vec<ChunkRecord>> = BTreeMap::new();
        for (document_id, pages) in &documents {
            let (mut chunks, sources) = self.chunk_document(pages, &mut report);
            stitch_context(&mut chunks);

            tracing::debug!(
                "Document '{}': {} pages, {} chunks",
                document_id,
                pages.len(),
                chunks.len()
            );

            for (chunk, source) in chunks.into_iter().zip(sources) {
                let file_name = match self.layout {
                    OutputLayout::PerSourceFile => chunk_file_name(&source),
                    OutputLayout::PerDocument => document_file_name(document_id),
                };
                outputs.entry(file_name).or_default().push(chunk);
            }
        }

        // Step 7: Validate and write
        for (file_name, chunks) in outputs {
            self.write_output(&file_name, chunks, &mut report);
        }

        report.duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Chunking complete: {} documents, {} pages, {} chunks written \
             to {} files in {}ms ({} items skipped)",
            report.documents,
            report.pages_processed,
            report.chunks_written,
            report.output_files.len(),
            report.duration_ms,
            report.skipped.len()
        );

        Ok(report)
    }

    /// Chunk one page's text.
    ///
    /// Returns no chunks when the text is empty after normalization.
    /// With `preserve_paragraphs` the raw text is split on newlines
    /// first and each paragraph is normalized on its own; otherwise
    /// the whole page is normalized first, which leaves a single
    /// paragraph.
    pub fn chunk_page_text(&self, text: &str) -> Vec<String> {
        let normalized = normalize_text(Some(text));
        if normalized.is_empty() {
            return Vec::new();
        }

        let paragraphs: Vec<String> = if self.preserve_paragraphs {
            split_paragraphs(text)
                .iter()
                .map(|p| normalize_text(Some(p.as_str())))
                .collect()
        } else {
            split_paragraphs(&normalized)
        };

        self.builder.build(&paragraphs)
    }

    fn materialize_sources(&self, report: &mut RunReport) {
        for pdf in &self.pdf_sources {
            match self
                .store
                .resolve_or_materialize(pdf, self.extractor.as_ref())
            {
                Ok(Resolution::Existing(files)) => {
                    tracing::debug!("{:?}: {} page files already present", pdf, files.len());
                }
                Ok(Resolution::Materialized(files)) => {
                    tracing::info!("{:?}: extracted {} pages", pdf, files.len());
                }
                Err(e) => {
                    tracing::warn!("Failed to extract {:?}: {}", pdf, e);
                    report.skip(
                        SkipKind::ExtractionFailed,
                        pdf.display().to_string(),
                        e.message(),
                    );
                }
            }
        }
    }

    fn load_pages(&self, files: &[PathBuf], report: &mut RunReport) -> Vec<LoadedPage> {
        let mut pages = Vec::with_capacity(files.len());

        for (idx, path) in files.iter().enumerate() {
            if idx % 100 == 0 && idx > 0 {
                tracing::info!("Progress: {}/{} page files loaded", idx, files.len());
            }

            match PageStore::read_page(path) {
                Ok(record) => {
                    let file_name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    pages.push(LoadedPage { file_name, record });
                }
                Err(e) => {
                    tracing::warn!("Failed to load {:?}: {}", path, e);
                    let kind = match e {
                        ChunkError::MissingDocumentId(_) => SkipKind::MissingDocumentId,
                        ChunkError::InvalidPage { .. } => SkipKind::InvalidPage,
                        _ => SkipKind::UnreadableFile,
                    };
                    report.skip(kind, path.display().to_string(), e.message());
                }
            }
        }

        pages
    }

    /// Chunk every page of one document, in page order.
    ///
    /// Returns the chunks and, index for index, the page file each
    /// chunk came from.
    fn chunk_document(
        &self,
        pages: &[LoadedPage],
        report: &mut RunReport,
    ) -> (Vec<ChunkRecord>, Vec<String>) {
        let mut chunks = Vec::new();
        let mut sources = Vec::new();
        let mut seen_ids = HashSet::new();

        for page in pages {
            let texts = self.chunk_page_text(&page.record.text);
            if texts.is_empty() {
                tracing::warn!(
                    "Skipping page {} of '{}': no text ({})",
                    page.record.page_number,
                    page.record.document_id,
                    page.file_name
                );
                report.skip(
                    SkipKind::EmptyPage,
                    page.file_name.as_str(),
                    "page text is empty after normalization",
                );
                continue;
            }

            report.pages_processed += 1;

            for (index, text) in texts.into_iter().enumerate() {
                let chunk = ChunkRecord::new(&page.record, index, text);

                // Two pages sharing a page number would reuse ids
                if !seen_ids.insert(chunk.chunk_id.clone()) {
                    tracing::warn!(
                        "Dropping chunk from {}: duplicate chunk_id '{}'",
                        page.file_name,
                        chunk.chunk_id
                    );
                    report.skip(
                        SkipKind::InvalidChunk,
                        page.file_name.as_str(),
                        format!("duplicate chunk_id '{}'", chunk.chunk_id),
                    );
                    continue;
                }

                chunks.push(chunk);
                sources.push(page.file_name.clone());
            }
        }

        (chunks, sources)
    }

    fn write_output(&self, file_name: &str, chunks: Vec<ChunkRecord>, report: &mut RunReport) {
        let mut valid = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            match validate_chunk(&chunk) {
                Ok(()) => valid.push(chunk),
                Err(errors) => {
                    let reason = describe(&errors);
                    tracing::warn!("Rejecting chunk '{}': {}", chunk.chunk_id, reason);
                    report.skip(SkipKind::InvalidChunk, chunk.chunk_id, reason);
                }
            }
        }

        if valid.is_empty() {
            return;
        }

        match self.writer.write(file_name, &valid) {
            Ok(path) => {
                tracing::info!("Saved {} chunks to {:?}", valid.len(), path);
                report.chunks_written += valid.len();
                report.output_files.push(path);
            }
            Err(e) => {
                let path = self.writer.output_dir().join(file_name);
                tracing::warn!("Failed to write {:?}: {}", path, e);
                report.skip(
                    SkipKind::WriteFailed,
                    path.display().to_string(),
                    e.message(),
                );
            }
        }
    }
}
