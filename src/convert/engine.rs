//! Converter: drives selection, edge filtering and assembly

use super::config::ConvertConfig;
use super::error::{ConvertError, ConvertResult};
use crate::graph::{composite_label, GraphDocument, GraphEdge, GraphNode};
use crate::progress::{NoProgress, ProgressObserver, Stage};
use crate::selection::{NodeSelector, Selection};
use crate::source::{filter_edges, EdgePair, MetaRecord, MetaRecords};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Counts reported after a conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Nodes written
    pub nodes: usize,
    /// Links written
    pub links: usize,
    /// Metadata records scanned during selection
    pub scanned: usize,
    /// Running total at which the balance check passed, if it did
    pub balanced_at: Option<usize>,
    /// Where the document was written
    pub output_path: PathBuf,
}

/// Join selected records and their edges into a graph document
///
/// Edges whose endpoints have no node are dropped. When an id appears more
/// than once, the last record's label wins for edge endpoints.
pub fn assemble(records: &[MetaRecord], edges: &[EdgePair]) -> GraphDocument {
    let mut labels: HashMap<&str, String> = HashMap::with_capacity(records.len());
    let mut nodes = Vec::with_capacity(records.len());

    for record in records {
        let label = composite_label(&record.id, &record.display_title());
        labels.insert(record.id.as_str(), label.clone());
        nodes.push(GraphNode::new(label, record.group.clone()));
    }

    let links = edges
        .iter()
        .filter_map(|edge| {
            let source = labels.get(edge.source.as_str())?;
            let target = labels.get(edge.target.as_str())?;
            Some(GraphEdge::new(source.clone(), target.clone()))
        })
        .collect();

    GraphDocument { nodes, links }
}

/// The conversion driver
///
/// Stages run strictly in sequence: the edge scan needs the full set of
/// selected ids.
#[derive(Debug, Clone)]
pub struct Converter {
    config: ConvertConfig,
}

impl Converter {
    /// Create a converter, validating the configuration
    pub fn new(config: ConvertConfig) -> ConvertResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// The selector configured for this conversion
    pub fn selector(&self) -> NodeSelector {
        NodeSelector::new(self.config.max_nodes).with_thresholds(self.config.thresholds)
    }

    /// Run node selection over a metadata reader
    pub fn select<M: BufRead>(
        &self,
        meta: M,
        progress: &mut dyn ProgressObserver,
    ) -> ConvertResult<Selection> {
        Ok(self
            .selector()
            .select_observed(MetaRecords::new(meta), progress)?)
    }

    /// Build the document from in-memory readers
    pub fn convert_readers<M: BufRead, E: BufRead>(
        &self,
        meta: M,
        edges: E,
        progress: &mut dyn ProgressObserver,
    ) -> ConvertResult<(GraphDocument, Selection)> {
        let selection = self.select(meta, progress)?;
        let kept = filter_edges(edges, &selection.valid_ids(), progress)?;
        let document = assemble(&selection.nodes, &kept);
        Ok((document, selection))
    }

    /// Run the file-based conversion without progress reporting
    pub fn run(&self) -> ConvertResult<ConvertSummary> {
        self.run_observed(&mut NoProgress)
    }

    /// Read both input files, write the document, and summarize
    pub fn run_observed(
        &self,
        progress: &mut dyn ProgressObserver,
    ) -> ConvertResult<ConvertSummary> {
        tracing::info!(
            max_nodes = self.config.max_nodes,
            meta = %self.config.meta_path.display(),
            "finding first nodes with group distribution requirements"
        );
        let meta = open_reader(&self.config.meta_path)?;
        let selection = self.select(meta, progress)?;

        tracing::info!(edges = %self.config.edges_path.display(), "reading edge list");
        let edges = open_reader(&self.config.edges_path)?;
        let kept = filter_edges(edges, &selection.valid_ids(), progress)?;

        let document = assemble(&selection.nodes, &kept);
        write_document(&document, &self.config.output_path)?;
        progress.stage_finished(Stage::Write, document.node_count());

        let summary = ConvertSummary {
            nodes: document.node_count(),
            links: document.link_count(),
            scanned: selection.scanned,
            balanced_at: selection.balanced_at,
            output_path: self.config.output_path.clone(),
        };
        tracing::info!(
            nodes = summary.nodes,
            links = summary.links,
            output = %summary.output_path.display(),
            "graph document written"
        );
        Ok(summary)
    }
}

fn open_reader(path: &Path) -> ConvertResult<BufReader<File>> {
    let file = File::open(path).map_err(|e| ConvertError::open(path, e))?;
    Ok(BufReader::new(file))
}

/// Write `document` as indented JSON to `path`
pub fn write_document(document: &GraphDocument, path: &Path) -> ConvertResult<()> {
    let file = File::create(path).map_err(|e| ConvertError::open(path, e))?;
    let mut writer = BufWriter::new(file);
    document.write_pretty(&mut writer)?;
    writer.flush()?;
    Ok(())
}
