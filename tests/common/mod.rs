//! Shared fixtures for pipeline tests
//!
//! Writes metadata dumps and edge lists shaped like the real co-purchase
//! files into temporary directories.

#![allow(dead_code)]

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// One product block in a metadata dump
#[derive(Debug, Clone)]
pub struct Product {
    pub id: String,
    pub title: Option<String>,
    pub group: Option<String>,
}

impl Product {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            group: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

/// Render products the way the metadata dump lays them out
pub fn render_meta(products: &[Product]) -> String {
    let mut out = String::from("# Full information about Amazon Share the Love products\n");
    writeln!(out, "Total items: {}", products.len()).unwrap();
    out.push('\n');
    for product in products {
        writeln!(out, "Id:   {}", product.id).unwrap();
        writeln!(out, "ASIN: 00000{}", product.id).unwrap();
        if let Some(title) = &product.title {
            writeln!(out, "  title: {}", title).unwrap();
        }
        if let Some(group) = &product.group {
            writeln!(out, "  group: {}", group).unwrap();
        }
        writeln!(out, "  salesrank: 396585").unwrap();
        writeln!(out, "  reviews: total: 2  downloaded: 2  avg rating: 5").unwrap();
        out.push('\n');
    }
    out
}

/// `count` products with ids `1..=count`, groups assigned round-robin
pub fn round_robin(count: usize, groups: &[&str]) -> Vec<Product> {
    (1..=count)
        .map(|i| {
            Product::new(i.to_string())
                .title(format!("Item {}", i))
                .group(groups[(i - 1) % groups.len()])
        })
        .collect()
}

/// Render an edge list with the usual comment header
pub fn render_edges(pairs: &[(&str, &str)]) -> String {
    let mut out = String::from("# Directed graph (each unordered pair of nodes is saved once)\n");
    out.push_str("# FromNodeId\tToNodeId\n");
    for (source, target) in pairs {
        writeln!(out, "{}\t{}", source, target).unwrap();
    }
    out
}

/// Edges `i -> i+1` for `1..count`
pub fn chain_edges(count: usize) -> String {
    let ids: Vec<String> = (1..=count).map(|i| i.to_string()).collect();
    let pairs: Vec<(&str, &str)> = ids
        .windows(2)
        .map(|w| (w[0].as_str(), w[1].as_str()))
        .collect();
    render_edges(&pairs)
}

/// Input files in a temporary directory
pub struct Workspace {
    pub dir: TempDir,
    pub meta: PathBuf,
    pub edges: PathBuf,
    pub output: PathBuf,
}

impl Workspace {
    pub fn new(meta: impl AsRef<[u8]>, edges: impl AsRef<[u8]>) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let meta_path = dir.path().join("amazon-meta.txt");
        let edges_path = dir.path().join("amazon0302.txt");
        std::fs::write(&meta_path, meta).expect("Failed to write metadata");
        std::fs::write(&edges_path, edges).expect("Failed to write edges");
        let output = dir.path().join("amazon.json");
        Self {
            dir,
            meta: meta_path,
            edges: edges_path,
            output,
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
