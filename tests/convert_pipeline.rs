//! End-to-end conversion tests over files on disk

mod common;

use common::{chain_edges, render_edges, render_meta, round_robin, Product, Workspace};
use copurchase_graph::{
    BalanceThresholds, ConvertConfig, ConvertError, Converter, GraphDocument, GroupCounts,
};
use std::collections::HashSet;

const GROUPS: [&str; 5] = ["Book", "Music", "DVD", "Video", "Toy"];

fn run(ws: &Workspace, max_nodes: usize) -> (copurchase_graph::ConvertSummary, GraphDocument) {
    let config = ConvertConfig::new(&ws.meta, &ws.edges, &ws.output).with_max_nodes(max_nodes);
    let summary = Converter::new(config)
        .expect("Failed to build converter")
        .run()
        .expect("Conversion failed");
    let text = std::fs::read_to_string(&ws.output).expect("Failed to read output");
    let document: GraphDocument = serde_json::from_str(&text).expect("Output is not a document");
    (summary, document)
}

#[test]
fn widget_record_becomes_labelled_node_and_link() {
    let meta = render_meta(&[
        Product::new("5").title("Widget").group("Book"),
        Product::new("7").title("Gadget").group("Music"),
    ]);
    let edges = render_edges(&[("5", "7"), ("5", "99")]);
    let ws = Workspace::new(meta, edges);

    let (summary, doc) = run(&ws, 10);

    assert_eq!(summary.nodes, 2);
    assert_eq!(summary.links, 1);
    assert_eq!(doc.nodes[0].id, "5: Widget");
    assert_eq!(doc.nodes[0].group, "Book");
    assert_eq!(doc.links[0].source, "5: Widget");
    assert_eq!(doc.links[0].target, "7: Gadget");
    assert_eq!(doc.links[0].value, 1);
}

#[test]
fn node_count_never_exceeds_max_nodes() {
    let ws = Workspace::new(render_meta(&round_robin(40, &GROUPS)), chain_edges(40));

    for max_nodes in [1, 3, 7, 10, 25, 40, 60] {
        let (summary, doc) = run(&ws, max_nodes);
        assert!(doc.nodes.len() <= max_nodes, "max_nodes = {}", max_nodes);
        assert_eq!(summary.nodes, doc.nodes.len());
    }
}

#[test]
fn every_link_endpoint_is_a_node() {
    let ws = Workspace::new(render_meta(&round_robin(40, &GROUPS)), chain_edges(40));
    let (_, doc) = run(&ws, 12);

    let labels: HashSet<&str> = doc.nodes.iter().map(|n| n.id.as_str()).collect();
    assert!(!doc.links.is_empty());
    for link in &doc.links {
        assert!(labels.contains(link.source.as_str()));
        assert!(labels.contains(link.target.as_str()));
    }
}

#[test]
fn balanced_selection_satisfies_thresholds() {
    let ws = Workspace::new(render_meta(&round_robin(30, &GROUPS)), chain_edges(30));
    let (summary, doc) = run(&ws, 10);

    assert_eq!(summary.balanced_at, Some(10));
    assert_eq!(doc.nodes.len(), 10);

    let counts: GroupCounts = doc.nodes.iter().map(|n| n.group.as_str()).collect();
    assert!(BalanceThresholds::default().is_satisfied(&counts));
    let ranked = counts.most_common(3);
    assert!(counts.share(ranked[0].1) <= 0.40);
    assert!(counts.share(ranked[1].1) <= 0.30);
    assert!(counts.share(ranked[2].1) <= 0.20);
}

#[test]
fn late_balance_still_takes_arrival_prefix() {
    let mut products: Vec<Product> = (1..=6)
        .map(|i| Product::new(i.to_string()).group("Book"))
        .collect();
    let later = ["Music", "DVD", "Video", "Toy", "Software", "Games"];
    products.extend((7..=36).map(|i| Product::new(i.to_string()).group(later[(i - 7) % later.len()])));
    let ws = Workspace::new(render_meta(&products), chain_edges(36));

    let (summary, doc) = run(&ws, 5);

    assert_eq!(summary.balanced_at, Some(15));
    assert_eq!(summary.scanned, 15);
    let labels: Vec<&str> = doc.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "1: Product_1",
            "2: Product_2",
            "3: Product_3",
            "4: Product_4",
            "5: Product_5"
        ]
    );
    assert!(doc.nodes.iter().all(|n| n.group == "Book"));
}

#[test]
fn record_without_group_is_never_selected() {
    let mut products = round_robin(8, &GROUPS);
    products[2].group = None;
    let ws = Workspace::new(render_meta(&products), chain_edges(8));

    let (_, doc) = run(&ws, 20);

    assert_eq!(doc.nodes.len(), 7);
    assert!(doc.nodes.iter().all(|n| !n.id.starts_with("3:")));
    assert!(doc
        .links
        .iter()
        .all(|l| !l.source.starts_with("3:") && !l.target.starts_with("3:")));
}

#[test]
fn short_metadata_file_yields_all_records() {
    let ws = Workspace::new(render_meta(&round_robin(4, &GROUPS)), chain_edges(4));
    let (summary, doc) = run(&ws, 10);

    assert_eq!(doc.nodes.len(), 4);
    assert_eq!(summary.balanced_at, None);
    assert_eq!(doc.links.len(), 3);
}

#[test]
fn reruns_are_byte_identical() {
    let ws = Workspace::new(render_meta(&round_robin(50, &GROUPS)), chain_edges(50));

    run(&ws, 15);
    let first = std::fs::read(&ws.output).unwrap();
    run(&ws, 15);
    let second = std::fs::read(&ws.output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn output_is_indented_utf8_with_nodes_first() {
    let meta = render_meta(&[
        Product::new("1").title("Café Müller — 東京").group("Book"),
        Product::new("2").group("Music"),
    ]);
    let ws = Workspace::new(meta, render_edges(&[("1", "2")]));
    run(&ws, 5);

    let text = std::fs::read_to_string(&ws.output).unwrap();
    assert!(text.starts_with("{\n  \"nodes\": [\n    {\n      \"id\": \"1: Café Müller — 東京\""));
    assert!(text.find("\"nodes\"").unwrap() < text.find("\"links\"").unwrap());
    assert!(text.contains("\"id\": \"2: Product_2\""));
}

#[test]
fn undecodable_metadata_bytes_are_replaced() {
    let mut meta = b"Id: 1\n  title: Bad \xff\xfe Bytes\n  group: Book\n".to_vec();
    meta.extend_from_slice(b"Id: 2\n  group: Music\n");
    let ws = Workspace::new(meta, render_edges(&[("1", "2")]));

    let (_, doc) = run(&ws, 5);

    assert_eq!(doc.nodes.len(), 2);
    assert!(doc.nodes[0].id.contains('\u{FFFD}'));
    assert_eq!(doc.links.len(), 1);
}

#[test]
fn missing_edge_file_is_fatal_and_writes_nothing() {
    let ws = Workspace::new(render_meta(&round_robin(5, &GROUPS)), "");
    let missing = ws.path().join("does-not-exist.txt");
    let config = ConvertConfig::new(&ws.meta, &missing, &ws.output);

    let err = Converter::new(config).unwrap().run().unwrap_err();

    assert!(matches!(err, ConvertError::Open { ref path, .. } if path == &missing));
    assert!(!ws.output.exists());
}
