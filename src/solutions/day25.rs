use std::collections::VecDeque;

use anyhow::{ensure, Context, Result};
use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::{Bfs, EdgeRef};
use rustc_hash::FxHashMap;

pub fn day25(input: &str) -> Result<(usize, &'static str)> {
    let mut graph: UnGraph<(), ()> = UnGraph::new_undirected();
    let mut indices: FxHashMap<&str, NodeIndex> = FxHashMap::default();
    for line in input.lines() {
        let (name, neighbors) = line.split_once(':').context("missing neighbor list")?;
        let node = *indices
            .entry(name.trim())
            .or_insert_with(|| graph.add_node(()));
        for neighbor in neighbors.split_whitespace() {
            let neighbor = *indices
                .entry(neighbor)
                .or_insert_with(|| graph.add_node(()));
            graph.add_edge(node, neighbor, ());
        }
    }
    ensure!(graph.node_count() > 3, "component graph too small");

    // The three wires to cut are the bottleneck between the two halves, so
    // they dominate the edge-usage counts of sampled shortest paths. Cut
    // the most used edge and repeat; counts are recomputed each round since
    // removing one bottleneck wire funnels even more paths over the others.
    for _ in 0..3 {
        let edge = most_used_edge(&graph).context("graph has no edges")?;
        graph.remove_edge(edge);
    }

    let reachable = component_size(&graph, NodeIndex::new(0));
    ensure!(
        reachable < graph.node_count(),
        "cutting the bottleneck did not split the graph"
    );
    Ok((
        reachable * (graph.node_count() - reachable),
        "n/a",
    ))
}

/// Edge appearing on the most sampled BFS shortest paths. Small graphs get
/// every node pair; large ones a deterministic spread of distant pairs.
fn most_used_edge(graph: &UnGraph<(), ()>) -> Option<EdgeIndex> {
    let n = graph.node_count();
    let mut pairs = Vec::new();
    if n <= 40 {
        for a in 0..n {
            for b in a + 1..n {
                pairs.push((NodeIndex::new(a), NodeIndex::new(b)));
            }
        }
    } else {
        for i in 0..(n / 2).min(150) {
            pairs.push((NodeIndex::new(i), NodeIndex::new(i + n / 2)));
        }
    }

    let mut usage: FxHashMap<EdgeIndex, usize> = FxHashMap::default();
    let mut incoming: FxHashMap<NodeIndex, (NodeIndex, EdgeIndex)> = FxHashMap::default();
    for (source, target) in pairs {
        incoming.clear();
        let mut queue = VecDeque::from([source]);
        'bfs: while let Some(node) = queue.pop_front() {
            for edge in graph.edges(node) {
                let next = if edge.source() == node {
                    edge.target()
                } else {
                    edge.source()
                };
                if next == source || incoming.contains_key(&next) {
                    continue;
                }
                incoming.insert(next, (node, edge.id()));
                if next == target {
                    break 'bfs;
                }
                queue.push_back(next);
            }
        }
        // Walk the path back to the source, crediting every edge on it.
        let mut node = target;
        while let Some(&(previous, edge)) = incoming.get(&node) {
            *usage.entry(edge).or_default() += 1;
            node = previous;
        }
    }

    usage.into_iter().max_by_key(|&(_, count)| count).map(|(edge, _)| edge)
}

fn component_size(graph: &UnGraph<(), ()>, start: NodeIndex) -> usize {
    let mut bfs = Bfs::new(graph, start);
    let mut size = 0;
    while bfs.next(graph).is_some() {
        size += 1;
    }
    size
}
