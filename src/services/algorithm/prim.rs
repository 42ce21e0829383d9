//! Prim算法模块
//!
//! 最小生成树，可选择起点。连通图上总代价与起点无关。

use log::{debug, warn};

use super::report::{ReportBuilder, RunOutput, RunStatus};
use super::spanning_tree::{format_edge, SpanningTree};
use crate::core::{Edge, Graph, GraphResult, StepState, Trace, Weight};

pub const TITLE: &str = "Prim";

/// Prim算法结构体
pub struct Prim;

impl Prim {
    /// 从 `start` 构建最小生成树（非连通时只覆盖起点所在的连通分量）
    pub fn spanning_tree(graph: &Graph, start: usize) -> GraphResult<SpanningTree> {
        graph.check_vertex(start)?;
        let mut report = ReportBuilder::new(TITLE);
        let mut trace = Trace::new();
        Ok(Self::build(graph, start, &mut report, &mut trace))
    }

    pub fn run(graph: &Graph, start: usize) -> GraphResult<RunOutput> {
        graph.check_vertex(start)?;
        debug!("Prim from {}", start);
        if graph.is_directed() {
            warn!("Prim on a directed graph follows outgoing edges only");
        }

        let mut report = ReportBuilder::new(TITLE);
        let mut trace = Trace::new();
        report.line(format!("Start: {}", graph.names()[start])).blank();
        let tree = Self::build(graph, start, &mut report, &mut trace);

        report.blank().line("Minimum spanning tree:");
        for edge in &tree.edges {
            report.line(format_edge(graph, edge));
        }

        let status = if tree.is_spanning() {
            RunStatus::Completed
        } else {
            warn!(
                "graph is disconnected, Prim reached {} of {} vertices",
                tree.edges.len() + 1,
                graph.vertex_count()
            );
            report.line("Graph is disconnected: the tree only covers the start's component");
            RunStatus::Disconnected
        };

        let path = tree.walk(start);
        let summary = format!("Total cost = {}", tree.total_cost);
        let mut output = report.finish(summary, path, status, trace);
        output.total_cost = Some(tree.total_cost);
        Ok(output)
    }

    fn build(
        graph: &Graph,
        start: usize,
        report: &mut ReportBuilder,
        steps: &mut Trace,
    ) -> SpanningTree {
        let n = graph.vertex_count();
        let matrix = graph.matrix();
        let names = graph.names();

        let mut key: Vec<Option<Weight>> = vec![None; n];
        let mut parent: Vec<Option<usize>> = vec![None; n];
        let mut visited = vec![false; n];
        key[start] = Some(0);
        steps.reset();

        for _ in 0..n.saturating_sub(1) {
            let Some(u) = Self::min_key_vertex(&key, &visited) else {
                break;
            };
            visited[u] = true;
            Self::join(graph, u, parent[u], report, steps);

            for v in 0..n {
                let weight = matrix[u][v];
                if weight == 0 || visited[v] {
                    continue;
                }
                if key[v].map_or(true, |k| weight < k) {
                    key[v] = Some(weight);
                    parent[v] = Some(u);
                    steps.mark_edge(u, v, StepState::ToVisit);
                    report.line(format!(
                        "  Update {}: key {} (via {})",
                        names[v], weight, names[u]
                    ));
                }
            }
        }

        // 最后一个顶点不会在循环中被选中
        if let Some(last) = Self::min_key_vertex(&key, &visited) {
            Self::join(graph, last, parent[last], report, steps);
        }

        let mut tree = SpanningTree::new(n);
        for (i, p) in parent.iter().enumerate() {
            if let Some(p) = *p {
                tree.add(Edge::new(p, i, matrix[p][i]));
            }
        }
        tree
    }

    /// 顶点 `u` 加入生成树：记录报告行并标记连接边
    fn join(
        graph: &Graph,
        u: usize,
        parent: Option<usize>,
        report: &mut ReportBuilder,
        steps: &mut Trace,
    ) {
        let names = graph.names();
        match parent {
            Some(p) => {
                steps.mark_edge(p, u, StepState::Kept);
                report.line(format!(
                    "Selected {} via {} (weight {})",
                    names[u],
                    names[p],
                    graph.matrix()[p][u]
                ));
            }
            None => {
                steps.mark_vertex(u, StepState::Kept);
                report.line(format!("Selected {}", names[u]));
            }
        }
    }

    /// 未访问顶点中 key 最小者，相同时取编号最小
    fn min_key_vertex(key: &[Option<Weight>], visited: &[bool]) -> Option<usize> {
        let mut best: Option<(usize, Weight)> = None;
        for (v, k) in key.iter().enumerate() {
            if visited[v] {
                continue;
            }
            if let Some(k) = *k {
                if best.map_or(true, |(_, min)| k < min) {
                    best = Some((v, k));
                }
            }
        }
        best.map(|(v, _)| v)
    }
}
