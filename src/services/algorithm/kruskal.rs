//! Kruskal算法模块
//!
//! 最小生成树：边按权重升序排序，用并查集排除成环的边。

use log::{debug, warn};

use super::disjoint_set::DisjointSet;
use super::report::{ReportBuilder, RunOutput, RunStatus};
use super::spanning_tree::{format_edge, SpanningTree};
use crate::core::{Edge, Graph, GraphResult, StepState, Trace};

pub const TITLE: &str = "Kruskal";

/// 生成树回溯遍历的起点
const WALK_START: usize = 0;

/// Kruskal算法结构体
pub struct Kruskal;

impl Kruskal {
    /// 构建最小生成树（非连通时为生成森林）
    pub fn spanning_tree(graph: &Graph) -> SpanningTree {
        let mut report = ReportBuilder::new(TITLE);
        let mut trace = Trace::new();
        Self::build(graph, &mut report, &mut trace)
    }

    pub fn run(graph: &Graph) -> GraphResult<RunOutput> {
        debug!("Kruskal on {} vertices", graph.vertex_count());
        if graph.is_directed() {
            warn!("Kruskal on a directed graph only reads edges i < j");
        }

        let mut report = ReportBuilder::new(TITLE);
        let mut trace = Trace::new();
        let tree = Self::build(graph, &mut report, &mut trace);

        report.blank().line("Step 2: minimum spanning tree");
        for line in tree.edge_lines(graph) {
            report.line(line);
        }

        let status = if tree.is_spanning() {
            RunStatus::Completed
        } else {
            warn!(
                "graph is disconnected, spanning forest has {} edges for {} vertices",
                tree.edges.len(),
                graph.vertex_count()
            );
            report.line("Graph is disconnected: result is a spanning forest");
            RunStatus::Disconnected
        };

        let path = tree.walk(WALK_START);
        let summary = format!("Total cost = {}", tree.total_cost);
        let mut output = report.finish(summary, path, status, trace);
        output.total_cost = Some(tree.total_cost);
        Ok(output)
    }

    fn build(graph: &Graph, report: &mut ReportBuilder, steps: &mut Trace) -> SpanningTree {
        let n = graph.vertex_count();
        let matrix = graph.matrix();

        // 获取所有边 (i < j)
        let mut edges = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                if matrix[i][j] != 0 {
                    edges.push(Edge::new(i, j, matrix[i][j]));
                }
            }
        }
        edges.sort_by_key(|edge| edge.weight);

        steps.reset();
        report.line("Step 1: edges sorted by ascending weight");

        let mut set = DisjointSet::new(n);
        let mut tree = SpanningTree::new(n);
        for edge in edges {
            steps.mark_edge(edge.from, edge.to, StepState::ToVisit);
            if set.union(edge.from, edge.to) {
                steps.mark_edge(edge.from, edge.to, StepState::Kept);
                report.line(format!("{}  (added)", format_edge(graph, &edge)));
                tree.add(edge);
            } else {
                steps.mark_edge(edge.from, edge.to, StepState::Backtrack);
                report.line(format!("{}  (forms a cycle)", format_edge(graph, &edge)));
            }
        }

        tree
    }
}
