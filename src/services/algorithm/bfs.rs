//! BFS算法模块
//!
//! 广度优先遍历。出队顶点的未访问邻居按权重升序入队（稳定排序，
//! 权重相同时保持编号顺序），带权图上的访问顺序因此可复现。

use std::collections::VecDeque;

use log::debug;

use super::report::{ReportBuilder, RunOutput, RunStatus, Traversal};
use crate::core::{Graph, GraphResult, StepState, Trace};

pub const TITLE: &str = "Breadth-first search (BFS)";

/// BFS算法结构体
pub struct Bfs;

impl Bfs {
    /// 从 `start` 出发的访问顺序，其他连通分量中的顶点不会被访问
    pub fn traverse(graph: &Graph, start: usize) -> GraphResult<Traversal> {
        graph.check_vertex(start)?;
        let mut report = ReportBuilder::new(TITLE);
        let mut trace = Trace::new();
        Self::walk(graph, start, &mut report, &mut trace)
    }

    /// 执行遍历并生成逐步报告
    pub fn run(graph: &Graph, start: usize) -> GraphResult<RunOutput> {
        graph.check_vertex(start)?;
        debug!("BFS from {}", start);

        let mut report = ReportBuilder::new(TITLE);
        let mut trace = Trace::new();
        let traversal = Self::walk(graph, start, &mut report, &mut trace)?;

        report.line("Traversal complete!");
        let summary = format!("Visit order: {}", graph.format_path(&traversal.visit_order));
        Ok(report.finish(summary, traversal.path, RunStatus::Completed, trace))
    }

    fn walk(
        graph: &Graph,
        start: usize,
        report: &mut ReportBuilder,
        trace: &mut Trace,
    ) -> GraphResult<Traversal> {
        let names = graph.names();
        let mut visited = vec![false; graph.vertex_count()];
        let mut queue: VecDeque<usize> = VecDeque::new();
        let mut traversal = Traversal::default();

        trace.reset();
        queue.push_back(start);
        visited[start] = true;
        traversal.visit_order.push(start);
        traversal.path.push(start);

        report.line(format!("Start: {}", names[start])).blank();

        while let Some(node) = queue.pop_front() {
            trace.mark_vertex(node, StepState::Visited);
            report.line(format!("Visiting: {}", names[node]));

            let mut neighbors: Vec<_> = graph
                .neighbors_of(node)?
                .into_iter()
                .filter(|n| !visited[n.vertex])
                .collect();
            neighbors.sort_by_key(|n| n.weight);

            if neighbors.is_empty() {
                report.line("  No new neighbor");
            } else {
                report.line("  Neighbors queued (ascending weight):");
                for neighbor in neighbors {
                    queue.push_back(neighbor.vertex);
                    visited[neighbor.vertex] = true;
                    traversal.visit_order.push(neighbor.vertex);
                    traversal.path.push(neighbor.vertex);
                    trace.mark_edge(node, neighbor.vertex, StepState::ToVisit);
                    report.line(format!(
                        "    → {} (weight: {})",
                        names[neighbor.vertex], neighbor.weight
                    ));
                }
            }
            report.blank();
        }

        Ok(traversal)
    }
}
