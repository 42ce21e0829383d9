//! DFS算法模块
//!
//! 深度优先遍历，栈实现。从栈顶顶点沿权重最小的边进入未访问邻居
//!（权重相同时取编号最小），没有未访问邻居时出栈回溯。

use log::debug;

use super::report::{ReportBuilder, RunOutput, RunStatus, Traversal};
use crate::core::{Graph, GraphResult, StepState, Trace, Weight};

pub const TITLE: &str = "Depth-first search (DFS)";

/// DFS算法结构体
pub struct Dfs;

impl Dfs {
    pub fn traverse(graph: &Graph, start: usize) -> GraphResult<Traversal> {
        graph.check_vertex(start)?;
        let mut report = ReportBuilder::new(TITLE);
        let mut trace = Trace::new();
        Ok(Self::walk(graph, start, &mut report, &mut trace))
    }

    pub fn run(graph: &Graph, start: usize) -> GraphResult<RunOutput> {
        graph.check_vertex(start)?;
        debug!("DFS from {}", start);

        let mut report = ReportBuilder::new(TITLE);
        let mut trace = Trace::new();
        let traversal = Self::walk(graph, start, &mut report, &mut trace);

        report.blank().line("Traversal complete!");
        let summary = format!("Visit order: {}", graph.format_path(&traversal.visit_order));
        Ok(report.finish(summary, traversal.path, RunStatus::Completed, trace))
    }

    fn walk(
        graph: &Graph,
        start: usize,
        report: &mut ReportBuilder,
        trace: &mut Trace,
    ) -> Traversal {
        let names = graph.names();
        let matrix = graph.matrix();
        let mut visited = vec![false; graph.vertex_count()];
        let mut stack = vec![start];
        let mut traversal = Traversal::default();

        trace.reset();
        traversal.path.push(start);
        report.line(format!("Start: {}", names[start])).blank();

        while let Some(&node) = stack.last() {
            if !visited[node] {
                visited[node] = true;
                traversal.visit_order.push(node);
                trace.mark_vertex(node, StepState::Visited);
                report.line(format!("Visiting: {}", names[node]));
            }

            match Self::next_vertex(matrix, node, &visited) {
                Some(next) => {
                    stack.push(next);
                    traversal.path.push(next);
                    trace.mark_edge(node, next, StepState::Visited);
                    report.line(format!(
                        "  Descending to: {} (weight: {})",
                        names[next], matrix[node][next]
                    ));
                }
                None => {
                    stack.pop();
                    if let Some(&parent) = stack.last() {
                        trace.mark_edge(node, parent, StepState::Backtrack);
                    }
                }
            }
        }

        traversal
    }

    /// `node` 的未访问邻居中边权最小者
    fn next_vertex(matrix: &[Vec<Weight>], node: usize, visited: &[bool]) -> Option<usize> {
        let mut best: Option<(usize, Weight)> = None;
        for (j, &weight) in matrix[node].iter().enumerate() {
            if weight == 0 || visited[j] {
                continue;
            }
            match best {
                Some((_, min)) if weight >= min => {}
                _ => best = Some((j, weight)),
            }
        }
        best.map(|(j, _)| j)
    }
}
