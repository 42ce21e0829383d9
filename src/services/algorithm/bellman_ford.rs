//! Bellman-Ford算法模块
//!
//! 包含Bellman-Ford最短路径算法实现
//! 支持负权边，可检测负权环

use log::{debug, trace};

use super::report::{ReportBuilder, RunOutput, RunStatus};
use crate::core::{Graph, GraphResult, StepState, Trace, Weight};

pub const TITLE: &str = "Bellman-Ford";

/// Bellman-Ford算法结构体
pub struct BellmanFord;

/// Bellman-Ford算法结果
#[derive(Debug, Clone, PartialEq)]
pub struct BellmanFordResult {
    pub start: usize,
    /// 从起点到各节点的最短距离, `f64::INFINITY` when unreachable
    pub distances: Vec<f64>,
    /// 前驱节点，用于重建路径
    pub predecessors: Vec<Option<usize>>,
    /// 是否存在负权环
    pub has_negative_cycle: bool,
}

impl BellmanFordResult {
    /// 获取到目标节点的最短距离
    pub fn distance_to(&self, target: usize) -> Option<Weight> {
        match self.distances.get(target) {
            Some(d) if d.is_finite() => Some(*d as Weight),
            _ => None,
        }
    }

    /// 重建从起点到目标节点的路径
    pub fn reconstruct_path(&self, target: usize) -> Option<Vec<usize>> {
        if self.has_negative_cycle {
            return None;
        }
        self.distance_to(target)?;

        let mut path = vec![target];
        let mut current = target;
        while let Some(predecessor) = self.predecessors[current] {
            if path.contains(&predecessor) {
                return None;
            }
            path.push(predecessor);
            current = predecessor;
        }
        path.reverse();
        Some(path)
    }
}

impl BellmanFord {
    /// 执行Bellman-Ford算法
    pub fn shortest_paths(graph: &Graph, start: usize) -> GraphResult<BellmanFordResult> {
        graph.check_vertex(start)?;
        let mut report = ReportBuilder::new(TITLE);
        let mut trace = Trace::new();
        Ok(Self::relax(graph, start, &mut report, &mut trace))
    }

    pub fn run(graph: &Graph, start: usize, end: usize) -> GraphResult<RunOutput> {
        graph.check_vertex(start)?;
        graph.check_vertex(end)?;
        debug!("Bellman-Ford {} -> {}", start, end);

        let names = graph.names();
        let mut report = ReportBuilder::new(TITLE);
        let mut trace = Trace::new();
        report
            .line(format!("Start vertex: {}", names[start]))
            .line(format!("End vertex: {}", names[end]))
            .blank();

        let result = Self::relax(graph, start, &mut report, &mut trace);
        report.blank();

        if result.has_negative_cycle {
            let output = report.finish(
                "The graph contains a negative absorbing cycle.".to_string(),
                Vec::new(),
                RunStatus::NegativeCycle,
                trace,
            );
            return Ok(output);
        }

        let Some(path) = result.reconstruct_path(end) else {
            let summary = format!("No path exists between {} and {}.", names[start], names[end]);
            return Ok(report.finish(summary, Vec::new(), RunStatus::NoPath, trace));
        };

        let distance = result.distance_to(end);
        report
            .line(format!(
                "Shortest path from {} to {}:",
                names[start], names[end]
            ))
            .line(format!("Minimum distance: {}", distance.unwrap_or_default()));
        trace.mark_path(&path, StepState::Kept);

        let summary = format!("Shortest path: {}", graph.format_path(&path));
        let mut output = report.finish(summary, path, RunStatus::Completed, trace);
        output.distance = distance;
        Ok(output)
    }

    fn relax(
        graph: &Graph,
        start: usize,
        report: &mut ReportBuilder,
        steps: &mut Trace,
    ) -> BellmanFordResult {
        let n = graph.vertex_count();
        let matrix = graph.matrix();
        let names = graph.names();

        let mut distances = vec![f64::INFINITY; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        distances[start] = 0.0;
        steps.reset();
        steps.mark_vertex(start, StepState::Visited);

        // 松弛操作，执行n-1次
        for round in 1..n {
            report.line(format!("Round {}:", round));
            let mut updated = false;

            for u in 0..n {
                for v in 0..n {
                    let weight = matrix[u][v];
                    if weight == 0 {
                        continue;
                    }
                    let candidate = distances[u] + weight as f64;
                    if candidate < distances[v] {
                        distances[v] = candidate;
                        predecessors[v] = Some(u);
                        updated = true;
                        steps.mark_edge(u, v, StepState::ToVisit);
                        trace!("round {}: relax {} -> {} = {}", round, u, v, candidate);
                        report.line(format!(
                            "  {}: distance {}, predecessor {}",
                            names[v], candidate as Weight, names[u]
                        ));
                    }
                }
            }

            // 如果没有更新，提前终止
            if !updated {
                report.line("  No update, distances are final");
                break;
            }
        }

        let has_negative_cycle = Self::detect_negative_cycle(matrix, &distances);

        BellmanFordResult {
            start,
            distances,
            predecessors,
            has_negative_cycle,
        }
    }

    /// 检测图中是否存在负权环
    fn detect_negative_cycle(matrix: &[Vec<Weight>], distances: &[f64]) -> bool {
        for (u, row) in matrix.iter().enumerate() {
            for (v, &weight) in row.iter().enumerate() {
                if weight != 0 && distances[u] + (weight as f64) < distances[v] {
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_negative_weight_graph() -> Graph {
        // A->B -1, A->C 4, B->C 2, B->D 3, C->D -2
        let mut graph = Graph::with_names(4, true, true, ["A", "B", "C", "D"])
            .expect("graph should be created in test");
        graph
            .add_weighted_edges(&[(0, 1, -1), (0, 2, 4), (1, 2, 2), (1, 3, 3), (2, 3, -2)])
            .expect("edges should be added in test");
        graph
    }

    fn create_negative_cycle_graph() -> Graph {
        // A->B 1, B->C -3, C->A 1, D 孤立
        let mut graph = Graph::with_names(4, true, true, ["A", "B", "C", "D"])
            .expect("graph should be created in test");
        graph
            .add_weighted_edges(&[(0, 1, 1), (1, 2, -3), (2, 0, 1)])
            .expect("edges should be added in test");
        graph
    }

    #[test]
    fn test_negative_weights() {
        let graph = create_negative_weight_graph();
        let output = BellmanFord::run(&graph, 0, 3).expect("run should succeed");

        assert_eq!(output.status, RunStatus::Completed);
        // A -> B -> C -> D = -1 + 2 - 2
        assert_eq!(output.distance, Some(-1));
        assert_eq!(output.path, vec![0, 1, 2, 3]);
        assert!(output.report.contains("Minimum distance: -1"));
    }

    #[test]
    fn test_negative_cycle_detection() {
        let graph = create_negative_cycle_graph();
        let result = BellmanFord::shortest_paths(&graph, 0).expect("run should succeed");
        assert!(result.has_negative_cycle);
        assert_eq!(result.reconstruct_path(2), None);

        let output = BellmanFord::run(&graph, 0, 2).expect("run should succeed");
        assert_eq!(output.status, RunStatus::NegativeCycle);
        assert!(output.path.is_empty());
        assert_eq!(
            output.summary,
            "The graph contains a negative absorbing cycle."
        );
    }

    #[test]
    fn test_unreachable_node() {
        let graph = create_negative_weight_graph();
        let output = BellmanFord::run(&graph, 3, 0).expect("run should succeed");
        assert_eq!(output.status, RunStatus::NoPath);
        assert_eq!(output.summary, "No path exists between D and A.");

        let result = BellmanFord::shortest_paths(&graph, 3).expect("run should succeed");
        assert_eq!(result.distance_to(0), None);
        assert!(result.distances[0].is_infinite());
    }

    #[test]
    fn test_same_node() {
        let graph = create_negative_weight_graph();
        let result = BellmanFord::shortest_paths(&graph, 0).expect("run should succeed");
        assert_eq!(result.distance_to(0), Some(0));
        assert_eq!(result.reconstruct_path(0), Some(vec![0]));
    }

    #[test]
    fn test_rounds_are_logged() {
        let graph = create_negative_weight_graph();
        let output = BellmanFord::run(&graph, 0, 3).expect("run should succeed");
        assert!(output.report.contains("Round 1:"));
        assert!(output.report.contains("  B: distance -1, predecessor A"));
    }

    #[test]
    fn test_single_node() {
        let graph = Graph::new(1, true, true).expect("graph should be created in test");
        let output = BellmanFord::run(&graph, 0, 0).expect("run should succeed");
        assert_eq!(output.path, vec![0]);
        assert_eq!(output.distance, Some(0));
    }
}
