//! Dijkstra算法模块
//!
//! 带权图单源最短路径。要求权重非负，调用方需先检查
//! [`Graph::has_negative_weight`]。

use log::{debug, trace};

use super::report::{ReportBuilder, RunOutput, RunStatus};
use crate::core::{Graph, GraphResult, StepState, Trace, Weight};

pub const TITLE: &str = "Shortest path between two vertices (Dijkstra)";

/// Dijkstra算法结构体
pub struct Dijkstra;

/// Dijkstra算法结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DijkstraResult {
    pub start: usize,
    /// 不可达的顶点为 `None`
    pub distances: Vec<Option<Weight>>,
    pub predecessors: Vec<Option<usize>>,
}

impl DijkstraResult {
    pub fn distance_to(&self, target: usize) -> Option<Weight> {
        self.distances.get(target).copied().flatten()
    }

    /// `start -> target` 的路径，不可达时为 `None`
    pub fn reconstruct_path(&self, target: usize) -> Option<Vec<usize>> {
        self.distance_to(target)?;

        let mut path = vec![target];
        let mut current = target;
        while let Some(predecessor) = self.predecessors[current] {
            if path.len() > self.predecessors.len() {
                return None;
            }
            path.push(predecessor);
            current = predecessor;
        }
        path.reverse();

        if path.first() == Some(&self.start) {
            Some(path)
        } else {
            None
        }
    }
}

impl Dijkstra {
    /// 计算从起点到所有节点的最短距离
    pub fn shortest_paths(graph: &Graph, start: usize) -> GraphResult<DijkstraResult> {
        graph.check_vertex(start)?;
        let mut report = ReportBuilder::new(TITLE);
        let mut trace = Trace::new();
        Ok(Self::relax_all(graph, start, &mut report, &mut trace))
    }

    /// `start -> end` 的最短路径及完整报告
    pub fn run(graph: &Graph, start: usize, end: usize) -> GraphResult<RunOutput> {
        graph.check_vertex(start)?;
        graph.check_vertex(end)?;
        debug!("Dijkstra {} -> {}", start, end);

        let names = graph.names();
        let mut report = ReportBuilder::new(TITLE);
        let mut trace = Trace::new();

        report
            .line(format!("Start vertex: {}", names[start]))
            .line(format!("End vertex: {}", names[end]))
            .blank();

        let result = Self::relax_all(graph, start, &mut report, &mut trace);
        report.blank();

        let (summary, path, status) = match result.distance_to(end) {
            None => (
                format!("No path found between {} and {}.", names[start], names[end]),
                Vec::new(),
                RunStatus::NoPath,
            ),
            Some(distance) => match result.reconstruct_path(end) {
                Some(path) => {
                    report.line(format!("Minimum distance: {}", distance));
                    trace.mark_path(&path, StepState::Kept);
                    (
                        format!("Shortest path: {}", graph.format_path(&path)),
                        path,
                        RunStatus::Completed,
                    )
                }
                None => ("No path available.".to_string(), Vec::new(), RunStatus::NoPath),
            },
        };

        let distance = if status.is_success() {
            result.distance_to(end)
        } else {
            None
        };
        let mut output = report.finish(summary, path, status, trace);
        output.distance = distance;
        Ok(output)
    }

    fn relax_all(
        graph: &Graph,
        start: usize,
        report: &mut ReportBuilder,
        steps: &mut Trace,
    ) -> DijkstraResult {
        let n = graph.vertex_count();
        let matrix = graph.matrix();
        let names = graph.names();

        let mut distances: Vec<Option<Weight>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut visited = vec![false; n];
        distances[start] = Some(0);
        steps.reset();

        for _ in 0..n.saturating_sub(1) {
            let Some(u) = Self::closest_unvisited(&distances, &visited) else {
                break;
            };
            visited[u] = true;
            let dist_u = distances[u].unwrap_or_default();

            match predecessors[u] {
                Some(p) => steps.mark_edge(p, u, StepState::Visited),
                None => steps.mark_vertex(u, StepState::Visited),
            }
            report.line(format!("Selected {} (distance {})", names[u], dist_u));

            for v in 0..n {
                let weight = matrix[u][v];
                if visited[v] || weight == 0 {
                    continue;
                }
                let candidate = dist_u + weight;
                if distances[v].map_or(true, |d| candidate < d) {
                    distances[v] = Some(candidate);
                    predecessors[v] = Some(u);
                    steps.mark_edge(u, v, StepState::ToVisit);
                    trace!("relax {} -> {}: {}", u, v, candidate);
                    report.line(format!(
                        "  Update {}: {} (via {})",
                        names[v], candidate, names[u]
                    ));
                }
            }
        }

        DijkstraResult {
            start,
            distances,
            predecessors,
        }
    }

    /// 已知距离最小的未访问顶点，相同时取编号最小
    fn closest_unvisited(distances: &[Option<Weight>], visited: &[bool]) -> Option<usize> {
        let mut best: Option<(usize, Weight)> = None;
        for (v, distance) in distances.iter().enumerate() {
            if visited[v] {
                continue;
            }
            if let Some(d) = *distance {
                if best.map_or(true, |(_, min)| d < min) {
                    best = Some((v, d));
                }
            }
        }
        best.map(|(v, _)| v)
    }
}
