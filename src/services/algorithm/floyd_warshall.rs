//! Floyd-Warshall算法模块
//!
//! 包含Floyd-Warshall全源最短路径算法实现
//! 适用于稠密图，时间复杂度O(V^3)
//!
//! 距离矩阵 `W` 和前驱矩阵 `P` 的每个阶段都以定宽块写入报告。

use std::fmt::Write;

use log::debug;

use super::report::{ReportBuilder, RunOutput, RunStatus};
use crate::core::{Graph, GraphResult, StepState, Trace, Weight};

pub const TITLE: &str = "Floyd-Warshall";

/// 矩阵单元格的最小宽度
const MIN_CELL_WIDTH: usize = 7;

/// Floyd-Warshall算法结构体
pub struct FloydWarshall;

/// Floyd-Warshall算法结果
#[derive(Debug, Clone, PartialEq)]
pub struct FloydWarshallResult {
    /// 距离矩阵 W, `f64::INFINITY` when unreachable
    pub distances: Vec<Vec<f64>>,
    /// 前驱矩阵 P: `predecessors[i][j]` is the vertex before `j` on the path from `i`
    pub predecessors: Vec<Vec<Option<usize>>>,
}

impl FloydWarshallResult {
    /// 获取从u到v的最短距离
    pub fn distance(&self, u: usize, v: usize) -> Option<Weight> {
        let d = *self.distances.get(u)?.get(v)?;
        if d.is_finite() {
            Some(d as Weight)
        } else {
            None
        }
    }

    /// 对角线出现负值即存在负权环
    pub fn has_negative_cycle(&self) -> bool {
        self.distances
            .iter()
            .enumerate()
            .any(|(i, row)| row[i] < 0.0)
    }

    /// 重建从u到v的最短路径, walking `P` backward from `v`.
    pub fn reconstruct_path(&self, u: usize, v: usize) -> Option<Vec<usize>> {
        if self.has_negative_cycle() {
            return None;
        }
        self.distance(u, v)?;

        let n = self.predecessors.len();
        let mut path = vec![v];
        let mut current = v;
        while current != u {
            let previous = self.predecessors[u][current]?;
            path.push(previous);
            current = previous;
            if path.len() > n {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

impl FloydWarshall {
    /// 执行Floyd-Warshall算法
    pub fn shortest_paths(graph: &Graph) -> FloydWarshallResult {
        let mut report = ReportBuilder::new(TITLE);
        let mut trace = Trace::new();
        Self::compute(graph, &mut report, &mut trace)
    }

    pub fn run(graph: &Graph, start: usize, end: usize) -> GraphResult<RunOutput> {
        graph.check_vertex(start)?;
        graph.check_vertex(end)?;
        debug!("Floyd-Warshall {} -> {}", start, end);

        let names = graph.names();
        let mut report = ReportBuilder::new(TITLE);
        let mut trace = Trace::new();
        let result = Self::compute(graph, &mut report, &mut trace);

        if result.has_negative_cycle() {
            let output = report.finish(
                "The graph contains a negative absorbing cycle.".to_string(),
                Vec::new(),
                RunStatus::NegativeCycle,
                trace,
            );
            return Ok(output);
        }

        let Some(path) = result.reconstruct_path(start, end) else {
            let summary = format!("No path exists between {} and {}.", names[start], names[end]);
            return Ok(report.finish(summary, Vec::new(), RunStatus::NoPath, trace));
        };

        let distance = result.distance(start, end);
        report.line(format!("Minimum distance: {}", distance.unwrap_or_default()));
        trace.mark_path(&path, StepState::Kept);

        let summary = format!("Shortest path: {}", graph.format_path(&path));
        let mut output = report.finish(summary, path, RunStatus::Completed, trace);
        output.distance = distance;
        Ok(output)
    }

    fn compute(graph: &Graph, report: &mut ReportBuilder, steps: &mut Trace) -> FloydWarshallResult {
        let n = graph.vertex_count();
        let matrix = graph.matrix();
        let names = graph.names();
        let width = cell_width(names);

        // 初始化距离矩阵
        let mut w = vec![vec![f64::INFINITY; n]; n];
        let mut p: Vec<Vec<Option<usize>>> = vec![vec![None; n]; n];
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    w[i][j] = 0.0;
                } else if matrix[i][j] != 0 {
                    w[i][j] = matrix[i][j] as f64;
                }
                if matrix[i][j] != 0 {
                    p[i][j] = Some(i);
                }
            }
        }
        steps.reset();
        report.raw(&render_stage("Initial matrices", names, &w, &p, width));

        for k in 0..n {
            steps.mark_vertex(k, StepState::Visited);
            for i in 0..n {
                for j in 0..n {
                    let through_k = w[i][k] + w[k][j];
                    if through_k < w[i][j] {
                        w[i][j] = through_k;
                        p[i][j] = p[k][j];
                    }
                }
            }
            let title = format!("After intermediate vertex {}", names[k]);
            report.raw(&render_stage(&title, names, &w, &p, width));
        }

        report.raw(&render_stage("Final matrices", names, &w, &p, width));

        FloydWarshallResult {
            distances: w,
            predecessors: p,
        }
    }
}

fn cell_width(names: &[String]) -> usize {
    names
        .iter()
        .map(|name| name.chars().count() + 2)
        .max()
        .unwrap_or(0)
        .max(MIN_CELL_WIDTH)
}

/// 依次输出 `W` 和 `P`，每个单元格左对齐到 `width` 个字符
fn render_stage(
    title: &str,
    names: &[String],
    w: &[Vec<f64>],
    p: &[Vec<Option<usize>>],
    width: usize,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- {} ---", title);
    let _ = writeln!(out);

    let _ = writeln!(out, "Distances (matrix W):");
    push_header(&mut out, names, width);
    for (i, row) in w.iter().enumerate() {
        let _ = write!(out, "{:<width$}", names[i], width = width);
        for &value in row {
            let cell = if value.is_infinite() {
                "∞".to_string()
            } else {
                format!("{}", value as Weight)
            };
            let _ = write!(out, "{:<width$}", cell, width = width);
        }
        out.push('\n');
    }
    out.push('\n');

    let _ = writeln!(out, "Predecessors (matrix P):");
    push_header(&mut out, names, width);
    for (i, row) in p.iter().enumerate() {
        let _ = write!(out, "{:<width$}", names[i], width = width);
        for predecessor in row {
            let cell = predecessor.map_or("-", |v| names[v].as_str());
            let _ = write!(out, "{:<width$}", cell, width = width);
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

fn push_header(out: &mut String, names: &[String], width: usize) {
    let _ = write!(out, "{:<width$}", "", width = width);
    for name in names {
        let _ = write!(out, "{:<width$}", name, width = width);
    }
    out.push('\n');
}
