//! 邻接矩阵图模型
//!
//! 顶点编号为 `0..n`。矩阵单元为 `0` 表示无边，其他值为边权（无权图恒为 `1`）。
//! 边权限定在 32 位整数范围内，路径和与生成树代价用 `i64` 累加不会溢出。

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::core::error::{GraphError, GraphResult};

/// 矩阵中存储的边权
pub type Weight = i64;

/// 允许的最小边权
pub const MIN_WEIGHT: Weight = i32::MIN as Weight;
/// 允许的最大边权
pub const MAX_WEIGHT: Weight = i32::MAX as Weight;

/// 邻居顶点及连接边的权重
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub vertex: usize,
    pub weight: Weight,
}

/// 临时的 `(from, to, weight)` 三元组，用于构造生成树
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: Weight,
}

impl Edge {
    pub fn new(from: usize, to: usize, weight: Weight) -> Self {
        Self { from, to, weight }
    }
}

/// 带顶点名称的有向/无向、带权/无权图
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    n: usize,
    directed: bool,
    weighted: bool,
    matrix: Vec<Vec<Weight>>,
    names: Vec<String>,
}

impl Graph {
    /// 创建图，顶点默认命名为 `S0`, `S1`, ...
    pub fn new(n: usize, directed: bool, weighted: bool) -> GraphResult<Self> {
        Self::with_names(n, directed, weighted, Vec::<String>::new())
    }

    /// 使用自定义顶点名称创建图
    ///
    /// 超出 `n` 的名称被忽略，缺少的名称使用 `S<i>`。名称不区分大小写且必须唯一，
    /// 否则返回 [`GraphError::DuplicateVertex`]。
    pub fn with_names<I, S>(n: usize, directed: bool, weighted: bool, names: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if n == 0 {
            return Err(GraphError::InvalidVertexCount(n));
        }

        let mut given: Vec<String> = names.into_iter().take(n).map(Into::into).collect();
        for i in given.len()..n {
            given.push(format!("S{}", i));
        }

        let mut seen = HashSet::with_capacity(n);
        for name in &given {
            if !seen.insert(name.trim().to_lowercase()) {
                return Err(GraphError::DuplicateVertex(name.clone()));
            }
        }

        Ok(Self {
            n,
            directed,
            weighted,
            matrix: vec![vec![0; n]; n],
            names: given,
        })
    }

    /// 添加边 `u -> v`（无向图同时添加 `v -> u`）
    ///
    /// 无权图的权重强制为 `1`。超出 [`MIN_WEIGHT`]..=[`MAX_WEIGHT`] 的权重返回
    /// [`GraphError::WeightOutOfRange`]。
    pub fn add_edge(&mut self, u: usize, v: usize, weight: Weight) -> GraphResult<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&weight) {
            return Err(GraphError::WeightOutOfRange(weight));
        }
        let w = if self.weighted { weight } else { 1 };
        self.matrix[u][v] = w;
        if !self.directed {
            self.matrix[v][u] = w;
        }
        Ok(())
    }

    pub fn add_unweighted_edge(&mut self, u: usize, v: usize) -> GraphResult<()> {
        self.add_edge(u, v, 1)
    }

    pub fn add_edges(&mut self, edges: &[(usize, usize)]) -> GraphResult<()> {
        for &(u, v) in edges {
            self.add_unweighted_edge(u, v)?;
        }
        Ok(())
    }

    pub fn add_weighted_edges(&mut self, edges: &[(usize, usize, Weight)]) -> GraphResult<()> {
        for &(u, v, w) in edges {
            self.add_edge(u, v, w)?;
        }
        Ok(())
    }

    /// 删除边 `u -> v`（无向图两个方向都删除）
    pub fn remove_edge(&mut self, u: usize, v: usize) -> GraphResult<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.matrix[u][v] = 0;
        if !self.directed {
            self.matrix[v][u] = 0;
        }
        Ok(())
    }

    /// `u` 的所有直接邻居，按编号顺序
    pub fn neighbors_of(&self, u: usize) -> GraphResult<Vec<Neighbor>> {
        self.check_vertex(u)?;
        Ok(self.matrix[u]
            .iter()
            .enumerate()
            .filter(|(_, &w)| w != 0)
            .map(|(vertex, &weight)| Neighbor { vertex, weight })
            .collect())
    }

    pub fn has_negative_weight(&self) -> bool {
        self.matrix.iter().flatten().any(|&w| w < 0)
    }

    /// 边 `u -> v` 的权重，无边时为 `0`
    pub fn weight(&self, u: usize, v: usize) -> GraphResult<Weight> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.matrix[u][v])
    }

    /// 邻接矩阵的只读视图
    pub fn matrix(&self) -> &[Vec<Weight>] {
        &self.matrix
    }

    pub fn vertex_count(&self) -> usize {
        self.n
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn name_of(&self, index: usize) -> GraphResult<&str> {
        self.check_vertex(index)?;
        Ok(&self.names[index])
    }

    /// 边数，无向边只计一次
    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// 图中所有边，无向图只列出 `from < to` 的边
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        for i in 0..self.n {
            let first = if self.directed { 0 } else { i + 1 };
            for j in first..self.n {
                if self.matrix[i][j] != 0 {
                    edges.push(Edge::new(i, j, self.matrix[i][j]));
                }
            }
        }
        edges
    }

    /// 按名称查找顶点，忽略大小写和首尾空白
    pub fn index_of(&self, name: &str) -> Option<usize> {
        let cleaned = name.trim().to_lowercase();
        if cleaned.is_empty() {
            return None;
        }
        self.names
            .iter()
            .position(|candidate| candidate.trim().to_lowercase() == cleaned)
    }

    /// 解析用户输入：十进制编号或顶点名称
    pub fn resolve_vertex(&self, input: &str) -> GraphResult<usize> {
        let trimmed = input.trim();
        let index = match trimmed.parse::<usize>() {
            Ok(index) => Some(index),
            Err(_) => self.index_of(trimmed),
        };

        match index {
            Some(index) if index < self.n => Ok(index),
            _ => Err(GraphError::UnknownVertex(trimmed.to_string())),
        }
    }

    /// 检查 `v` 是否为合法顶点编号
    pub fn check_vertex(&self, v: usize) -> GraphResult<()> {
        if v >= self.n {
            return Err(GraphError::IndexOutOfRange {
                index: v,
                len: self.n,
            });
        }
        Ok(())
    }

    /// 渲染带顶点名称的邻接矩阵，列宽按最长名称对齐
    pub fn render_matrix(&self) -> String {
        let max_name_len = self
            .names
            .iter()
            .map(|name| name.chars().count())
            .max()
            .unwrap_or(0);
        let cell_width = (max_name_len + 2).max(6);

        let mut out = format!(
            "Adjacency matrix ({}, {}):\n\n",
            if self.directed { "directed" } else { "undirected" },
            if self.weighted { "weighted" } else { "unweighted" }
        );

        out.push_str(&" ".repeat(max_name_len + 3));
        for name in &self.names {
            out.push_str(&format!("{:>width$}", name, width = cell_width));
        }
        out.push('\n');

        out.push_str(&" ".repeat(max_name_len + 2));
        out.push('+');
        out.push_str(&"-".repeat(cell_width * self.n));
        out.push('\n');

        for (i, row) in self.matrix.iter().enumerate() {
            out.push_str(&format!("{:>width$} |", self.names[i], width = max_name_len));
            for cell in row {
                out.push_str(&format!("{:>width$}", cell, width = cell_width));
            }
            out.push('\n');
        }

        out
    }

    /// 用箭头连接路径上的顶点名称
    pub fn format_path(&self, path: &[usize]) -> String {
        path.iter()
            .map(|&v| self.names.get(v).map(String::as_str).unwrap_or("?"))
            .collect::<Vec<_>>()
            .join(" → ")
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render_matrix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        let mut graph = Graph::with_names(3, false, true, ["A", "B", "C"])
            .expect("graph should be created in test");
        graph
            .add_weighted_edges(&[(0, 1, 4), (1, 2, 2), (0, 2, 7)])
            .expect("edges should be added in test");
        graph
    }

    #[test]
    fn test_zero_vertices_rejected() {
        assert_eq!(
            Graph::new(0, false, true),
            Err(GraphError::InvalidVertexCount(0))
        );
    }

    #[test]
    fn test_default_names() {
        let graph = Graph::with_names(3, true, true, ["X"]).expect("graph should be created");
        assert_eq!(graph.names(), &["X", "S1", "S2"]);
    }

    #[test]
    fn test_undirected_symmetry() {
        let mut graph = triangle();
        assert_eq!(graph.weight(1, 0), Ok(4));
        graph.remove_edge(2, 1).expect("edge should be removed");
        assert_eq!(graph.weight(1, 2), Ok(0));
        assert_eq!(graph.weight(2, 1), Ok(0));
    }

    #[test]
    fn test_directed_edge_is_one_way() {
        let mut graph = Graph::new(2, true, true).expect("graph should be created");
        graph.add_edge(0, 1, 9).expect("edge should be added");
        assert_eq!(graph.weight(0, 1), Ok(9));
        assert_eq!(graph.weight(1, 0), Ok(0));
    }

    #[test]
    fn test_unweighted_forces_one() {
        let mut graph = Graph::new(2, false, false).expect("graph should be created");
        graph.add_edge(0, 1, 42).expect("edge should be added");
        assert_eq!(graph.weight(0, 1), Ok(1));
    }

    #[test]
    fn test_out_of_range() {
        let mut graph = triangle();
        assert_eq!(
            graph.add_edge(0, 3, 1),
            Err(GraphError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert!(graph.neighbors_of(5).is_err());
        assert!(graph.name_of(3).is_err());
    }

    #[test]
    fn test_neighbors_and_edges() {
        let graph = triangle();
        let neighbors = graph.neighbors_of(0).expect("neighbors should exist");
        assert_eq!(
            neighbors,
            vec![
                Neighbor { vertex: 1, weight: 4 },
                Neighbor { vertex: 2, weight: 7 }
            ]
        );
        assert_eq!(graph.edge_count(), 3);
        assert!(!graph.has_negative_weight());
    }

    #[test]
    fn test_negative_weight_detection() {
        let mut graph = Graph::new(2, true, true).expect("graph should be created");
        graph.add_edge(1, 0, -3).expect("edge should be added");
        assert!(graph.has_negative_weight());
    }

    #[test]
    fn test_resolve_vertex() {
        let graph = triangle();
        assert_eq!(graph.resolve_vertex("  b "), Ok(1));
        assert_eq!(graph.resolve_vertex("2"), Ok(2));
        assert_eq!(
            graph.resolve_vertex("7"),
            Err(GraphError::UnknownVertex("7".to_string()))
        );
        assert!(graph.resolve_vertex("   ").is_err());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        assert_eq!(
            Graph::with_names(2, false, true, ["Lyon", " lyon"]),
            Err(GraphError::DuplicateVertex(" lyon".to_string()))
        );
        // 默认名称也参与检查
        assert!(Graph::with_names(3, false, true, ["S1"]).is_err());
    }

    #[test]
    fn test_weight_range() {
        let mut graph = triangle();
        assert_eq!(
            graph.add_edge(0, 1, MAX_WEIGHT + 1),
            Err(GraphError::WeightOutOfRange(MAX_WEIGHT + 1))
        );
        assert_eq!(graph.weight(0, 1), Ok(4));
        graph.add_edge(0, 1, MIN_WEIGHT).expect("edge should be added");
        assert_eq!(graph.weight(1, 0), Ok(MIN_WEIGHT));
    }

    #[test]
    fn test_render_matrix() {
        let graph = triangle();
        let rendered = graph.render_matrix();
        assert!(rendered.starts_with("Adjacency matrix (undirected, weighted):"));
        assert!(rendered.contains("A |     0     4     7"));
        assert_eq!(graph.format_path(&[0, 2, 1]), "A → C → B");
    }
}
