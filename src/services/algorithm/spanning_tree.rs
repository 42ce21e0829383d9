//! 最小生成树结果
//!
//! Kruskal 与 Prim 共用。

use serde::Serialize;

use crate::core::{Edge, Graph, Weight};

/// 生成树（或森林）选中的边及其总权重
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningTree {
    pub vertex_count: usize,
    pub edges: Vec<Edge>,
    pub total_cost: Weight,
}

impl SpanningTree {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
            total_cost: 0,
        }
    }

    pub fn add(&mut self, edge: Edge) {
        self.total_cost += edge.weight;
        self.edges.push(edge);
    }

    /// 恰有 `n - 1` 条边时覆盖整个图
    pub fn is_spanning(&self) -> bool {
        self.edges.len() + 1 == self.vertex_count
    }

    /// 从 `start` 深度优先遍历生成树，每个子树结束后重新追加父顶点，
    /// 例如树 `a-b, a-c` 得到 `a b a c a`。只遍历 `start` 所在的分量。
    pub fn walk(&self, start: usize) -> Vec<usize> {
        if start >= self.vertex_count {
            return Vec::new();
        }

        let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); self.vertex_count];
        for edge in &self.edges {
            adjacency[edge.from].push(edge.to);
            adjacency[edge.to].push(edge.from);
        }

        let mut visited = vec![false; self.vertex_count];
        let mut path = vec![start];
        // (顶点, 下一个待尝试的邻接下标)
        let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
        visited[start] = true;

        while let Some(top) = stack.last_mut() {
            let (vertex, next) = *top;
            match adjacency[vertex].get(next) {
                Some(&child) => {
                    top.1 += 1;
                    if !visited[child] {
                        visited[child] = true;
                        path.push(child);
                        stack.push((child, 0));
                    }
                }
                None => {
                    stack.pop();
                    if let Some(&(parent, _)) = stack.last() {
                        path.push(parent);
                    }
                }
            }
        }

        path
    }

    /// 用顶点名称输出 `from — to : weight` 行
    pub fn edge_lines(&self, graph: &Graph) -> Vec<String> {
        self.edges
            .iter()
            .map(|edge| format_edge(graph, edge))
            .collect()
    }
}

pub(crate) fn format_edge(graph: &Graph, edge: &Edge) -> String {
    let names = graph.names();
    format!("{} — {} : {}", names[edge.from], names[edge.to], edge.weight)
}
