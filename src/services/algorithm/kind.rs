//! 算法选择
//!
//! 封闭的算法种类集合，在边界处解析一次，再分发到对应实现。

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::Serialize;

use super::report::RunOutput;
use super::{bellman_ford, bfs, dfs, dijkstra, floyd_warshall, kruskal, prim};
use super::{BellmanFord, Bfs, Dfs, Dijkstra, FloydWarshall, Kruskal, Prim};
use crate::core::{Graph, GraphError, GraphResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    BellmanFord,
    FloydWarshall,
    Kruskal,
    Prim,
}

impl Algorithm {
    pub fn all() -> &'static [Algorithm] {
        &[
            Algorithm::Bfs,
            Algorithm::Dfs,
            Algorithm::Dijkstra,
            Algorithm::BellmanFord,
            Algorithm::FloydWarshall,
            Algorithm::Kruskal,
            Algorithm::Prim,
        ]
    }

    /// 报告首行的标题
    pub fn title(&self) -> &'static str {
        match self {
            Algorithm::Bfs => bfs::TITLE,
            Algorithm::Dfs => dfs::TITLE,
            Algorithm::Dijkstra => dijkstra::TITLE,
            Algorithm::BellmanFord => bellman_ford::TITLE,
            Algorithm::FloydWarshall => floyd_warshall::TITLE,
            Algorithm::Kruskal => kruskal::TITLE,
            Algorithm::Prim => prim::TITLE,
        }
    }

    /// 命令行中使用的短名称
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::BellmanFord => "bellman-ford",
            Algorithm::FloydWarshall => "floyd-warshall",
            Algorithm::Kruskal => "kruskal",
            Algorithm::Prim => "prim",
        }
    }

    pub fn needs_start(&self) -> bool {
        !matches!(self, Algorithm::Kruskal)
    }

    pub fn needs_end(&self) -> bool {
        matches!(
            self,
            Algorithm::Dijkstra | Algorithm::BellmanFord | Algorithm::FloydWarshall
        )
    }

    /// 在 `graph` 上执行算法
    ///
    /// 算法不需要的参数被忽略。缺少必需顶点时返回 [`GraphError::MissingArgument`]，
    /// Dijkstra 拒绝含负权边的图。
    pub fn run(
        &self,
        graph: &Graph,
        start: Option<usize>,
        end: Option<usize>,
    ) -> GraphResult<RunOutput> {
        debug!("dispatching {} (start {:?}, end {:?})", self, start, end);

        match self {
            Algorithm::Bfs => Bfs::run(graph, self.require_start(start)?),
            Algorithm::Dfs => Dfs::run(graph, self.require_start(start)?),
            Algorithm::Dijkstra => {
                let (start, end) = (self.require_start(start)?, self.require_end(end)?);
                if graph.has_negative_weight() {
                    return Err(GraphError::NegativeWeights(self.title().to_string()));
                }
                Dijkstra::run(graph, start, end)
            }
            Algorithm::BellmanFord => {
                BellmanFord::run(graph, self.require_start(start)?, self.require_end(end)?)
            }
            Algorithm::FloydWarshall => {
                FloydWarshall::run(graph, self.require_start(start)?, self.require_end(end)?)
            }
            Algorithm::Kruskal => Kruskal::run(graph),
            Algorithm::Prim => Prim::run(graph, self.require_start(start)?),
        }
    }

    fn require_start(&self, start: Option<usize>) -> GraphResult<usize> {
        start.ok_or(GraphError::MissingArgument {
            algorithm: self.name(),
            argument: "start",
        })
    }

    fn require_end(&self, end: Option<usize>) -> GraphResult<usize> {
        end.ok_or(GraphError::MissingArgument {
            algorithm: self.name(),
            argument: "end",
        })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "bfs" | "breadth-first" => Ok(Algorithm::Bfs),
            "dfs" | "depth-first" => Ok(Algorithm::Dfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "bellman-ford" | "bellmanford" | "bellman" => Ok(Algorithm::BellmanFord),
            "floyd-warshall" | "floydwarshall" | "floyd" => Ok(Algorithm::FloydWarshall),
            "kruskal" => Ok(Algorithm::Kruskal),
            "prim" => Ok(Algorithm::Prim),
            _ => Err(GraphError::UnknownAlgorithm(s.to_string())),
        }
    }
}
