//! 算法模块
//!
//! 包含图相关算法实现：遍历、最短路径与最小生成树

pub mod bellman_ford;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod disjoint_set;
pub mod floyd_warshall;
pub mod kind;
pub mod kruskal;
pub mod prim;
pub mod report;
pub mod spanning_tree;

// 重新导出常用算法结构体
pub use bellman_ford::{BellmanFord, BellmanFordResult};
pub use bfs::Bfs;
pub use dfs::Dfs;
pub use dijkstra::{Dijkstra, DijkstraResult};
pub use disjoint_set::DisjointSet;
pub use floyd_warshall::{FloydWarshall, FloydWarshallResult};
pub use kind::Algorithm;
pub use kruskal::Kruskal;
pub use prim::Prim;
pub use report::{RunOutput, RunStatus, Traversal};
pub use spanning_tree::SpanningTree;
