//! GraphTrace - 基于邻接矩阵的逐步图算法
//!
//! 在小型带权图上执行遍历、最短路径和最小生成树算法，并记录每个高亮事件，
//! 供渲染器事后回放。

pub mod config;
pub mod core;
pub mod services;
pub mod utils;
