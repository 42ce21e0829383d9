//! 示例图
//!
//! 法国十座城市之间的参考路网。命令行未指定图文件时使用，测试中作为固定数据。

use crate::core::{Graph, GraphResult, Weight};

pub const CITY_NAMES: [&str; 10] = [
    "Paris", "Caen", "Rennes", "Nantes", "Bordeaux", "Lille", "Nancy", "Dijon", "Lyon",
    "Grenoble",
];

pub const CITY_ROADS: [(usize, usize, Weight); 20] = [
    (0, 1, 50),
    (0, 2, 110),
    (0, 3, 80),
    (0, 4, 150),
    (0, 5, 70),
    (0, 7, 60),
    (1, 2, 75),
    (1, 5, 65),
    (2, 3, 45),
    (2, 4, 130),
    (3, 4, 90),
    (4, 8, 100),
    (5, 6, 100),
    (5, 7, 120),
    (6, 7, 75),
    (6, 8, 90),
    (6, 9, 80),
    (7, 8, 70),
    (7, 9, 75),
    (8, 9, 40),
];

/// 由 [`CITY_NAMES`] 和 [`CITY_ROADS`] 构成的无向带权图
pub fn french_cities() -> GraphResult<Graph> {
    let mut graph = Graph::with_names(CITY_NAMES.len(), false, true, CITY_NAMES)?;
    graph.add_weighted_edges(&CITY_ROADS)?;
    Ok(graph)
}
