//! 集成测试共享工具模块
//!
//! 提供参考城市图和辅助函数，供所有集成测试使用

#![allow(dead_code)]

pub mod assertions;

use graphtrace::core::Graph;
use graphtrace::services::french_cities;

pub const PARIS: usize = 0;
pub const CAEN: usize = 1;
pub const RENNES: usize = 2;
pub const NANTES: usize = 3;
pub const BORDEAUX: usize = 4;
pub const LILLE: usize = 5;
pub const NANCY: usize = 6;
pub const DIJON: usize = 7;
pub const LYON: usize = 8;
pub const GRENOBLE: usize = 9;

/// 参考城市图 (10 vertices, 20 roads)
pub fn city_graph() -> Graph {
    french_cities().expect("sample graph should build in test")
}

/// `path` 上的顶点名称，便于断言
pub fn names_along(graph: &Graph, path: &[usize]) -> Vec<String> {
    path.iter().map(|&v| graph.names()[v].clone()).collect()
}

/// 把 `content` 写入新的临时文件并返回
pub fn temp_file_with(content: &str) -> tempfile::NamedTempFile {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temporary file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temporary file");
    file
}
