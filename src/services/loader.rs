//! 图文件加载
//!
//! 读取带名称的邻接矩阵，每行一个顶点：
//!
//! ```text
//! Paris   0  50 110
//! Caen   50   0  75
//! Rennes 110 75   0
//! ```
//!
//! 少于两个字段的行被跳过。权重必须是 32 位整数，顶点名称不区分大小写且必须唯一。
//! 结果总是带权图，矩阵不对称时为有向图。

use std::fs;
use std::path::Path;

use log::debug;

use crate::core::{Graph, GraphError, GraphResult, Weight};

/// 将矩阵文本解析为图
pub fn parse_matrix(text: &str) -> GraphResult<Graph> {
    let mut names = Vec::new();
    let mut rows: Vec<(usize, Vec<Weight>)> = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 2 {
            continue;
        }

        let mut row = Vec::with_capacity(tokens.len() - 1);
        for token in &tokens[1..] {
            let normalized = token.replace(['–', '−'], "-");
            let weight = normalized.parse::<i32>().map_err(|e| GraphError::Parse {
                line: line_no,
                message: format!("invalid weight '{}': {}", token, e),
            })?;
            row.push(Weight::from(weight));
        }

        let name = tokens[0];
        if names.iter().any(|known: &String| known.eq_ignore_ascii_case(name)) {
            return Err(GraphError::Parse {
                line: line_no,
                message: format!("duplicate vertex name '{}'", name),
            });
        }
        names.push(name.to_string());
        rows.push((line_no, row));
    }

    let n = rows.len();
    if n == 0 {
        return Err(GraphError::Parse {
            line: 0,
            message: "no matrix rows found".to_string(),
        });
    }
    for (line_no, row) in &rows {
        if row.len() != n {
            return Err(GraphError::Parse {
                line: *line_no,
                message: format!("expected {} weights, found {}", n, row.len()),
            });
        }
    }

    let directed = (0..n).any(|i| (0..n).any(|j| rows[i].1[j] != rows[j].1[i]));
    debug!("parsed {} vertices, directed: {}", n, directed);

    let mut graph = Graph::with_names(n, directed, true, names)?;
    for (i, (_, row)) in rows.iter().enumerate() {
        for (j, &weight) in row.iter().enumerate() {
            if weight != 0 {
                graph.add_edge(i, j, weight)?;
            }
        }
    }
    Ok(graph)
}

/// 读取并解析矩阵文件
pub fn load_from_path<P: AsRef<Path>>(path: P) -> GraphResult<Graph> {
    let path = path.as_ref();
    debug!("loading graph from {}", path.display());
    let text = fs::read_to_string(path)?;
    parse_matrix(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_matrix_is_undirected() {
        let text = "A 0 3 0\nB 3 0 4\nC 0 4 0\n";
        let graph = parse_matrix(text).expect("matrix should parse in test");
        assert!(!graph.is_directed());
        assert!(graph.is_weighted());
        assert_eq!(graph.names(), &["A", "B", "C"]);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.weight(2, 1), Ok(4));
    }

    #[test]
    fn test_asymmetric_matrix_is_directed() {
        let text = "A 0 –2\nB 0 0\n";
        let graph = parse_matrix(text).expect("matrix should parse in test");
        assert!(graph.is_directed());
        assert_eq!(graph.weight(0, 1), Ok(-2));
        assert_eq!(graph.weight(1, 0), Ok(0));
    }

    #[test]
    fn test_minus_sign_normalized() {
        let text = "A 0 −5\nB −5 0\n";
        let graph = parse_matrix(text).expect("matrix should parse in test");
        assert!(graph.has_negative_weight());
        assert!(!graph.is_directed());
    }

    #[test]
    fn test_short_lines_skipped() {
        let text = "\nA 0 1\n   \nlonely\nB 1 0\n";
        let graph = parse_matrix(text).expect("matrix should parse in test");
        assert_eq!(graph.vertex_count(), 2);
    }

    #[test]
    fn test_ragged_row_rejected() {
        let text = "A 0 1\nB 1\n";
        assert!(parse_matrix(text).is_err());
        let err = parse_matrix("A 0 1 2\nB 1 0 3\nC 2 3\n").expect_err("ragged row in test");
        assert_eq!(
            err,
            GraphError::Parse {
                line: 3,
                message: "expected 3 weights, found 2".to_string(),
            }
        );
    }

    #[test]
    fn test_bad_weight_rejected() {
        let err = parse_matrix("A 0 x\nB 1 0\n").expect_err("bad weight in test");
        assert!(matches!(err, GraphError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_weight_beyond_i32_rejected() {
        let big = i64::MAX / 2 + 1;
        let text = format!("A 0 {b} 0\nB {b} 0 {b}\nC 0 {b} 0\n", b = big);
        let err = parse_matrix(&text).expect_err("oversized weight in test");
        assert!(matches!(err, GraphError::Parse { line: 1, .. }));

        let text = format!("A 0 {m}\nB {m} 0\n", m = i32::MAX);
        let graph = parse_matrix(&text).expect("i32::MAX should parse in test");
        assert_eq!(graph.weight(0, 1), Ok(i32::MAX as Weight));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = parse_matrix("Lyon 0 1\nLYON 1 0\n").expect_err("duplicate name in test");
        assert_eq!(
            err,
            GraphError::Parse {
                line: 2,
                message: "duplicate vertex name 'LYON'".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(
            parse_matrix("\n\n"),
            Err(GraphError::Parse { line: 0, .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_from_path("/nonexistent/graph.txt").expect_err("missing file in test");
        assert!(matches!(err, GraphError::Io(_)));
    }
}
