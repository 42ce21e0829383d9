//! 自定义断言辅助模块

use graphtrace::core::{Graph, Weight};
use graphtrace::services::RunOutput;

/// 断言 path 上每一对相邻顶点之间都有边，并返回路径总权重
pub fn assert_path_weight(graph: &Graph, path: &[usize]) -> Weight {
    let mut total = 0;
    for pair in path.windows(2) {
        let weight = graph
            .weight(pair[0], pair[1])
            .expect("path vertices should be in range");
        assert_ne!(weight, 0, "no edge between {} and {}", pair[0], pair[1]);
        total += weight;
    }
    total
}

/// 断言报告以标题开头并以摘要结尾
pub fn assert_report_frame(output: &RunOutput) {
    let first = output.report.lines().next().unwrap_or_default();
    assert_eq!(first, format!("=== {} ===", output.algorithm));
    assert_eq!(
        output.report.lines().last(),
        Some(output.summary.as_str()),
        "摘要应该是报告的最后一行"
    );
}
