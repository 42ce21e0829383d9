//! 算法运行结果
//!
//! 所有算法共用的输出结构和报告构建器。

use std::fmt::Write;

use serde::Serialize;

use crate::core::{Trace, Weight};

/// 一次运行的结果状态，只有 `Completed` 表示得到了完整结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Completed,
    /// 终点从起点不可达
    NoPath,
    /// 存在负权环，距离无定义
    NegativeCycle,
    /// 只能构建生成森林
    Disconnected,
}

impl RunStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, RunStatus::Completed)
    }
}

/// 调用方或渲染器需要的全部运行输出
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunOutput {
    pub algorithm: String,
    /// 完整的逐步报告，以 `summary` 结尾
    pub report: String,
    pub summary: String,
    pub path: Vec<usize>,
    pub status: RunStatus,
    pub trace: Trace,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<Weight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<Weight>,
}

impl RunOutput {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// BFS 或 DFS 遍历的访问顺序和入队（入栈）路径
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Traversal {
    /// 按首次访问排序的顶点
    pub visit_order: Vec<usize>,
    /// 按加入顺序记录的所有前沿顶点
    pub path: Vec<usize>,
}

/// 累积报告行并组装 [`RunOutput`]
pub(crate) struct ReportBuilder {
    algorithm: String,
    text: String,
}

impl ReportBuilder {
    pub(crate) fn new(title: &str) -> Self {
        let mut text = String::new();
        let _ = writeln!(text, "=== {} ===", title);
        Self {
            algorithm: title.to_string(),
            text,
        }
    }

    pub(crate) fn line(&mut self, line: impl AsRef<str>) -> &mut Self {
        self.text.push_str(line.as_ref());
        self.text.push('\n');
        self
    }

    pub(crate) fn blank(&mut self) -> &mut Self {
        self.text.push('\n');
        self
    }

    pub(crate) fn raw(&mut self, block: &str) -> &mut Self {
        self.text.push_str(block);
        self
    }

    pub(crate) fn finish(
        mut self,
        summary: String,
        path: Vec<usize>,
        status: RunStatus,
        trace: Trace,
    ) -> RunOutput {
        self.text.push_str(&summary);
        self.text.push('\n');
        RunOutput {
            algorithm: self.algorithm,
            report: self.text,
            summary,
            path,
            status,
            trace,
            distance: None,
            total_cost: None,
        }
    }
}
