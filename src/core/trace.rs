//! 可回放的高亮事件记录
//!
//! 算法运行时追加 [`Step`] 记录，渲染器事后回放。记录不会影响算法本身。

use serde::Serialize;

/// 顶点或边的高亮状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    /// 已发现，尚未探索
    ToVisit,
    /// 正在探索
    Visited,
    /// 属于最终结果
    Kept,
    /// 回溯时再次经过
    Backtrack,
}

impl StepState {
    pub fn label(&self) -> &'static str {
        match self {
            StepState::ToVisit => "to-visit",
            StepState::Visited => "visited",
            StepState::Kept => "kept",
            StepState::Backtrack => "backtrack",
        }
    }
}

/// 一条不可变的高亮事件，顶点标记没有 `from`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    pub from: Option<usize>,
    pub to: usize,
    pub state: StepState,
}

impl Step {
    pub fn vertex(vertex: usize, state: StepState) -> Self {
        Self {
            from: None,
            to: vertex,
            state,
        }
    }

    pub fn edge(from: usize, to: usize, state: StepState) -> Self {
        Self {
            from: Some(from),
            to,
            state,
        }
    }

    pub fn is_edge(&self) -> bool {
        self.from.is_some()
    }

    /// `(min, max)` 端点对，供只绘制一次无向边的渲染器使用
    pub fn edge_key(&self) -> Option<(usize, usize)> {
        self.from.map(|from| (from.min(self.to), from.max(self.to)))
    }
}

/// 一次运行产生的有序、只追加的步骤序列
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新一次运行前清空记录
    pub fn reset(&mut self) {
        self.steps.clear();
    }

    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn mark_vertex(&mut self, vertex: usize, state: StepState) {
        self.push(Step::vertex(vertex, state));
    }

    pub fn mark_edge(&mut self, from: usize, to: usize, state: StepState) {
        self.push(Step::edge(from, to, state));
    }

    /// 把 `path` 中每对相邻顶点标记为保留边
    pub fn mark_path(&mut self, path: &[usize], state: StepState) {
        if let [single] = path {
            self.mark_vertex(*single, state);
        }
        for pair in path.windows(2) {
            self.mark_edge(pair[0], pair[1], state);
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// 按记录顺序返回标记为 [`StepState::Kept`] 的边
    pub fn kept_edges(&self) -> Vec<(usize, usize)> {
        self.steps
            .iter()
            .filter(|step| step.state == StepState::Kept)
            .filter_map(|step| step.from.map(|from| (from, step.to)))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
