pub mod error;
pub mod graph;
pub mod trace;

// 错误和结果类型
pub use error::{GraphError, GraphResult};

// 核心数据类型
pub use graph::{Edge, Graph, Neighbor, Weight, MAX_WEIGHT, MIN_WEIGHT};

// 轨迹记录
pub use trace::{Step, StepState, Trace};
