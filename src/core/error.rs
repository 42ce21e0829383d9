//! 统一错误处理
//!
//! 只有非法参数才是错误。运行中的不可行结果（无路径、负权环、非连通生成森林）
//! 通过 [`RunStatus`](crate::services::algorithm::RunStatus) 返回。

use thiserror::Error;

/// 图模型、算法分发和加载器产生的错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {index} is out of range (graph has {len} vertices)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("a graph needs at least one vertex, got {0}")]
    InvalidVertexCount(usize),

    #[error("unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("duplicate vertex name: {0}")]
    DuplicateVertex(String),

    #[error("edge weight {0} is outside the 32-bit integer range")]
    WeightOutOfRange(i64),

    #[error("{0} requires non-negative edge weights")]
    NegativeWeights(String),

    #[error("{algorithm} requires a {argument} vertex")]
    MissingArgument {
        algorithm: &'static str,
        argument: &'static str,
    },

    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// 统一的结果类型
pub type GraphResult<T> = Result<T, GraphError>;

impl From<std::io::Error> for GraphError {
    fn from(err: std::io::Error) -> Self {
        GraphError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for GraphError {
    fn from(err: toml::de::Error) -> Self {
        GraphError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for GraphError {
    fn from(err: toml::ser::Error) -> Self {
        GraphError::Config(err.to_string())
    }
}

impl GraphError {
    /// 是否由调用方传入的非法参数引起
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            GraphError::IndexOutOfRange { .. }
                | GraphError::UnknownVertex(_)
                | GraphError::DuplicateVertex(_)
                | GraphError::WeightOutOfRange(_)
                | GraphError::MissingArgument { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_error_message() {
        let err = GraphError::IndexOutOfRange { index: 12, len: 10 };
        assert_eq!(
            err.to_string(),
            "vertex 12 is out of range (graph has 10 vertices)"
        );
        assert!(err.is_argument_error());
    }

    #[test]
    fn test_weight_error_message() {
        let err = GraphError::WeightOutOfRange(1 << 40);
        assert_eq!(
            err.to_string(),
            "edge weight 1099511627776 is outside the 32-bit integer range"
        );
        assert!(err.is_argument_error());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt");
        let err: GraphError = io.into();
        assert!(matches!(err, GraphError::Io(_)));
        assert!(!err.is_argument_error());
    }
}
