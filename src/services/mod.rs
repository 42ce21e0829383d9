//! 服务层模块
//!
//! 算法实现，以及图的加载与示例数据

pub mod algorithm;
pub mod loader;
pub mod samples;

pub use algorithm::*;
pub use loader::{load_from_path, parse_matrix};
pub use samples::french_cities;
