//! 配置与日志集成测试
//!
//! 测试范围:
//! - 配置文件加载和保存
//! - 日志初始化、文件写入和关闭

mod common;

use std::fs;
use std::time::Duration;

use common::temp_file_with;
use graphtrace::config::{Config, OutputFormat};
use graphtrace::services::{french_cities, Algorithm};
use graphtrace::utils::logging;
use serial_test::serial;

/// 测试配置默认值
#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.log.level, "info");
    assert_eq!(config.log.dir, "logs");
    assert_eq!(config.log.file, "graphtrace");
    assert_eq!(config.log.max_file_size, 10 * 1024 * 1024);
    assert_eq!(config.log.max_files, 5);
    assert_eq!(config.output.format, OutputFormat::Text);
    assert_eq!(config.output.step_delay_ms, 300);
}

/// 测试配置序列化和反序列化
#[test]
fn test_config_serialization() {
    let mut config = Config::default();
    config.log.level = "debug".to_string();
    config.log.max_files = 3;
    config.output.show_trace = true;

    let toml_str = toml::to_string_pretty(&config).expect("序列化配置失败");
    assert!(toml_str.contains("[log]"));
    assert!(toml_str.contains("level = \"debug\""));
    assert!(toml_str.contains("[output]"));
    assert!(toml_str.contains("format = \"text\""));

    let loaded: Config = toml::from_str(&toml_str).expect("反序列化配置失败");
    assert_eq!(loaded, config);
}

#[test]
fn test_config_file_with_only_output_section() {
    let file = temp_file_with("[output]\nshow_trace = true\nstep_delay_ms = 0\n");
    let config = Config::load(file.path()).expect("配置加载失败");
    assert!(config.output.show_trace);
    assert_eq!(config.output.step_delay_ms, 0);
    assert_eq!(config.log.level, "info");
}

/// 测试日志文件创建和写入
#[test]
#[serial]
fn test_logging_writes_file() {
    let dir = tempfile::tempdir().expect("创建日志目录失败");
    let mut config = Config::default();
    config.log.dir = dir.path().to_string_lossy().into_owned();
    config.log.file = "integration".to_string();
    config.log.level = "debug".to_string();

    logging::init(&config).expect("日志初始化失败");
    assert!(logging::is_initialized());

    let graph = french_cities().expect("sample graph should build");
    Algorithm::Kruskal
        .run(&graph, None, None)
        .expect("Kruskal should succeed");

    logging::shutdown();
    assert!(!logging::is_initialized());
    std::thread::sleep(Duration::from_millis(100));

    let log_files: Vec<_> = fs::read_dir(dir.path())
        .expect("读取日志目录失败")
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().starts_with("integration"))
        .collect();
    assert!(!log_files.is_empty(), "日志文件应该已创建");
}
