// 日志工具模块
//
// 基于 flexi_logger 的文件日志，按大小轮转，异步写入

use crate::config::{Config, LogConfig};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use std::sync::Mutex;

/// 全局日志句柄，关闭时用于 flush
static LOGGER_HANDLE: Mutex<Option<LoggerHandle>> = Mutex::new(None);

/// 按应用配置初始化日志系统
///
/// # Examples
/// ```no_run
/// use cypherdsl::config::Config;
/// use cypherdsl::utils::logging;
///
/// let config = Config::default();
/// logging::init(&config).expect("日志初始化失败");
/// ```
pub fn init(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    init_with(&config.log)
}

/// 按日志配置初始化日志系统
///
/// 重复初始化时替换日志级别，不会重新打开文件
pub fn init_with(log: &LogConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut guard = LOGGER_HANDLE
        .lock()
        .map_err(|e| format!("日志句柄锁被污染: {}", e))?;

    if let Some(handle) = guard.as_mut() {
        handle.parse_new_spec(&log.level)?;
        return Ok(());
    }

    let handle = Logger::try_with_str(&log.level)?
        .log_to_file(FileSpec::default().basename(&log.file).directory(&log.dir))
        .rotate(
            Criterion::Size(log.max_file_size),
            Naming::Numbers,
            Cleanup::KeepLogFiles(log.max_files),
        )
        .write_mode(WriteMode::Async)
        .append()
        .start()?;
    *guard = Some(handle);

    log::info!("日志系统初始化完成: {}/{}", log.dir, log.file);
    Ok(())
}

/// 刷新并关闭日志系统
///
/// 阻塞直到异步写线程处理完已有日志
pub fn shutdown() {
    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        if let Some(handle) = guard.take() {
            handle.flush();
        }
    }
}

/// 检查日志系统是否已初始化
pub fn is_initialized() -> bool {
    LOGGER_HANDLE
        .lock()
        .map(|guard| guard.is_some())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_logging_init_and_shutdown() {
        let temp_dir = tempfile::tempdir().expect("创建临时目录失败");
        let log = LogConfig {
            level: "debug".to_string(),
            dir: temp_dir.path().to_string_lossy().into_owned(),
            file: "unit".to_string(),
            ..LogConfig::default()
        };

        let result = init_with(&log);
        assert!(result.is_ok(), "日志初始化失败: {:?}", result.err());
        assert!(is_initialized());

        // 再次初始化只调整级别
        let mut quieter = log.clone();
        quieter.level = "warn".to_string();
        assert!(init_with(&quieter).is_ok());

        log::warn!("测试日志消息");

        shutdown();
        assert!(!is_initialized());
    }
}
