//! 日志初始化
//!
//! 终端被界面占用，日志写入数据目录下按天滚动的文件：
//! `<data_local_dir>/pat-login/logs/pat-login.log.YYYY-MM-DD`。
//! `log` 宏的记录经由 tracing-subscriber 的 tracing-log 桥接一并写入。

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "pat-login.log";

/// 日志目录
pub fn log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("pat-login").join("logs"))
}

/// 安装全局 subscriber；返回的 guard 必须活到程序结束，否则缓冲中的日志会丢失
///
/// 找不到或无法创建日志目录时不记录日志。
pub fn init_logging() -> Option<WorkerGuard> {
    let dir = log_dir()?;
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("Failed to create log directory {}: {e}", dir.display());
        return None;
    }

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::daily(
        &dir,
        LOG_FILE_PREFIX,
    ));

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_filter(env_filter);

    let _ = tracing_subscriber::registry().with(file_layer).try_init();

    Some(guard)
}
