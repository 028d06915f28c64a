use anyhow::{Context, Result};
use chrono::{Datelike, Local, Timelike};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use tracing_subscriber::{
    EnvFilter, Registry,
    fmt::{self, FormatEvent, FormatFields, format::Writer},
    layer::{Layer, SubscriberExt},
    registry::LookupSpan,
    util::SubscriberInitExt,
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    /// 日志目录, 为空时只输出到控制台
    #[serde(default)]
    pub directory: Option<String>,
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
    #[serde(default = "default_true")]
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            directory: None,
            file_prefix: default_file_prefix(),
            ansi: true,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_file_prefix() -> String {
    "hevc-mc".to_string()
}

fn default_true() -> bool {
    true
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// 初始化全局日志订阅器.
///
/// 控制台始终输出; 配置了 `directory` 时另写按天滚动的日志文件.
/// 库内 `log` 宏的记录经 tracing-subscriber 桥接后一并输出.
pub fn init(config: LoggingConfig) -> Result<()> {
    let console_layer = fmt::Layer::default()
        .with_writer(std::io::stdout)
        .with_ansi(config.ansi)
        .event_format(LineFormatter { colored: config.ansi })
        .with_filter(build_filter(&config.level)?);

    let file_layer = match &config.directory {
        Some(directory) => {
            std::fs::create_dir_all(directory)
                .with_context(|| format!("创建日志目录失败, path={directory}"))?;
            let appender =
                tracing_appender::rolling::daily(Path::new(directory), &config.file_prefix);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            LOG_GUARD.set(guard).ok();
            Some(
                fmt::Layer::default()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .event_format(LineFormatter { colored: false })
                    .with_filter(build_filter(&config.level)?),
            )
        }
        None => None,
    };

    Registry::default()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("全局日志订阅器已初始化")?;

    tracing::debug!(
        "日志系统初始化完成, level={}, directory={:?}",
        config.level,
        config.directory
    );
    Ok(())
}

/// 解析日志级别过滤表达式, 如 `info` 或 `hevc_mc_interp=debug,warn`
pub(crate) fn build_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level).with_context(|| format!("无效的日志级别: {level}"))
}

/// 单行格式: `[MM-DD hh:mm:ss.mmm] LEVEL file:line > message`
struct LineFormatter {
    colored: bool,
}

impl<S, N> FormatEvent<S, N> for LineFormatter
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let now = Local::now();
        let meta = event.metadata();
        write!(
            writer,
            "[{:02}-{:02} {:02}:{:02}:{:02}.{:03}] ",
            now.month(),
            now.day(),
            now.hour(),
            now.minute(),
            now.second(),
            now.timestamp_subsec_millis()
        )?;
        let level = meta.level().to_string();
        if self.colored {
            let color = match *meta.level() {
                tracing::Level::ERROR => "\x1b[31m",
                tracing::Level::WARN => "\x1b[33m",
                tracing::Level::INFO => "\x1b[32m",
                _ => "\x1b[34m",
            };
            write!(writer, "{color}{level:5}\x1b[0m ")?;
        } else {
            write!(writer, "{level:5} ")?;
        }
        write!(
            writer,
            "{}:{} > ",
            meta.file().unwrap_or("unknown"),
            meta.line().unwrap_or(0)
        )?;
        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert!(config.directory.is_none(), "默认不写日志文件");
        assert_eq!(config.file_prefix, "hevc-mc");
    }

    #[test]
    fn test_build_filter() {
        assert!(build_filter("debug").is_ok());
        assert!(build_filter("hevc_mc_interp=trace,warn").is_ok());
        assert!(build_filter("hevc_mc_interp=verbose").is_err(), "非法表达式应报错");
    }

    #[test]
    fn test_config_partial_deserialize() {
        let config: LoggingConfig =
            serde_json::from_str(r#"{"level":"debug"}"#).expect("解析日志配置失败");
        assert_eq!(config.level, "debug");
        assert!(config.ansi);
        assert_eq!(config.file_prefix, "hevc-mc");
    }
}
