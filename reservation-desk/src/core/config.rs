use shared::{AppError, AppResult};
use std::time::Duration;

/// 预订终端配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | RESTAURANT_NAME | Little Lemon | 页头与介绍中的餐厅名称 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志过滤指令 |
/// | LOG_DIR | (未设置) | 设置后按天滚动写入日志文件 |
/// | LOG_JSON | false | 日志文件使用 JSON 格式 |
/// | TICK_RATE_MS | 100 | 事件轮询间隔(毫秒) |
/// | SHOW_LOG_PANE | true | 是否显示操作日志面板 |
///
/// # 示例
///
/// ```ignore
/// RESTAURANT_NAME="Little Lemon Chicago" LOG_DIR=./logs cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 餐厅名称
    pub restaurant_name: String,
    /// 运行环境: development | production
    pub environment: String,
    /// 日志级别 / EnvFilter 指令
    pub log_level: String,
    /// 日志目录，未设置时不写文件
    pub log_dir: Option<String>,
    /// 日志文件是否使用 JSON 格式
    pub log_json: bool,
    /// 事件轮询间隔 (毫秒)
    pub tick_rate_ms: u64,
    /// 是否显示日志面板
    pub show_log_pane: bool,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            restaurant_name: std::env::var("RESTAURANT_NAME")
                .unwrap_or_else(|_| "Little Lemon".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            tick_rate_ms: std::env::var("TICK_RATE_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(100),
            show_log_pane: std::env::var("SHOW_LOG_PANE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(restaurant_name: impl Into<String>, show_log_pane: bool) -> Self {
        let mut config = Self::from_env();
        config.restaurant_name = restaurant_name.into();
        config.show_log_pane = show_log_pane;
        config
    }

    /// 检查配置是否可用
    pub fn validate(&self) -> AppResult<()> {
        if self.restaurant_name.trim().is_empty() {
            return Err(
                AppError::config("Restaurant name must not be empty")
                    .with_detail("key", "RESTAURANT_NAME"),
            );
        }
        if !(1..=5000).contains(&self.tick_rate_ms) {
            return Err(AppError::config(format!(
                "Tick rate must be between 1 and 5000 ms, got {}",
                self.tick_rate_ms
            ))
            .with_detail("key", "TICK_RATE_MS"));
        }
        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    #[test]
    fn test_with_overrides() {
        let config = Config::with_overrides("Little Lemon Uptown", false);
        assert_eq!(config.restaurant_name, "Little Lemon Uptown");
        assert!(!config.show_log_pane);
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let config = Config::with_overrides("   ", true);
        let err = config.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
    }

    #[test]
    fn test_validate_tick_rate() {
        let mut config = Config::with_overrides("Little Lemon", true);
        config.tick_rate_ms = 0;
        assert!(config.validate().is_err());

        config.tick_rate_ms = 250;
        assert!(config.validate().is_ok());
        assert_eq!(config.tick_rate(), Duration::from_millis(250));
    }
}
