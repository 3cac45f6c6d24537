//! Little Lemon reservation desk
//!
//! Terminal booking form for a single restaurant.
//!
//! # 模块结构
//!
//! ```text
//! reservation-desk/src/
//! ├── core/          # 配置
//! ├── form/          # 表单状态控制器
//! ├── ui/            # 页面外壳、表单视图、弹窗
//! ├── utils/         # 日志
//! └── app.rs         # 事件循环
//! ```

pub mod app;
pub mod core;
pub mod form;
pub mod ui;
pub mod utils;

// Re-export 公共类型
pub use core::Config;
pub use form::{FormController, SubmitOutcome};

// Re-export logger functions
pub use utils::logger::init_logger;

/// 设置环境 (dotenv, 配置校验, 日志)
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    config.validate()?;
    init_logger(&config)?;

    Ok(config)
}
