use reservation_desk::{app, setup_environment};

fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 配置, 日志)
    let config = setup_environment()?;

    tracing::info!(
        restaurant = %config.restaurant_name,
        environment = %config.environment,
        "🍋 Reservation desk starting..."
    );

    // 2. 运行终端界面
    if let Err(e) = app::run(config) {
        tracing::error!("Reservation desk error: {}", e);
        return Err(e);
    }

    Ok(())
}
