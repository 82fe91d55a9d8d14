use dotenv::dotenv;
use std::io::Write;
use human_panic::setup_panic;
use tracing::{debug, error, warn};

// 从 lib.rs 导入模块
use registro_curso::config::AppConfig;
use registro_curso::runtime::lifetime;

#[tokio::main]
async fn main() -> std::process::ExitCode {
    dotenv().ok();

    // 记录程序启动时间
    let start_time = chrono::Utc::now();

    // 初始化配置
    setup_panic!();
    AppConfig::init().expect("Failed to initialize configuration");
    let config = AppConfig::get();

    // 初始化日志（报表写入 stdout，日志走 stderr）
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    // 打印信息
    warn!(
        "Starting {}...
        Project: {}
        Version: {}",
        config.app.system_name,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let startup = match lifetime::startup::prepare_startup().await {
        Ok(startup) => startup,
        Err(e) => {
            error!("{}", e);
            return std::process::ExitCode::FAILURE;
        }
    };

    let report = match startup.services.reports.enrollment_report().await {
        Ok(report) => report,
        Err(e) => {
            error!("Failed to build enrollment report: {}", e);
            return std::process::ExitCode::FAILURE;
        }
    };

    // 查询完成后再锁定 stdout
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = report.render(&mut stdout).and_then(|()| stdout.flush()) {
        error!("Failed to write enrollment report: {}", e);
        return std::process::ExitCode::FAILURE;
    }

    debug!(
        "Completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(start_time)
            .num_milliseconds()
    );

    std::process::ExitCode::SUCCESS
}
