// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 支持环境变量配置日志级别
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日志系统
///
/// # 参数
/// - level: 默认日志级别（来自配置 log_level）
/// - json: 是否输出 JSON 格式日志
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器,优先于 level
///   例如: RUST_LOG=debug 或 RUST_LOG=shiplytics::engine=trace
///
/// 日志写入 stderr,stdout 只输出报告
///
/// # 示例
/// ```no_run
/// use shiplytics::logging;
/// logging::init("info", false);
/// ```
pub fn init(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true);

    // 重复初始化时忽略（测试或嵌入调用场景）
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

/// 初始化测试环境的日志系统
///
/// 使用更详细的日志级别，便于调试
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
