// ==========================================
// 物流决策支持引擎 - 命令行主入口
// ==========================================
// 职责: 解析命令行 → 加载配置与数据集 → 调用 API → 输出 JSON 报告
// 说明: 报告写 stdout,日志写 stderr
// ==========================================

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;

use shiplytics::config::{config_keys, ConfigManager};
use shiplytics::{logging, LogisticsApi, APP_NAME, VERSION};

/// 物流决策支持引擎命令行
#[derive(Parser, Debug)]
#[command(name = "shiplytics")]
#[command(about = "Logistics decision support: carrier profitability, stock transfers, vehicle dispatch")]
#[command(version)]
struct Cli {
    /// Config file path (default: <config_dir>/shiplytics/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Dataset directory (overrides config and SHIPLYTICS_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List route labels present in the joined order view
    Routes,

    /// List inventory product categories
    Categories,

    /// List cities covered by route records
    Cities,

    /// Route network statistics
    Stats,

    /// Carrier profitability analysis and switch simulation for one route
    Profit {
        #[arg(long)]
        route: String,

        /// Percentage of the worst carrier's orders to move (0-100)
        #[arg(long = "switch")]
        switch_percent: Option<f64>,
    },

    /// Inventory status and transfer recommendations for one category
    Inventory {
        #[arg(long)]
        category: String,
    },

    /// Shortest direct route and vehicle recommendations
    Dispatch {
        #[arg(long)]
        origin: String,

        #[arg(long)]
        destination: String,
    },

    /// Data-quality report for the dataset directory
    Validate,

    /// Print the effective configuration
    Config,
}

/// 报告信封
#[derive(Debug, Serialize)]
struct ReportEnvelope<T: Serialize> {
    app: &'static str,
    version: &'static str,
    generated_at: DateTime<Utc>,
    report: T,
}

fn print_report<T: Serialize>(report: T) -> Result<()> {
    let envelope = ReportEnvelope {
        app: APP_NAME,
        version: VERSION,
        generated_at: Utc::now(),
        report,
    };
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let mut config = ConfigManager::load_or_default(cli.config.as_deref())
        .context("配置加载失败")?;
    if let Some(dir) = &cli.data_dir {
        config.set_override(config_keys::DATA_DIR, dir.display().to_string());
    }

    // 初始化日志系统
    logging::init(&config.log_level(), config.log_json());

    tracing::info!("==================================================");
    tracing::info!("{} v{}", APP_NAME, VERSION);
    tracing::info!("==================================================");

    if let Command::Config = cli.command {
        let snapshot: serde_json::Value = serde_json::from_str(&config.get_config_snapshot()?)?;
        return print_report(snapshot);
    }

    let data_dir = config.data_dir();
    tracing::info!("使用数据目录: {}", data_dir.display());

    let api = LogisticsApi::load(&data_dir, config.dataset_file_names())
        .await
        .with_context(|| format!("数据集加载失败: {}", data_dir.display()))?;

    match cli.command {
        Command::Routes => print_report(api.list_routes()?),
        Command::Categories => print_report(api.list_categories()?),
        Command::Cities => print_report(api.list_cities()?),
        Command::Stats => print_report(api.network_stats()?),
        Command::Profit {
            route,
            switch_percent,
        } => {
            let percent = switch_percent.unwrap_or_else(|| config.default_switch_percent());
            print_report(api.profit_report(&route, percent)?)
        }
        Command::Inventory { category } => print_report(api.inventory_report(&category)?),
        Command::Dispatch {
            origin,
            destination,
        } => print_report(api.dispatch_report(&origin, &destination)?),
        Command::Validate => {
            let report = api.data_quality_report();
            let has_errors = report.has_errors();
            print_report(&report)?;
            if has_errors {
                bail!("数据质量校验发现 ERROR 级问题");
            }
            Ok(())
        }
        Command::Config => Ok(()),
    }
}
