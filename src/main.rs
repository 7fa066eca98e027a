use clap::Parser;
use scan_sim::core::report;
use scan_sim::utils::logger;
use scan_sim::{CliConfig, ConfigLayer, CsvFileSink, RandomSkip, ScanConfig, ScanError, ScanSimulator, TomlConfig};

fn fail(e: &ScanError) -> ! {
    tracing::error!(
        "❌ Scan simulator failed: {} (Category: {:?})",
        e,
        e.category()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn load_config(cli: &CliConfig) -> scan_sim::Result<ScanConfig> {
    let file_layer = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            TomlConfig::from_file(path)?.layer()
        }
        None => ConfigLayer::default(),
    };

    ScanConfig::resolve(cli.layer().or(file_layer))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to install Ctrl-C handler: {}", e);
        std::future::pending::<()>().await;
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    // 先輪詢一次以安裝 Ctrl-C 處理器，之後的中斷都會被攔截並輸出摘要
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);
    tokio::select! {
        biased;
        () = &mut shutdown => return Ok(()),
        () = std::future::ready(()) => {}
    }

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => fail(&e),
    };
    tracing::debug!("Resolved config: {:?}", config);

    print!("{}", report::banner(&config));
    println!();

    let sink = match CsvFileSink::open(&config.csv_path) {
        Ok(sink) => sink,
        Err(e) => fail(&e),
    };
    if sink.created() {
        println!("{}", report::created_notice());
    }

    let policy = RandomSkip::new(config.skip_probability, config.seed);
    let mut simulator = ScanSimulator::new(sink, policy, config);

    let summary = match simulator
        .run_with(shutdown, |event| println!("{}", report::event_line(event)))
        .await
    {
        Ok(summary) => summary,
        Err(e) => fail(&e),
    };

    println!("{}", report::summary(&summary));

    if cli.json_summary {
        let json = match serde_json::to_string(&summary) {
            Ok(json) => json,
            Err(e) => fail(&ScanError::from(e)),
        };
        println!("{}", json);
    }

    Ok(())
}
