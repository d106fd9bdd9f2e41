use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::BufWriter;
use uni_registrar::app::seed_demo;
use uni_registrar::utils::error::ErrorSeverity;
use uni_registrar::utils::logger::{self, LogFormat};
use uni_registrar::utils::validation::Validate;
use uni_registrar::{render, CliConfig, Registrar, RegistrarError, ScenarioConfig};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    let log_format = if config.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_cli_logger(config.verbose, log_format);

    tracing::info!("Starting uni-registrar");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&config) {
        if let Some(e) = e.downcast_ref::<RegistrarError>() {
            tracing::error!(
                "❌ Report failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
            return Ok(());
        }
        return Err(e);
    }

    Ok(())
}

fn run(config: &CliConfig) -> anyhow::Result<()> {
    let mut registrar = Registrar::new();

    // 載入情境：指定檔案或內建示範
    match &config.scenario {
        Some(path) => {
            tracing::info!("📁 Loading scenario from: {}", path);
            let scenario = ScenarioConfig::from_file(path)?;
            scenario.validate()?;
            scenario.apply(&mut registrar)?;
        }
        None => {
            tracing::info!("No scenario given, using the built-in demo");
            seed_demo(&mut registrar)?;
        }
    }

    match &config.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file '{}'", path))?;
            render(&registrar, config.format, BufWriter::new(file))?;
            tracing::info!("✅ Report saved to: {}", path);
        }
        None => {
            let stdout = std::io::stdout();
            render(&registrar, config.format, stdout.lock())?;
        }
    }

    Ok(())
}
