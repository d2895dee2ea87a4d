use anyhow::Context;
use clap::Parser;
use solid_demos::utils::error::ErrorSeverity;
use solid_demos::utils::{logger, validation::Validate};
use solid_demos::{build_demos, CliConfig, DemoRunner, SolidError};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting solid-demos");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.load_demo_config() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    let runner = DemoRunner::new(build_demos(&cli.demos, &config));

    let mut stdout = std::io::stdout();

    if cli.list {
        for demo in runner.demos() {
            writeln!(stdout, "{:<4} {}", demo.name(), demo.principle())
                .context("failed to write demo list")?;
        }
        return Ok(());
    }

    match runner.run(&mut stdout) {
        Ok(count) => {
            tracing::info!("✅ {} demo(s) completed", count);
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Demo failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            exit_with(&e)
        }
    }
}

fn exit_with(e: &SolidError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定結束碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
