use clap::Parser;
use student_card::core::{ConfigProvider, RandomSource};
use student_card::utils::logger;
use student_card::{
    log_recovery_hint, render_card, CardLoader, CardSettings, CliConfig, RandomUserClient,
    RenderReport, RenderedOutput, Result, SeededRandom, ThreadRandom,
};

async fn run_with<R: RandomSource>(settings: &CardSettings, rng: R) -> Result<RenderReport> {
    let source = RandomUserClient::new(settings.api_endpoint());
    let mut loader = CardLoader::new(source, rng);
    render_card(&mut loader, settings).await
}

fn print_report(report: &RenderReport, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&report.card)?);
        return Ok(());
    }

    match &report.output {
        RenderedOutput::File(path) => println!("📁 Student card saved to: {}", path),
        RenderedOutput::Html(html) => println!("{}", html),
        RenderedOutput::Elements(document) => {
            for (id, text) in document.elements() {
                println!("{}: {}", id, text);
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            // 配置錯誤尚未被記錄，直接提示使用者
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    let outcome = match settings.seed {
        Some(seed) => run_with(&settings, SeededRandom::new(seed)).await,
        None => run_with(&settings, ThreadRandom).await,
    };

    match outcome {
        Ok(report) => print_report(&report, settings.json)?,
        Err(e) => {
            // The loader has already logged the failure.
            log_recovery_hint(&e);
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
