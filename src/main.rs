use clap::Parser;
use phone_lookup::utils::error::ErrorSeverity;
use phone_lookup::utils::{logger, validation::Validate};
use phone_lookup::{
    CliConfig, CountryTable, LocalStorage, LookupEngine, LookupPipeline, NumverifyClient,
    PhonenumberParser, TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting phone-lookup CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if config.list_countries {
        for record in CountryTable::all() {
            println!("{} - {} {}", record.prefix, record.name, record.emoji);
        }
        return Ok(());
    }

    // 套用 TOML 設定檔
    if let Some(path) = config.config_file.clone() {
        match TomlConfig::from_file(&path) {
            Ok(overlay) => config.apply_toml(overlay),
            Err(e) => {
                tracing::error!("❌ Failed to load config file {}: {}", path, e);
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        }
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    // 建立存儲、轉接器與管道
    let storage = LocalStorage::default();
    let parser = PhonenumberParser::new();
    let api = NumverifyClient::new(
        config.api_endpoint.clone(),
        config.api_key.clone(),
        config.request_timeout,
    )?;
    let pipeline = LookupPipeline::new(storage, config, parser, api);
    let engine = LookupEngine::new(pipeline);

    match engine.run().await {
        Ok(saved) => {
            tracing::info!("✅ Lookup completed successfully");
            if let Some(path) = saved {
                println!("\n📁 Results saved to: {}", path);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Lookup failed: {} (Category: {:?}, Severity: {:?})",
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
        }
    }

    Ok(())
}
