use clap::Parser;
use css_clean::core::cleaner;
use css_clean::utils::{logger, validation::Validate};
use css_clean::{CleanEngine, CleanPipeline, CliConfig, LocalStorage};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting css-clean");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - the stylesheet will not be modified");
        return perform_dry_run(&config);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 建立存儲與清理管道
    let storage = LocalStorage::new(config.styles_dir.clone());
    let stylesheet = config.stylesheet.clone();
    let pipeline = CleanPipeline::new(storage, config);

    // 建立引擎並運行
    let engine = CleanEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run() {
        Ok(output_path) => {
            tracing::info!("✅ Successfully cleaned {}", stylesheet);
            tracing::info!("📁 Output saved to: {}", output_path);
            println!("✅ Successfully cleaned {}", stylesheet);
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Clean process failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                css_clean::utils::error::ErrorSeverity::Low => 0, // 警告，但成功
                css_clean::utils::error::ErrorSeverity::Medium => 2, // 重試錯誤
                css_clean::utils::error::ErrorSeverity::High => 1, // 處理錯誤
                css_clean::utils::error::ErrorSeverity::Critical => 3, // 系統錯誤
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn perform_dry_run(config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let target = std::path::Path::new(&config.styles_dir).join(&config.stylesheet);

    println!("🔍 Dry Run Analysis:");
    println!("  Target: {}", target.display());

    let bytes = match std::fs::read(&target) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("❌ Failed to read '{}': {}", target.display(), e);
            eprintln!("💡 Make sure the stylesheet exists and is readable");
            std::process::exit(1);
        }
    };

    let result = cleaner::clean(&bytes);

    println!("  Size: {} bytes", bytes.len());
    println!("  Null bytes to remove: {}", result.nulls_removed);

    match &result.truncation {
        Some(t) => println!(
            "  ✂️ Trailing garbage at '{}' (offset {}, {} bytes would be dropped)",
            t.marker.as_str(),
            t.offset,
            t.bytes_dropped
        ),
        None => println!("  No trailing garbage marker found"),
    }

    println!("  Cleaned size would be: {} bytes", result.cleaned.len());
    println!();

    if result.is_dirty() {
        println!("✅ Dry run complete. Re-run without --dry-run to apply the changes.");
    } else {
        println!("✅ Stylesheet is already clean - nothing to do.");
    }

    Ok(())
}
