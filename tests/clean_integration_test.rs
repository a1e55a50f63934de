use anyhow::Result;
use css_clean::{CleanEngine, CleanPipeline, CliConfig, LocalStorage};
use tempfile::TempDir;

fn config_for(dir: &TempDir) -> CliConfig {
    CliConfig {
        styles_dir: dir.path().to_str().unwrap().to_string(),
        stylesheet: "global.css".to_string(),
        verbose: false,
        monitor: false,
        dry_run: false,
    }
}

/// 在臨時目錄放入損壞的樣式表，跑完整的清理流程後回傳檔案內容
fn run_clean(initial: &[u8]) -> Result<Vec<u8>> {
    let temp_dir = TempDir::new()?;
    let target = temp_dir.path().join("global.css");
    std::fs::write(&target, initial)?;

    let config = config_for(&temp_dir);
    let storage = LocalStorage::new(config.styles_dir.clone());
    let pipeline = CleanPipeline::new(storage, config);
    let engine = CleanEngine::new_with_monitoring(pipeline, false);

    let output_path = engine.run().map_err(anyhow::Error::new)?;
    assert!(output_path.ends_with("global.css"));

    Ok(std::fs::read(&target)?)
}

#[test]
fn test_end_to_end_strips_null_bytes() -> Result<()> {
    let cleaned = run_clean(b"bo\x00dy { col\x00or: red }\n")?;

    assert_eq!(cleaned, b"body { color: red }\n");
    assert!(!cleaned.contains(&0));
    Ok(())
}

#[test]
fn test_end_to_end_truncates_after_brace_star() -> Result<()> {
    let cleaned = run_clean(b"body { color: red }*\x00\x00garbage appended by the crash")?;

    assert_eq!(cleaned, b"body { color: red }\n");
    Ok(())
}

#[test]
fn test_end_to_end_truncates_at_outline_rule() -> Result<()> {
    let cleaned = run_clean(b"body { color: red }\n* { outline: 1px solid red; } junk")?;

    assert_eq!(cleaned, b"body { color: red }\n");
    Ok(())
}

#[test]
fn test_end_to_end_clean_file_is_unchanged() -> Result<()> {
    let initial = b"body { color: red }\n.header { margin: 0; }\n";
    let cleaned = run_clean(initial)?;

    assert_eq!(cleaned, initial);
    Ok(())
}

#[test]
fn test_end_to_end_overwrites_in_place() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let target = temp_dir.path().join("global.css");
    std::fs::write(&target, b"a { b: c }* trailing")?;

    let config = config_for(&temp_dir);
    let storage = LocalStorage::new(config.styles_dir.clone());
    let pipeline = CleanPipeline::new(storage, config);
    let engine = CleanEngine::new(pipeline);

    engine.run().map_err(anyhow::Error::new)?;

    // 沒有產生其他輸出檔案，目標檔案被就地覆寫
    let entries: Vec<_> = std::fs::read_dir(temp_dir.path())?
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec!["global.css"]);
    assert_eq!(std::fs::read(&target)?, b"a { b: c }\n");
    Ok(())
}

#[test]
fn test_end_to_end_with_monitoring_enabled() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let target = temp_dir.path().join("global.css");
    std::fs::write(&target, b"body {\x00 color: red }\n")?;

    let config = config_for(&temp_dir);
    let storage = LocalStorage::new(config.styles_dir.clone());
    let pipeline = CleanPipeline::new(storage, config);
    let engine = CleanEngine::new_with_monitoring(pipeline, true);

    // 監控只影響日誌，不影響清理結果
    engine.run().map_err(anyhow::Error::new)?;

    assert_eq!(std::fs::read(&target)?, b"body { color: red }\n");
    Ok(())
}
