use anyhow::Context;
use clap::Parser;
use eiopa_rfr::utils::{logger, validation::Validate};
use eiopa_rfr::{Args, DownloadConfig, Downloader, HttpFetcher, ZipExtractor};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting eiopa-rfr downloader");

    // 載入配置，沒有設定檔就用預設值
    let config = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            DownloadConfig::from_file(path)
                .with_context(|| format!("failed to load config file '{}'", path.display()))?
        }
        None => DownloadConfig::default(),
    };

    if args.verbose {
        tracing::debug!("Download config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        return Err(e).context("invalid configuration");
    }

    let downloader = Downloader::new(HttpFetcher::new(), ZipExtractor::new(), config);
    downloader
        .prepare_directories()
        .context("failed to create data directories")?;

    // 個別日期的失敗已在 run() 內處理，不影響結束碼
    downloader.run().await;

    Ok(())
}
