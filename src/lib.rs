pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::Args;

pub use adapters::{HttpFetcher, ZipExtractor};
pub use config::DownloadConfig;
pub use crate::core::{
    dates::{month_end, month_end_dates},
    driver::Downloader,
    url_builder::{plan, UrlBuilder},
};
pub use domain::model::{DateOutcome, DownloadStatus, DownloadTarget};
pub use domain::ports::{Extractor, Fetcher};
pub use utils::error::{DownloadError, Result};
