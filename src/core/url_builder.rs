use crate::config::DownloadConfig;
use crate::core::dates::month_end_dates;
use crate::domain::model::DownloadTarget;
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct UrlBuilder {
    base_url: String,
    file_prefix: String,
    extension: String,
}

impl UrlBuilder {
    pub fn new(
        base_url: impl Into<String>,
        file_prefix: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            file_prefix: file_prefix.into(),
            extension: extension.into(),
        }
    }

    pub fn from_config(config: &DownloadConfig) -> Self {
        Self::new(&config.base_url, &config.file_prefix, &config.extension)
    }

    /// `<base>/<prefix>_<YYYYMMDD>.<ext>`
    pub fn build(&self, date: NaiveDate) -> String {
        format!(
            "{}/{}_{}.{}",
            self.base_url.trim_end_matches('/'),
            self.file_prefix,
            date.format("%Y%m%d"),
            self.extension
        )
    }
}

/// Ordered download plan: one target per month-end of the configured years.
pub fn plan(config: &DownloadConfig) -> Vec<DownloadTarget> {
    let builder = UrlBuilder::from_config(config);
    let source_root = config.source_root();

    month_end_dates(&config.years)
        .into_iter()
        .map(|date| DownloadTarget {
            date,
            url: builder.build(date),
            destination: source_root.join(date.to_string()),
        })
        .collect()
}
