pub mod dates;
pub mod driver;
pub mod url_builder;

pub use crate::domain::model::{DateOutcome, DownloadStatus, DownloadTarget};
pub use crate::domain::ports::{Extractor, Fetcher};
pub use crate::utils::error::Result;
