// Adapters layer: concrete implementations of the domain ports.

pub mod archive;
pub mod http;

pub use archive::ZipExtractor;
pub use http::HttpFetcher;
