pub mod fetcher;
pub mod file_fetcher;
pub mod parser;

pub use fetcher::RemoteFetcher;
pub use file_fetcher::FileFetcher;
pub use parser::{ScheduleExtractor, extract_all, validate};
