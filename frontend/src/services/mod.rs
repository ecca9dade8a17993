pub mod config;
pub mod date_utils;
pub mod logging;
pub mod storage;

pub use config::load_config;
pub use logging::Logger;
pub use storage::BrowserRepository;
