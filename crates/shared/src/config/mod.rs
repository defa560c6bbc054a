mod database;
mod gemini;
mod myconfig;

pub use self::database::{ConnectionManager, ConnectionPool, run_migrations};
pub use self::gemini::GeminiConfig;
pub use self::myconfig::Config;
