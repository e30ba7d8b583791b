mod discovery;
mod loader;

pub use discovery::{DiscoveryError, SourceFile, discover_sources};
pub use loader::{LoadError, load_questions_from_json};
