use std::path::PathBuf;

/// Loads a `.env` from the working directory (or a parent) when one exists.
/// Variables already set in the environment win.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenv::dotenv().ok()
}
