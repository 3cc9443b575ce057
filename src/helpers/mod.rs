mod backoff_retry;
mod load_dotenv;

pub use backoff_retry::{backoff_policy, backoff_retry};
pub use load_dotenv::load_dotenv;
