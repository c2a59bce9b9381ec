mod load_dotenv;
mod retry;

pub use load_dotenv::load_dotenv;
pub use retry::{acquire, Acquisition, Clock, FixedInterval, RetryPolicy, SystemClock};

#[cfg(test)]
pub use retry::test_clock;

pub mod base_path;
