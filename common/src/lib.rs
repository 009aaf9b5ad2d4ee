use env_logger::{Builder, Env};

/// Loads `.env` if present and initialises the logger, defaulting to
/// the `info` level when `RUST_LOG` is unset.
pub fn setup_env() {
    dotenvy::dotenv().ok();
    Builder::from_env(Env::default().default_filter_or("info")).init();
}
