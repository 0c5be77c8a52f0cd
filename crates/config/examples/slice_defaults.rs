//! Load the process env file and read a slice value with a default.
//!
//! Run from a directory containing `.config.env` (or pass nothing and let
//! the default search fail loudly).

use env_config::Config;

fn main() -> anyhow::Result<()> {
    let cfg = Config::new()?;

    let hosts = cfg.string_slice("SLICE", vec!["a".to_string(), "b".to_string()]);
    println!("{hosts:?}");
    Ok(())
}
