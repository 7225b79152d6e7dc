use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(".csvgate.toml");

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# csvgate Configuration

[thresholds]
# Empty-row fraction above which a file WARNs
empty_row_warn_fraction = 0.0
# Duplicate ratio (dups/scanned) above which a file WARNs
duplicate_warn_ratio = 0.0
# Maximum rows considered by the duplicate estimator
duplicate_scan_cap = 200000
# Lines sampled by delimiter detection
delimiter_sample_lines = 20

[ignore]
patterns = []
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created .csvgate.toml configuration file");

    Ok(())
}
