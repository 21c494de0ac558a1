//! Configuration display command

use std::path::{Path, PathBuf};

use anyhow::Result;
use fifi_core::config::default_config_path;
use fifi_core::Config;

pub fn cmd_config(config: &Config, override_path: Option<&Path>) -> Result<()> {
    print!("{}", render_config(config, config_source(override_path)));
    Ok(())
}

/// The file the config was loaded from, if any
fn config_source(override_path: Option<&Path>) -> Option<PathBuf> {
    override_path
        .map(Path::to_path_buf)
        .or_else(default_config_path)
        .filter(|path| path.exists())
}

pub fn render_config(config: &Config, source: Option<PathBuf>) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str("⚙️  FiFi Configuration\n");
    out.push_str("   ─────────────────────────────────────────────────────────────\n");
    match source {
        Some(path) => out.push_str(&format!("   Source: {}\n", path.display())),
        None => out.push_str("   Source: built-in defaults\n"),
    }
    out.push('\n');

    let sim = &config.simulator;
    out.push_str("   [simulator]\n");
    out.push_str(&format!(
        "   enabled         {}\n",
        if sim.enabled { "yes" } else { "no" }
    ));
    out.push_str(&format!("   interval        {}s\n", sim.interval.as_secs()));
    out.push_str(&format!("   probability     {:.2}\n", sim.probability));
    out.push_str(&format!("   max increment   {}\n", sim.max_increment));
    out.push('\n');
    out.push_str("   [store]\n");
    out.push_str(&format!(
        "   queue capacity  {}\n",
        config.store.queue_capacity
    ));
    out.push('\n');
    out
}
