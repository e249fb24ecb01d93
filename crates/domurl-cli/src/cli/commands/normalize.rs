//! `domurl normalize <url>`.

use anyhow::Result;
use domurl_core::config::DomurlConfig;

use crate::cli::Target;

pub fn run_normalize(cfg: &DomurlConfig, target: &Target) -> Result<()> {
    let url = target.resolve(cfg);
    println!("{url}");
    Ok(())
}
