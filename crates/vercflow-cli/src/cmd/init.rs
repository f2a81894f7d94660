use crate::output::print_json;
use anyhow::Context;
use std::path::Path;
use vercflow_core::config::Config;

pub fn run(root: &Path, name: Option<&str>, json: bool) -> anyhow::Result<()> {
    let site_name = name.map(str::to_string).unwrap_or_else(|| {
        root.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "site".to_string())
    });

    let config =
        Config::init(root, &site_name).with_context(|| "failed to initialize workspace")?;

    if json {
        print_json(&config)?;
    } else {
        println!("Initialized vercflow in: {}", root.display());
        println!("Site: {}", config.site.name);
        println!("Next: vercflow record capture --author <you> --content <note>");
    }
    Ok(())
}
