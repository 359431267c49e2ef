use anyhow::Context;

use bibliotheca_api::{LibraryApi, console};
use bibliotheca_infra::Settings;

fn main() -> anyhow::Result<()> {
    bibliotheca_observability::init();

    let settings = Settings::from_env();
    settings
        .ensure_dirs()
        .context("failed to prepare the data directory")?;

    let mut api = LibraryApi::from_settings(&settings);

    let stdin = std::io::stdin();
    console::run(&mut api, stdin.lock(), std::io::stdout()).context("console session failed")?;

    tracing::info!("library closed");
    Ok(())
}
