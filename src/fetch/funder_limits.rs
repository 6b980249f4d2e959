use crate::defaults;
use crate::fetch::{required, Fetched};
use crate::model::FunderLimit;
use crate::{utils, Result};
use anyhow::{bail, Context};
use std::path::Path;
use tracing::info;

/// Loads funder limits from `path`, a JSON array of `{name, current, limit, color?}` objects, or
/// returns the built-in list when no path is given. A given path that is missing or malformed is
/// an error. Entries without a color get one from the known funder table.
pub async fn load_funder_limits(path: Option<&Path>) -> Result<Fetched<Vec<FunderLimit>>> {
    match path {
        None => {
            info!("  Using default funder limits (pass --funders-json to override)");
            Ok(Fetched::defaulted(
                defaults::funder_limits(),
                "no funders file given",
            ))
        }
        Some(path) => required(
            "funder limits",
            read_funders_file(path).await.map(Fetched::Live),
        ),
    }
}

async fn read_funders_file(path: &Path) -> Result<Vec<FunderLimit>> {
    let exists = tokio::fs::try_exists(path)
        .await
        .with_context(|| format!("Unable to check for {}", path.display()))?;
    if !exists {
        bail!("Funders JSON file not found: {}", path.display());
    }
    let funders: Vec<FunderLimit> = utils::deserialize(path).await?;
    Ok(funders
        .into_iter()
        .map(FunderLimit::with_default_color)
        .collect())
}
