use std::path::Path;

use tracing::warn;

use crate::cli::output;
use crate::config::Config;
use crate::error::Result;

/// Report on a loaded card without settling it.
pub fn execute(config: &Config, path: &Path) -> Result<()> {
    let places = config.finishing_places()?;

    output::section("Card Check");
    output::field("Card", path.display());
    output::success("Card is valid");
    output::field("Places", places.len());
    output::field("Slips", config.slips.len());

    for slip in &config.slips {
        let lucky = slip.to_lucky()?;
        let unplaced = slip.unplaced(&places);
        if unplaced.is_empty() {
            output::success(&format!("{}: {} ready to settle", slip.bettor, lucky.name()));
        } else {
            warn!(bettor = %slip.bettor, unplaced = ?unplaced, "selections missing from results");
            output::warning(&format!(
                "{}: no finishing place for {}",
                slip.bettor,
                unplaced.join(", ")
            ));
        }
    }

    Ok(())
}
