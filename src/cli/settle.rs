use serde_json::json;
use tracing::{error, info};

use crate::cli::output;
use crate::config::{Config, SlipConfig};
use crate::domain::{money, FinishingPlaces};
use crate::error::{Error, Result};

/// Settle one bettor's slip, or every slip on the card.
///
/// A slip that fails to settle is reported and skipped; the command still
/// fails once the rest are done.
pub fn execute(config: &Config, bettor: Option<&str>) -> Result<()> {
    let places = config.finishing_places()?;
    let slips: Vec<&SlipConfig> = match bettor {
        Some(bettor) => vec![config.slip(bettor)?],
        None => config.slips.iter().collect(),
    };

    if slips.is_empty() {
        output::warning("No slips on the card");
        return Ok(());
    }

    let total = slips.len();
    let mut failed = 0;
    for slip in slips {
        if let Err(e) = settle_slip(config, slip, &places) {
            error!(bettor = %slip.bettor, error = %e, "failed to settle slip");
            output::error(&format!("{}: {e}", slip.bettor));
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(Error::Settlement { failed, total });
    }
    Ok(())
}

fn settle_slip(config: &Config, slip: &SlipConfig, places: &FinishingPlaces) -> Result<()> {
    let lucky = slip.to_lucky()?;
    let settlement = lucky.settle(&slip.stake(), places)?;
    let payout = money::to_currency(&settlement.payout)?;

    info!(
        bettor = %slip.bettor,
        bet = %lucky.name(),
        combinations = settlement.combinations,
        payout = %settlement.payout,
        "settled slip"
    );

    output::section(&format!("{} ({})", slip.bettor, lucky.name()));
    for horse in lucky.horses() {
        output::field("Selection", horse);
    }
    output::field("Combinations", settlement.combinations);
    output::field("Multiplier", &settlement.multiplier);

    let currency = &config.currency;
    output::result(
        "settlement",
        &format!(
            "{}: {} -> {}",
            slip.bettor,
            currency.format(slip.stake),
            output::highlight(currency.format(payout))
        ),
        json!({
            "bettor": slip.bettor,
            "bet": lucky.name(),
            "stake": slip.stake.to_string(),
            "combinations": settlement.combinations,
            "payout": format!("{payout:.2}"),
            "payout_exact": settlement.payout.to_string(),
        }),
    );

    Ok(())
}
