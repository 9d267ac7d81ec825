//! Configuration command handler.
//!
//! Prints the resolved configuration as JSON, each value paired with the layer
//! it came from:
//!
//! ```json
//! {
//!   "seats": {
//!     "value": 4,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use std::io::Write;

use crate::config;
use crate::error::CliError;
use crate::ui;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::display_warning(err, &format!("check {} and HOLDEM_* variables", config::CONFIG_ENV))?;
            return Err(e.into());
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seats": {
            "value": config.seats,
            "source": sources.seats,
        },
        "starting_balance": {
            "value": config.starting_balance,
            "source": sources.starting_balance,
        },
        "small_blind": {
            "value": config.small_blind,
            "source": sources.small_blind,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "ai": {
            "value": config.ai,
            "source": sources.ai,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
