//! Command handler modules for the holdem CLI.
//!
//! Each command lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in by [`crate::run`]
//! - Errors propagated via [`crate::CliError`]

mod cfg;
mod deal;
mod eval;
mod play;
mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::{PlayOptions, handle_play_command};
pub use sim::{SimOptions, handle_sim_command};

use holdem_ai::{AIOpponent, create_ai};

use crate::error::CliError;

/// Looks up an AI strategy by name.
pub(crate) fn ai_by_name(kind: &str) -> Result<Box<dyn AIOpponent>, CliError> {
    create_ai(kind).ok_or_else(|| {
        CliError::InvalidInput(format!(
            "unknown ai '{}' (expected one of: {})",
            kind,
            holdem_ai::AI_KINDS.join(", ")
        ))
    })
}
