//! Output helpers for the Marquee CLI.

use serde::Serialize;

use crate::cli::args::{MarqueeArgs, OutputFormat};
use crate::error::Result;

/// Print a command result in the requested format.
///
/// Human output prints the prepared text as-is; JSON output serializes the
/// payload, pretty-printed when `--pretty` is set.
pub fn output_result<T: Serialize>(human: &str, payload: &T, cli_args: &MarqueeArgs) -> Result<()> {
    match cli_args.output_format {
        OutputFormat::Human => {
            println!("{human}");
        }
        OutputFormat::Json => {
            let rendered = if cli_args.pretty {
                serde_json::to_string_pretty(payload)?
            } else {
                serde_json::to_string(payload)?
            };
            println!("{rendered}");
        }
    }
    Ok(())
}
