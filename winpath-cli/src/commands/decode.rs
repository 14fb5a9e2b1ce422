//! Command to decode bytes from a legacy code page.

use crate::error::CliError;
use crate::utils::{parse_hex, GlobalOptions};
use clap::Args;
use winpath::encoding::CodePage;

/// Decode hex bytes and print the text.
#[derive(Args)]
pub struct DecodeCommand {
    /// Bytes as hex digit pairs, e.g. "68 65 80"
    #[arg(value_name = "HEX")]
    pub hex: String,

    /// Source code page identifier
    #[arg(long, value_name = "ID", default_value_t = 1252)]
    pub code_page: u32,
}

impl DecodeCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let code_page = CodePage::try_from(self.code_page)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
        let bytes = parse_hex(&self.hex)?;
        let text = code_page.codec()?.to_universal(&bytes)?;

        println!("{text}");
        Ok(())
    }
}
