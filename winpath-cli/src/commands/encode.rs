//! Command to encode text into a legacy code page.

use crate::error::CliError;
use crate::utils::{to_hex, GlobalOptions};
use clap::Args;
use winpath::encoding::CodePage;

/// Encode text and print the bytes as hex.
#[derive(Args)]
pub struct EncodeCommand {
    /// Text to encode
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Target code page identifier
    #[arg(long, value_name = "ID", default_value_t = 1252)]
    pub code_page: u32,
}

impl EncodeCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let code_page = CodePage::try_from(self.code_page)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
        let bytes = code_page.codec()?.from_universal(&self.text)?;

        println!("{}", to_hex(&bytes));
        Ok(())
    }
}
