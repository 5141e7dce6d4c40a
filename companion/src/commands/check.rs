use clap::Args;
use companion_codegen::pipeline::DiagnosticSink;
use eyre::{Context, Result};

use super::{SourceArgs, UnwrapOrExit};
use crate::{
    console::ConsoleDiagnostics,
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub input: SourceArgs,

    /// Print the round report and diagnostics as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let settings = self.input.settings(None);
        let report = ops::check(&settings).unwrap_or_exit();

        if self.json {
            let json = serde_json::to_string_pretty(&report).wrap_err("Failed to encode report")?;
            println!("{}", json);
        } else {
            let mut console = ConsoleDiagnostics::stderr();
            for diagnostic in &report.diagnostics {
                console.report(diagnostic.clone());
            }
            report.render(&mut TerminalOutput::new());
        }

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
