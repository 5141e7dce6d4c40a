use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{SourceArgs, UnwrapOrExit};
use crate::{
    console::ConsoleDiagnostics,
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub input: SourceArgs,

    /// Output directory (overrides [generator].output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let settings = self.input.settings(self.output.as_ref());
        let mut diagnostics = ConsoleDiagnostics::stderr();

        let report = ops::generate(&settings, self.dry_run, &mut diagnostics).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        if diagnostics.errors() > 0 {
            std::process::exit(1);
        }
        Ok(())
    }
}
