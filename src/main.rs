use anyhow::{Context, Result};
use clap::Parser;
use controller_patcher::{logging, Patcher, TARGET_PATH};
use tracing::debug;

/// Add an HttpServletRequest parameter to TeacherController endpoints.
///
/// Takes no arguments: the target file and the rewrite rules are built in.
#[derive(Parser)]
#[command(name = "fix-teacher-controller")]
#[command(version, long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    logging::init();

    let patcher = Patcher::teacher_controller().context("failed to build rewrite rules")?;
    let report = patcher
        .run(&mut std::io::stdout().lock())
        .with_context(|| format!("failed to patch {TARGET_PATH}"))?;
    debug!(%report, "done");

    Ok(())
}
