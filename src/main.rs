use anyhow::Context;
use clap::Parser;

use weekplan::core::cli::CliPaths;
use weekplan::core::context::AppContext;
use weekplan::logging::LogTarget;
use weekplan::prompter::flows::main_flow::MainFlow;
use weekplan::prompter::prompter::Prompter;

fn main() -> anyhow::Result<()> {
    let paths = CliPaths::parse();
    let mut ctx = AppContext::new_with_paths(
        paths.config_path.clone(),
        paths.saves_dir,
        paths.logs_dir,
    )
    .with_context(|| format!("Could not start with '{}'", paths.config_path.display()))?;

    let logger = ctx.logger.clone();
    logger.info("Session started.", LogTarget::FileOnly);
    if let Err(err) = Prompter::new().run(MainFlow::new(&mut ctx)) {
        logger.error(format!("{err}"), LogTarget::ConsoleAndFile);
        return Err(err.into());
    }
    logger.info("Session ended.", LogTarget::FileOnly);
    Ok(())
}
