//! configgen's main application entry point.
//! Parses the command line, builds the demo generation jobs and renders them.

use configgen::{
    cli::{get_args, Args},
    demo::DemoData,
    error::{default_error_handler, Result},
    generator::{run_jobs, ConfigRenderer},
};
use log::debug;

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Renders the front proxy, double proxy and service to service configurations
/// into the output directory. The first failure aborts the run.
fn run(args: Args) -> Result<()> {
    debug!("Using templates from '{}'.", args.template_dir.display());

    let renderer = ConfigRenderer::new(&args.template_dir);
    let jobs = DemoData::default().jobs(&args.output_dir);

    for path in run_jobs(&renderer, &jobs)? {
        println!("Generated: '{}'", path.display());
    }

    Ok(())
}
