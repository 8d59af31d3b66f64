use super::args::Cli;
use super::handlers;
use crate::config::{Config, Settings, resolve_config_path};
use crate::context::ExecutionContext;
use anyhow::Result;
use std::io;

pub fn run(cli: Cli) -> Result<()> {
    let config_source = resolve_config_path(cli.config.as_deref());
    let config = match &config_source {
        Some(source) => source.load()?,
        None => Config::default(),
    };

    let (settings, adjustments) = Settings::resolve(&cli, &config);
    let ctx = ExecutionContext::new(settings, config_source);

    for adjustment in &adjustments {
        ctx.diagnostics().warn(adjustment);
    }

    match handlers::render::handle(&ctx) {
        Err(e) if is_broken_pipe(&e) => Ok(()),
        other => other,
    }
}

/// The reader went away (e.g. `pascaltri 2 100 | head`); not worth reporting.
fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|io_err| io_err.kind() == io::ErrorKind::BrokenPipe)
}
