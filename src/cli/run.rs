//! Command execution.

use std::fs;

use anyhow::{Context as _, Result};

use crate::cli::args::{Command, ResolveCommand};
use crate::cli::exit_status::ExitStatus;
use crate::parsers::json::{parse_tree, tree_to_json};
use crate::report::print_stage_summary;
use crate::resolve::Resolver;

pub fn run(command: &Command) -> Result<ExitStatus> {
    match command {
        Command::Resolve(cmd) => run_resolve(cmd),
        Command::Passes => run_passes(),
    }
}

/// Load a tree, run the resolution stage, and emit the resolved tree.
fn run_resolve(cmd: &ResolveCommand) -> Result<ExitStatus> {
    let json = fs::read_to_string(&cmd.input)
        .with_context(|| format!("Failed to read input file: {}", cmd.input.display()))?;
    let mut tree = parse_tree(&json)?;

    let results = Resolver::with_defaults().run(&mut tree);

    let output = tree_to_json(&tree, cmd.compact)?;
    match &cmd.output {
        Some(path) => fs::write(path, output + "\n")
            .with_context(|| format!("Failed to write output file: {}", path.display()))?,
        None => println!("{}", output),
    }

    if cmd.verbose {
        print_stage_summary(&results);
    }

    let skipped: usize = results.iter().map(|r| r.stats.skipped).sum();
    if cmd.strict && skipped > 0 {
        return Ok(ExitStatus::Failure);
    }
    Ok(ExitStatus::Success)
}

/// List registered passes in the order the stage will run them.
fn run_passes() -> Result<ExitStatus> {
    let resolver = Resolver::with_defaults();
    for pass in resolver.passes() {
        println!("{} (priority {})", pass.name(), pass.priority());
    }
    Ok(ExitStatus::Success)
}
