use std::path::Path;

use anyhow::{Context, Result, anyhow};
use camino::Utf8PathBuf;

use crate::cli::Cli;
use crate::scaffold::{self, GenerateOptions};

pub fn run(cli: Cli) -> Result<()> {
    let base = resolve_base(cli.chdir.as_deref(), &cli.project_name)?;
    let options = GenerateOptions {
        dry_run: cli.dry_run,
        with_docs: cli.with_docs,
    };

    let report = scaffold::generate(&base, options)
        .with_context(|| format!("generating project structure at {}", base))?;

    if options.dry_run {
        for path in &report.created {
            println!("(dry-run) would create {}", path);
        }
        println!("Project structure planned at: {}", report.base);
    } else {
        println!("Project structure created at: {}", report.base);
    }
    Ok(())
}

/// `<dir>/<project_name>`, where `<dir>` defaults to the current directory.
fn resolve_base(chdir: Option<&Path>, project_name: &str) -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir().context("determining current directory")?;
    let root = match chdir {
        Some(dir) => cwd.join(dir),
        None => cwd,
    };
    let root = Utf8PathBuf::from_path_buf(root)
        .map_err(|path| anyhow!("working directory {} is not valid UTF-8", path.display()))?;
    Ok(root.join(project_name))
}
