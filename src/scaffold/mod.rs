pub mod layout;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

use crate::error::ScaffoldResult;
use crate::util::fs::ensure_dir;

#[derive(Clone, Copy, Debug, Default)]
pub struct GenerateOptions {
    pub dry_run: bool,
    pub with_docs: bool,
}

/// Outcome of one generation run. Paths are absolute, rooted at `base`.
#[derive(Debug, Default)]
pub struct ScaffoldReport {
    pub base: Utf8PathBuf,
    pub created: Vec<Utf8PathBuf>,
    pub existing: Vec<Utf8PathBuf>,
}

/// Relative directories to create for `options`, parents first.
pub fn plan(options: GenerateOptions) -> Vec<Utf8PathBuf> {
    let mut specs = vec![layout::LAYERED];
    if options.with_docs {
        specs.push(layout::DOCS);
    }
    specs
        .into_iter()
        .flat_map(|spec| spec.iter().map(|segments| layout::relative(segments)))
        .collect()
}

/// Create the base directory and the whole layout beneath it.
///
/// Directories that already exist are left alone, so running this twice is
/// harmless. The first creation failure aborts the run. With `dry_run` set the
/// filesystem is only inspected and `created` lists what would be made.
pub fn generate(base: &Utf8Path, options: GenerateOptions) -> ScaffoldResult<ScaffoldReport> {
    let mut report = ScaffoldReport {
        base: base.to_owned(),
        ..ScaffoldReport::default()
    };

    let targets = std::iter::once(base.to_owned())
        .chain(plan(options).into_iter().map(|relative| base.join(relative)));

    for target in targets {
        let created = if options.dry_run {
            !target.is_dir()
        } else {
            ensure_dir(&target)?
        };
        debug!(path = %target, created, "directory");
        if created {
            report.created.push(target);
        } else {
            report.existing.push(target);
        }
    }

    info!(
        base = %report.base,
        created = report.created.len(),
        existing = report.existing.len(),
        dry_run = options.dry_run,
        "scaffold complete"
    );
    Ok(report)
}
