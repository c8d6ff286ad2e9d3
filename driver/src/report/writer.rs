use crate::report::model::ReportModel;
use anyhow::Context;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Renders the run either as JSON or as a plain line of values.
pub fn render(model: &ReportModel, json: bool) -> anyhow::Result<String> {
    if json {
        serde_json::to_string(model).context("serializing report")
    } else {
        Ok(model.plain())
    }
}

/// Appends the one-line summary to `path`, creating parent directories.
pub fn append_summary(model: &ReportModel, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating report directory {}", parent.display()))?;
    }
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening report {}", path.display()))?;
    file.write_all(model.summary().as_bytes())
        .with_context(|| format!("writing report {}", path.display()))?;
    Ok(())
}
