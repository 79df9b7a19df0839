//! Host config extraction and translation.
//!
//! The host tooling configuration is INI-like (`[section]` headers,
//! `key=value` lines). The named section is extracted verbatim into the
//! agent's configuration file with a `key=value` → `key: value` rewrite and
//! one fixed injected setting. A missing file or section is bootstrapped
//! with an empty section so repeated installs are idempotent.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::application::ports::ConfigTranslator;
use crate::domain::Layout;

/// Production [`ConfigTranslator`] for INI-style host configs.
pub struct IniConfigTranslator {
    section: String,
}

impl IniConfigTranslator {
    #[must_use]
    pub fn new(section: &str) -> Self {
        Self {
            section: section.to_string(),
        }
    }
}

impl ConfigTranslator for IniConfigTranslator {
    fn translate(&self, layout: &Layout) -> Result<()> {
        let host_path = layout.host_config();
        let host_text = read_or_bootstrap(&host_path, &self.section)?;
        let entries = extract_section(&host_text, &self.section);
        if entries.is_empty() {
            warn!(
                section = %self.section,
                "host config section empty or missing; agent gets defaults only"
            );
        }

        let mut rendered = String::new();
        for (key, value) in &entries {
            rendered.push_str(&format!("{key}: {value}\n"));
        }
        // Fixed injected setting: the agent's pidfile lives in the run dir
        // the uninstaller knows to delete.
        rendered.push_str(&format!(
            "pidfile: {}\n",
            layout.run_dir().join("miniond.pid").display()
        ));

        std::fs::create_dir_all(layout.config_dir()).with_context(|| {
            format!("creating config directory {}", layout.config_dir().display())
        })?;
        let config_path = layout.minion_config();
        std::fs::write(&config_path, rendered)
            .with_context(|| format!("writing {}", config_path.display()))?;
        debug!(
            entries = entries.len(),
            path = %config_path.display(),
            "agent config written"
        );
        Ok(())
    }
}

/// Read the host config, creating it with an empty section when absent.
/// A present file lacking the section gets the empty section appended.
fn read_or_bootstrap(path: &Path, section: &str) -> Result<String> {
    if !path.exists() {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
        let stub = format!("[{section}]\n");
        std::fs::write(path, &stub)
            .with_context(|| format!("bootstrapping host config {}", path.display()))?;
        return Ok(stub);
    }

    let mut text = std::fs::read_to_string(path)
        .with_context(|| format!("reading host config {}", path.display()))?;
    if !has_section(&text, section) {
        if !text.ends_with('\n') && !text.is_empty() {
            text.push('\n');
        }
        text.push_str(&format!("[{section}]\n"));
        std::fs::write(path, &text)
            .with_context(|| format!("appending section to {}", path.display()))?;
    }
    Ok(text)
}

fn has_section(text: &str, section: &str) -> bool {
    text.lines()
        .any(|line| line.trim() == format!("[{section}]"))
}

/// Pull `key=value` pairs out of the named section, in file order.
/// Comment lines (`#` or `;`) and lines without `=` are skipped.
fn extract_section(text: &str, section: &str) -> Vec<(String, String)> {
    let header = format!("[{section}]");
    let mut in_section = false;
    let mut entries = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            in_section = trimmed == header;
            continue;
        }
        if !in_section || trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';')
        {
            continue;
        }
        if let Some((key, value)) = trimmed.split_once('=') {
            entries.push((key.trim().to_string(), value.trim().to_string()));
        }
    }
    entries
}
