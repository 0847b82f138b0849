use std::path::{Path, PathBuf};

use anyhow::Context;
use regex_lite::Regex;
use serde::Deserialize;

/// Packages that must stay free of UI and transport crates
const PURE_PACKAGES: [&str; 2] = ["storybook-domain", "storybook-shared"];
const FORBIDDEN_IN_PURE: [&str; 4] = ["dioxus", "reqwest", "gloo-net", "web-sys"];

/// Path prefixes the application layer must not import
const FORBIDDEN_IN_APPLICATION: [&str; 3] = ["crate::infrastructure", "crate::ui", "dioxus"];

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
    workspace_root: PathBuf,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    kind: Option<String>,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;

    let mut violations = dependency_violations(&metadata.packages);

    let application_dir = metadata
        .workspace_root
        .join("crates/player/src/application");
    violations.extend(import_violations(&application_dir)?);

    if violations.is_empty() {
        println!("arch-check: ok");
        return Ok(());
    }

    for violation in &violations {
        eprintln!("arch-check: {violation}");
    }
    anyhow::bail!("{} architecture violation(s)", violations.len())
}

fn dependency_violations(packages: &[Package]) -> Vec<String> {
    packages
        .iter()
        .filter(|p| PURE_PACKAGES.contains(&p.name.as_str()))
        .flat_map(|p| {
            p.dependencies
                .iter()
                // dev-dependencies don't ship
                .filter(|d| d.kind.as_deref() != Some("dev"))
                .filter(|d| FORBIDDEN_IN_PURE.contains(&d.name.as_str()))
                .map(move |d| format!("{} depends on {}", p.name, d.name))
        })
        .collect()
}

fn import_violations(dir: &Path) -> anyhow::Result<Vec<String>> {
    let use_re = Regex::new(r"^\s*(?:pub\s+)?use\s+([\w:]+)").context("compiling use regex")?;
    let test_mod_re =
        Regex::new(r"#\[cfg\(test\)\]\s*(?:pub\s+)?mod\s+(\w+)\s*;").context("compiling mod regex")?;

    let mut files = Vec::new();
    collect_rust_files(dir, &mut files)?;

    // Modules declared as `#[cfg(test)] mod x;` are test-only files
    let mut test_only = Vec::new();
    for file in &files {
        let source = std::fs::read_to_string(file)
            .with_context(|| format!("reading {}", file.display()))?;
        let parent = file.parent().unwrap_or(dir);
        for caps in test_mod_re.captures_iter(&source) {
            if let Some(name) = caps.get(1) {
                test_only.push(parent.join(format!("{}.rs", name.as_str())));
                test_only.push(parent.join(name.as_str()).join("mod.rs"));
            }
        }
    }

    let mut violations = Vec::new();
    for file in files.iter().filter(|f| !test_only.contains(f)) {
        let source = std::fs::read_to_string(file)
            .with_context(|| format!("reading {}", file.display()))?;
        for (line_no, line) in production_lines(&source) {
            let Some(path) = use_re.captures(line).and_then(|c| c.get(1)) else {
                continue;
            };
            if FORBIDDEN_IN_APPLICATION
                .iter()
                .any(|forbidden| path.as_str().starts_with(forbidden))
            {
                violations.push(format!(
                    "{}:{} imports {}",
                    file.display(),
                    line_no,
                    path.as_str()
                ));
            }
        }
    }
    Ok(violations)
}

/// Lines before the first inline `#[cfg(test)]` block, numbered from 1
fn production_lines(source: &str) -> impl Iterator<Item = (usize, &str)> {
    source
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .take_while(|(_, line)| line.trim() != "#[cfg(test)]" || !is_test_block_start(line))
}

fn is_test_block_start(line: &str) -> bool {
    // An indented attribute belongs to an item inside a module
    !line.starts_with(char::is_whitespace)
}

fn collect_rust_files(dir: &Path, out: &mut Vec<PathBuf>) -> anyhow::Result<()> {
    for entry in std::fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            collect_rust_files(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
    Ok(())
}
