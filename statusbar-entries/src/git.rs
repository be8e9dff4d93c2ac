// statusbar-entries/src/git.rs
use git2::{Repository, StatusOptions};
use statusbar_core::EntryDescriptor;
use std::path::Path;

/// Snapshot of the repository state the entry renders from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitSummary {
    pub branch: String,
    /// Working-tree and index changes combined, untracked included.
    pub dirty: usize,
}

impl GitSummary {
    fn from_repo(repo: &Repository) -> Self {
        let branch = repo
            .head()
            .ok()
            .and_then(|head| head.shorthand().map(|s| s.to_string()))
            .unwrap_or_else(|| "detached".to_string());

        let dirty = repo
            .statuses(Some(StatusOptions::default().include_untracked(true)))
            .map(|statuses| statuses.len())
            .unwrap_or(0);

        Self { branch, dirty }
    }
}

/// Summarize the repository containing `path`, walking up like git does.
/// `None` when the path is not inside a repository.
pub fn summarize(path: &Path) -> Option<GitSummary> {
    Repository::discover(path)
        .ok()
        .map(|repo| GitSummary::from_repo(&repo))
}

/// The git branch entry for the current directory. Clicking it asks the host
/// to open its branch picker.
pub fn git_branch_entry() -> EntryDescriptor {
    let summary = std::env::current_dir()
        .ok()
        .and_then(|cwd| summarize(&cwd));
    entry_from_summary(summary)
}

fn entry_from_summary(summary: Option<GitSummary>) -> EntryDescriptor {
    match summary {
        Some(summary) => {
            let text = if summary.dirty > 0 {
                format!("{}*", summary.branch)
            } else {
                summary.branch.clone()
            };
            let tooltip = if summary.dirty > 0 {
                format!("{} ({} changes)", summary.branch, summary.dirty)
            } else {
                summary.branch.clone()
            };
            EntryDescriptor::text(text)
                .with_tooltip(tooltip)
                .with_command("git.checkout")
        }
        None => EntryDescriptor::text("no repository"),
    }
}
