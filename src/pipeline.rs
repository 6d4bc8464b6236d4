// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// End-to-end report generation: parse, resolve, rank, render.
///
/// A report is produced only when every entry was resolved. Callers write
/// the returned text themselves, so a failed pass never leaves a partial
/// report behind.
use std::{fs, path::Path};

use indicatif::ProgressBar;
use tracing::info;

use crate::{
    credentials::CredentialSet,
    entry::RepoEntry,
    error::{self, Error},
    fetch::fetch_star_data_with_progress,
    github::RepositoryClient,
    markdown::parse_repos,
    render::{render_markdown, sort_by_stars},
};

/// Rendered leaderboard together with the ranked entries behind it.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct Report
{
    /// Markdown table ready to be written.
    pub markdown: String,
    /// Entries sorted by stars descending.
    pub entries:  Vec<RepoEntry,>,
}

/// Reads the awesome-list markdown document.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read.
pub fn load_markdown(path: &Path,) -> Result<String, Error,>
{
    fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)
}

/// Builds the star leaderboard for a markdown document.
///
/// `progress` has its length set to the number of parsed entries and is
/// advanced once per resolved entry.
///
/// # Errors
///
/// Propagates every fatal lookup error from the fetcher; no report is
/// produced in that case.
pub async fn build_report<C,>(
    client: &C,
    markdown: &str,
    credentials: &CredentialSet,
    progress: &ProgressBar,
) -> Result<Report, Error,>
where
    C: RepositoryClient,
{
    let mut entries = parse_repos(markdown,);
    info!("Found {} repositories in markdown", entries.len());

    progress.set_length(entries.len() as u64,);
    fetch_star_data_with_progress(client, &mut entries, credentials, progress,).await?;

    sort_by_stars(&mut entries,);
    let markdown = render_markdown(&entries,);

    Ok(Report {
        markdown,
        entries,
    },)
}
