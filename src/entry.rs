// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Repository entries extracted from an awesome list.
use serde::{Deserialize, Serialize};

/// One repository mention parsed from the markdown document.
///
/// Entries are created by [`parse_repos`](crate::parse_repos) with `stars`
/// unset, and receive their star count exactly once while fetching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize,)]
pub struct RepoEntry
{
    /// Display text of the markdown link.
    pub name:     String,
    /// Normalized `owner/repo` identifier.
    pub slug:     String,
    /// Canonical repository URL.
    pub url:      String,
    /// Enclosing heading titles joined with `" / "`.
    pub category: String,
    /// Cleaned free text following the link.
    pub note:     String,
    /// Resolved star count.
    pub stars:    Option<u64,>,
}

impl RepoEntry
{
    /// Creates an unresolved entry whose URL is derived from the slug.
    pub fn new(name: &str, slug: &str, category: String, note: String,) -> Self
    {
        Self {
            name: name.trim().to_owned(),
            slug: slug.to_owned(),
            url: format!("https://github.com/{slug}"),
            category,
            note,
            stars: None,
        }
    }

    /// Star count used for ranking; unresolved entries count as zero.
    pub fn ranked_stars(&self,) -> u64
    {
        self.stars.unwrap_or(0,)
    }
}
