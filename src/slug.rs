// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Utilities for deriving `owner/repo` slugs from GitHub links.
//!
//! Slugs produced by this module always contain exactly two non-empty
//! segments separated by a single `/`, without leading or trailing slashes.

use crate::error::Error;

const GITHUB_HOST: &str = "github.com";
const GITHUB_PREFIX: &str = "github.com/";

/// Extracts a slug from a markdown link URL pointing at `github.com`.
///
/// Any query string or fragment is dropped, surrounding slashes are trimmed
/// and only the first two path segments are kept. Returns `None` for links
/// that do not reference a repository, such as organization pages.
///
/// # Examples
///
/// ```
/// use awesome_stars::slug_from_link;
///
/// let slug = slug_from_link("https://github.com/foo/bar/issues?q=1",);
/// assert_eq!(slug.as_deref(), Some("foo/bar"));
/// assert!(slug_from_link("https://github.com/foo",).is_none());
/// ```
pub fn slug_from_link(url: &str,) -> Option<String,>
{
    let (_, path,) = url.split_once(GITHUB_PREFIX,)?;
    let path = path.split(['?', '#',],).next().unwrap_or_default();
    slug_from_path(path,)
}

/// Converts a GitHub URL or an `owner/repo` slug into a slug.
///
/// # Errors
///
/// Returns [`Error::Validation`](Error::Validation) when the URL points at a
/// host other than `github.com`, when the URL has fewer than two path
/// segments, or when a bare slug is not exactly `owner/repo`.
///
/// # Examples
///
/// ```
/// use awesome_stars::normalize_slug;
///
/// assert_eq!(normalize_slug("https://github.com/rust-lang/rust/pulls",)?, "rust-lang/rust");
/// assert_eq!(normalize_slug("tokio-rs/tokio",)?, "tokio-rs/tokio");
/// assert!(normalize_slug("https://gitlab.com/foo/bar",).is_err());
/// # Ok::<(), awesome_stars::Error>(())
/// ```
pub fn normalize_slug(repo: &str,) -> Result<String, Error,>
{
    let trimmed = repo.trim();

    if let Some((_, remainder,),) = trimmed.split_once("://",) {
        let (host, path,) = remainder.split_once('/',).unwrap_or((remainder, "",),);
        if !host.eq_ignore_ascii_case(GITHUB_HOST,) {
            return Err(Error::validation(format!("unsupported host in repo URL: {trimmed}"),),);
        }

        let path = path.split(['?', '#',],).next().unwrap_or_default();
        return slug_from_path(path,)
            .ok_or_else(|| Error::validation(format!("invalid GitHub URL: {trimmed}"),),);
    }

    let mut parts = trimmed.split('/',);
    match (parts.next(), parts.next(), parts.next(),) {
        (Some(owner,), Some(name,), None,) if !owner.is_empty() && !name.is_empty() => {
            Ok(trimmed.to_owned(),)
        }
        _ => Err(Error::validation(format!("invalid repo slug: {trimmed}"),),),
    }
}

fn slug_from_path(path: &str,) -> Option<String,>
{
    let mut segments = path.trim_matches('/',).split('/',);
    let owner = segments.next().filter(|segment| !segment.is_empty(),)?;
    let name = segments.next().filter(|segment| !segment.is_empty(),)?;
    Some(format!("{owner}/{name}"),)
}

#[cfg(test)]
mod tests
{
    use proptest::prelude::*;

    use super::{normalize_slug, slug_from_link};

    proptest! {
        #[test]
        fn extracted_slugs_have_two_segments(path in "[A-Za-z0-9._/?#-]{0,48}") {
            let url = format!("https://github.com/{path}");
            if let Some(slug) = slug_from_link(&url) {
                let parts: Vec<&str> = slug.split('/').collect();
                prop_assert_eq!(parts.len(), 2);
                prop_assert!(parts.iter().all(|part| !part.is_empty()));
            }
        }
    }

    #[test]
    fn link_keeps_first_two_segments()
    {
        let slug = slug_from_link("https://github.com/foo/bar/tree/main/docs",);
        assert_eq!(slug.as_deref(), Some("foo/bar"));
    }

    #[test]
    fn link_drops_query_and_fragment()
    {
        assert_eq!(slug_from_link("https://github.com/foo/bar?tab=readme",).as_deref(), Some("foo/bar"));
        assert_eq!(slug_from_link("https://github.com/foo/bar#install",).as_deref(), Some("foo/bar"));
        assert_eq!(slug_from_link("https://github.com/foo/bar/?x=1",).as_deref(), Some("foo/bar"));
    }

    #[test]
    fn link_trims_trailing_slash()
    {
        assert_eq!(slug_from_link("https://github.com/foo/bar/",).as_deref(), Some("foo/bar"));
    }

    #[test]
    fn link_to_organization_is_rejected()
    {
        assert!(slug_from_link("https://github.com/docker",).is_none());
        assert!(slug_from_link("https://github.com/docker/",).is_none());
    }

    #[test]
    fn link_with_empty_segment_is_rejected()
    {
        assert!(slug_from_link("https://github.com/foo//bar",).is_none());
    }

    #[test]
    fn link_without_github_host_is_rejected()
    {
        assert!(slug_from_link("https://gitlab.com/foo/bar",).is_none());
    }

    #[test]
    fn normalize_accepts_bare_slug()
    {
        assert_eq!(normalize_slug(" foo/bar ",).expect("valid slug",), "foo/bar");
    }

    #[test]
    fn normalize_accepts_uppercase_host()
    {
        let slug = normalize_slug("https://GitHub.com/foo/bar",).expect("valid url",);
        assert_eq!(slug, "foo/bar");
    }

    #[test]
    fn normalize_rejects_foreign_host()
    {
        let error = normalize_slug("https://example.com/foo/bar",).expect_err("foreign host",);
        match error {
            crate::Error::Validation {
                message,
            } => {
                assert_eq!(message, "unsupported host in repo URL: https://example.com/foo/bar");
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn normalize_rejects_short_url()
    {
        assert!(normalize_slug("https://github.com/foo",).is_err());
    }

    #[test]
    fn normalize_rejects_malformed_slugs()
    {
        assert!(normalize_slug("foo",).is_err());
        assert!(normalize_slug("foo/bar/baz",).is_err());
        assert!(normalize_slug("/bar",).is_err());
    }
}
