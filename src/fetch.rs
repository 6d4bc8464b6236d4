// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Sequential star resolution with credential fallback.
///
/// Entries are resolved one at a time in input order. Each lookup outcome is
/// classified into a [`Step`]: missing repositories count as zero stars, a
/// rejected credential moves on to the next one and every other failure
/// aborts the pass.
use indicatif::ProgressBar;
use tracing::{debug, info, warn};

use crate::{
    credentials::{Credential, CredentialSet},
    entry::RepoEntry,
    error::Error,
    github::{RepoStars, RepositoryClient},
    slug::normalize_slug,
};

/// Position in the credential set; `None` in the set is anonymous access.
#[derive(Debug,)]
struct CredentialCursor<'set,>
{
    credentials: &'set CredentialSet,
    index:       usize,
}

impl<'set,> CredentialCursor<'set,>
{
    fn new(credentials: &'set CredentialSet,) -> Self
    {
        Self {
            credentials,
            index: 0,
        }
    }

    fn current(&self,) -> Option<&'set Credential,>
    {
        self.credentials.get(self.index,)
    }

    /// Moves to the next credential. Returns `false` when none remains.
    fn advance(&mut self,) -> bool
    {
        if self.index + 1 < self.credentials.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }
}

/// Classified outcome of a single lookup.
#[derive(Debug,)]
enum Step
{
    Resolved(u64,),
    Missing,
    CredentialRejected(Error,),
    Abort(Error,),
}

impl From<Result<RepoStars, Error,>,> for Step
{
    fn from(result: Result<RepoStars, Error,>,) -> Self
    {
        match result {
            Ok(info,) => Self::Resolved(info.stars,),
            Err(Error::NotFound {
                ..
            },) => Self::Missing,
            Err(error @ Error::InvalidCredential {
                ..
            },) => Self::CredentialRejected(error,),
            Err(error,) => Self::Abort(error,),
        }
    }
}

/// Resolves the star count of every entry in place.
///
/// # Errors
///
/// Returns [`Error::RateLimited`] as soon as the quota is exhausted,
/// [`Error::InvalidCredential`] when every credential was rejected, and any
/// other lookup error unchanged. Entries resolved before the failure keep
/// their counts.
pub async fn fetch_star_data<C,>(
    client: &C,
    entries: &mut [RepoEntry],
    credentials: &CredentialSet,
) -> Result<(), Error,>
where
    C: RepositoryClient,
{
    fetch_star_data_with_progress(client, entries, credentials, &ProgressBar::hidden(),).await
}

/// Same as [`fetch_star_data`], advancing `progress` once per entry.
///
/// # Errors
///
/// See [`fetch_star_data`].
pub async fn fetch_star_data_with_progress<C,>(
    client: &C,
    entries: &mut [RepoEntry],
    credentials: &CredentialSet,
    progress: &ProgressBar,
) -> Result<(), Error,>
where
    C: RepositoryClient,
{
    let mut cursor = CredentialCursor::new(credentials,);
    info!("Resolving stars for {} repositories", entries.len());

    for entry in entries.iter_mut() {
        progress.set_message(entry.slug.clone(),);

        loop {
            let result = client.fetch_repository(&entry.slug, cursor.current(),).await;
            match Step::from(result,) {
                Step::Resolved(stars,) => {
                    debug!("{} has {} stars", entry.slug, stars);
                    entry.stars = Some(stars,);
                    break;
                }
                Step::Missing => {
                    warn!("Repository {} was not found, counting 0 stars", entry.slug);
                    entry.stars = Some(0,);
                    break;
                }
                Step::CredentialRejected(error,) => {
                    if !cursor.advance() {
                        return Err(error,);
                    }
                    warn!("Credential rejected, retrying {} with the next credential", entry.slug);
                }
                Step::Abort(error,) => return Err(error,),
            }
        }

        progress.inc(1,);
    }

    progress.finish_and_clear();
    Ok((),)
}

/// Fetches star counts for repository URLs or slugs with one credential.
///
/// # Errors
///
/// Returns [`Error::Validation`] for references that are not GitHub
/// repositories and propagates every lookup error.
///
/// # Example
///
/// ```no_run
/// use awesome_stars::{CredentialSet, DEFAULT_API_URL, GitHubClient, fetch_many};
///
/// # async fn example() -> Result<(), awesome_stars::Error> {
/// let credentials = CredentialSet::from_env();
/// let client = GitHubClient::new(DEFAULT_API_URL, &credentials,)?;
/// let repos = vec!["https://github.com/moby/moby".to_owned()];
/// for info in fetch_many(&client, &repos, credentials.first(),).await? {
///     println!("{}: {}", info.slug, info.stars);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn fetch_many<C,>(
    client: &C,
    repos: &[String],
    credential: Option<&Credential,>,
) -> Result<Vec<RepoStars,>, Error,>
where
    C: RepositoryClient,
{
    let slugs = repos.iter().map(|repo| normalize_slug(repo,),).collect::<Result<Vec<_,>, _,>>()?;

    let mut results = Vec::with_capacity(slugs.len(),);
    for slug in &slugs {
        results.push(client.fetch_repository(slug, credential,).await?,);
    }

    Ok(results,)
}
