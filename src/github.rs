// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Repository metadata lookups against the GitHub REST API.
///
/// [`RepositoryClient`] is the seam used by the fetcher; [`GitHubClient`]
/// implements it with `octocrab`. Responses are classified into the crate's
/// [`Error`] variants by [`classify_response`], which keeps the HTTP status
/// handling independent from the transport.
use std::future::Future;

use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    credentials::{Credential, CredentialSet},
    error::Error,
};

/// Public GitHub REST API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const RATE_LIMIT_RESET_HEADER: &str = "x-ratelimit-reset";
const BAD_CREDENTIALS: &str = "bad credentials";
const RATE_LIMIT_MARKER: &str = "rate limit";

/// Star count and metadata resolved for one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize,)]
pub struct RepoStars
{
    /// Normalized `owner/repo` identifier.
    pub slug:        String,
    /// Number of stargazers.
    pub stars:       u64,
    /// Canonical repository page.
    pub html_url:    String,
    /// Repository description, when set.
    pub description: Option<String,>,
}

/// Subset of the repository payload consumed by the fetcher.
#[derive(Debug, Deserialize,)]
struct RepositoryPayload
{
    #[serde(default)]
    stargazers_count: Option<u64,>,
    #[serde(default)]
    html_url:         Option<String,>,
    #[serde(default)]
    description:      Option<String,>,
}

#[derive(Debug, Deserialize,)]
struct ErrorPayload
{
    #[serde(default)]
    message: Option<String,>,
}

/// Looks up repository metadata by slug.
///
/// Implementations must report failures with the classified variants
/// produced by [`classify_response`] so that the fetcher can tell missing
/// repositories, rejected credentials and rate limits apart.
pub trait RepositoryClient
{
    /// Fetches metadata for `slug`, authenticating with `credential` when
    /// provided and anonymously otherwise.
    fn fetch_repository(
        &self,
        slug: &str,
        credential: Option<&Credential,>,
    ) -> impl Future<Output = Result<RepoStars, Error,>,>;
}

/// `octocrab` backed client holding one authenticated instance per
/// credential plus an anonymous instance.
#[derive(Clone,)]
pub struct GitHubClient
{
    base_uri:      String,
    anonymous:     Octocrab,
    authenticated: Vec<(Credential, Octocrab,),>,
}

impl GitHubClient
{
    /// Builds clients for the anonymous identity and every credential.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](Error::Validation) when `base_uri` is not
    /// a valid URI and [`Error::Transport`](Error::Transport) when a client
    /// cannot be initialized.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use awesome_stars::{CredentialSet, DEFAULT_API_URL, GitHubClient, RepositoryClient};
    ///
    /// # async fn example() -> Result<(), awesome_stars::Error> {
    /// let credentials = CredentialSet::from_env();
    /// let client = GitHubClient::new(DEFAULT_API_URL, &credentials,)?;
    /// let info = client.fetch_repository("moby/moby", credentials.first(),).await?;
    /// println!("{} has {} stars", info.slug, info.stars);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(base_uri: &str, credentials: &CredentialSet,) -> Result<Self, Error,>
    {
        let anonymous = build_octocrab(base_uri, None,)?;
        let authenticated = credentials
            .iter()
            .map(|credential| {
                build_octocrab(base_uri, Some(credential,),)
                    .map(|client| (credential.clone(), client,),)
            },)
            .collect::<Result<Vec<_,>, Error,>>()?;

        Ok(Self {
            base_uri: base_uri.to_owned(),
            anonymous,
            authenticated,
        },)
    }

    fn client_for(&self, credential: Option<&Credential,>,) -> Result<Octocrab, Error,>
    {
        let Some(credential,) = credential else {
            return Ok(self.anonymous.clone(),);
        };

        match self.authenticated.iter().find(|(known, _,)| known == credential,) {
            Some((_, client,),) => Ok(client.clone(),),
            None => build_octocrab(&self.base_uri, Some(credential,),),
        }
    }
}

impl RepositoryClient for GitHubClient
{
    async fn fetch_repository(
        &self,
        slug: &str,
        credential: Option<&Credential,>,
    ) -> Result<RepoStars, Error,>
    {
        let octocrab = self.client_for(credential,)?;
        debug!(
            "Fetching repository {} ({})",
            slug,
            if credential.is_some() { "authenticated" } else { "anonymous" }
        );

        let response = octocrab
            ._get(format!("/repos/{slug}"),)
            .await
            .map_err(|e| Error::transport(format!("request for {slug} failed: {e}"),),)?;

        let status = response.status().as_u16();
        let reset_at = response
            .headers()
            .get(RATE_LIMIT_RESET_HEADER,)
            .and_then(|value| value.to_str().ok(),)
            .and_then(|value| value.trim().parse::<u64,>().ok(),);

        let body = octocrab
            .body_to_string(response,)
            .await
            .map_err(|e| Error::transport(format!("failed to read response for {slug}: {e}"),),)?;

        classify_response(slug, status, reset_at, &body,)
    }
}

/// Converts a raw API response into repository metadata or a classified
/// error.
///
/// * 2xx: decoded metadata, with `stargazers_count` defaulting to 0 and
///   `html_url` to `https://github.com/<slug>`.
/// * 404: [`Error::NotFound`].
/// * 401 or a "Bad credentials" message: [`Error::InvalidCredential`].
/// * 403 mentioning a rate limit, or 429: [`Error::RateLimited`].
/// * anything else: [`Error::Api`].
///
/// # Errors
///
/// Returns the classified error for every non-success status and
/// [`Error::Decode`] when a success body is not valid JSON.
pub fn classify_response(
    slug: &str,
    status: u16,
    reset_at: Option<u64,>,
    body: &str,
) -> Result<RepoStars, Error,>
{
    if (200..300).contains(&status,) {
        let payload: RepositoryPayload = serde_json::from_str(body,).map_err(|source| {
            Error::Decode {
                slug: slug.to_owned(),
                source,
            }
        },)?;

        return Ok(RepoStars {
            slug:        slug.to_owned(),
            stars:       payload.stargazers_count.unwrap_or(0,),
            html_url:    payload.html_url.unwrap_or_else(|| format!("https://github.com/{slug}"),),
            description: payload.description,
        },);
    }

    let message = error_message(status, body,);
    let lowered = message.to_lowercase();

    if status == 404 {
        return Err(Error::NotFound {
            slug: slug.to_owned(),
        },);
    }

    if status == 401 || lowered.contains(BAD_CREDENTIALS,) {
        return Err(Error::InvalidCredential {
            message,
        },);
    }

    if status == 429 || (status == 403 && lowered.contains(RATE_LIMIT_MARKER,)) {
        return Err(Error::RateLimited {
            message,
            reset_at,
        },);
    }

    Err(Error::Api {
        status,
        message,
    },)
}

fn error_message(status: u16, body: &str,) -> String
{
    let from_payload = serde_json::from_str::<ErrorPayload,>(body,)
        .ok()
        .and_then(|payload| payload.message,)
        .filter(|message| !message.trim().is_empty(),);

    match from_payload {
        Some(message,) => message,
        None if !body.trim().is_empty() => body.trim().to_owned(),
        None => format!("HTTP {status}"),
    }
}

fn build_octocrab(base_uri: &str, credential: Option<&Credential,>,) -> Result<Octocrab, Error,>
{
    let builder = Octocrab::builder()
        .base_uri(base_uri,)
        .map_err(|e| Error::validation(format!("invalid GitHub API URL '{base_uri}': {e}"),),)?;

    let builder = match credential {
        Some(credential,) => builder.personal_token(credential.expose(),),
        None => builder,
    };

    builder
        .build()
        .map_err(|e| Error::transport(format!("failed to initialize GitHub client: {e}"),),)
}
