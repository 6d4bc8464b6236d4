// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Scripted in-memory [`RepositoryClient`] shared by unit tests.

use std::sync::Mutex;

use crate::{
    credentials::Credential,
    entry::RepoEntry,
    error::Error,
    github::{RepoStars, RepositoryClient},
};

type Call = (String, Option<String,>,);
type Scripted = (String, Option<String,>, Result<RepoStars, Error,>,);

/// Client answering lookups from a script keyed by slug and token.
///
/// Each scripted response is consumed by the first matching lookup.
/// Unscripted lookups fail with an HTTP 599 [`Error::Api`].
#[derive(Debug, Default,)]
pub(crate) struct ScriptedClient
{
    script: Mutex<Vec<Scripted,>,>,
    calls:  Mutex<Vec<Call,>,>,
}

impl ScriptedClient
{
    pub(crate) fn new() -> Self
    {
        Self::default()
    }

    pub(crate) fn respond(
        self,
        slug: &str,
        token: Option<&str,>,
        result: Result<RepoStars, Error,>,
    ) -> Self
    {
        self.script.lock().expect("script lock",).push((
            slug.to_owned(),
            token.map(str::to_owned,),
            result,
        ),);
        self
    }

    /// Lookups performed so far, in order.
    pub(crate) fn calls(&self,) -> Vec<Call,>
    {
        self.calls.lock().expect("calls lock",).clone()
    }
}

impl RepositoryClient for ScriptedClient
{
    async fn fetch_repository(
        &self,
        slug: &str,
        credential: Option<&Credential,>,
    ) -> Result<RepoStars, Error,>
    {
        let token = credential.map(|credential| credential.expose().to_owned(),);
        self.calls.lock().expect("calls lock",).push((slug.to_owned(), token.clone(),),);

        let mut script = self.script.lock().expect("script lock",);
        let position = script
            .iter()
            .position(|(scripted_slug, scripted_token, _,)| {
                scripted_slug == slug && *scripted_token == token
            },);

        match position {
            Some(index,) => script.remove(index,).2,
            None => Err(Error::Api {
                status:  599,
                message: format!("unscripted lookup for {slug}"),
            },),
        }
    }
}

pub(crate) fn entry(slug: &str,) -> RepoEntry
{
    RepoEntry::new(slug, slug, String::new(), String::new(),)
}

pub(crate) fn stars(slug: &str, count: u64,) -> Result<RepoStars, Error,>
{
    Ok(RepoStars {
        slug:        slug.to_owned(),
        stars:       count,
        html_url:    format!("https://github.com/{slug}"),
        description: None,
    },)
}

pub(crate) fn rejected() -> Result<RepoStars, Error,>
{
    Err(Error::InvalidCredential {
        message: "Bad credentials".to_owned(),
    },)
}

pub(crate) fn limited(reset_at: Option<u64,>,) -> Result<RepoStars, Error,>
{
    Err(Error::RateLimited {
        message: "API rate limit exceeded".to_owned(),
        reset_at,
    },)
}
