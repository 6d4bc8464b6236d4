// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// GitHub credential discovery from environment variables.
///
/// Credentials are collected in priority order: the well-known token
/// variables first, then any other variable whose name contains `PAT`.
use std::{ffi::OsString, fmt};

use tracing::debug;

/// Well-known variables checked before the `PAT` scan, in priority order.
pub const PREFERRED_TOKEN_VARIABLES: &[&str] = &["GITHUB_TOKEN", "GH_TOKEN", "GITHUB_PAT", "GH_PAT",];

const PAT_MARKER: &str = "PAT";
const SEARCH_PATH_SUFFIX: &str = "PATH";

/// Opaque API token. The value is never printed by `Debug`.
#[derive(Clone, PartialEq, Eq,)]
pub struct Credential(String,);

impl Credential
{
    /// Wraps a raw token value.
    pub fn new(token: impl Into<String,>,) -> Self
    {
        Self(token.into(),)
    }

    /// Returns the raw token for building authenticated clients.
    pub fn expose(&self,) -> &str
    {
        &self.0
    }
}

impl fmt::Debug for Credential
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        f.write_str("Credential(***)",)
    }
}

/// Ordered set of credentials tried one after another.
#[derive(Debug, Clone, Default, PartialEq, Eq,)]
pub struct CredentialSet
{
    credentials: Vec<Credential,>,
}

impl CredentialSet
{
    /// Builds a set from explicit credentials, keeping their order.
    pub fn new(credentials: Vec<Credential,>,) -> Self
    {
        Self {
            credentials,
        }
    }

    /// Discovers credentials from the process environment.
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    pub fn from_env() -> Self
    {
        Self::from_os_pairs(std::env::vars_os(),)
    }

    /// Discovers credentials from raw `(name, value)` pairs, skipping pairs
    /// that are not valid Unicode.
    pub fn from_os_pairs<I,>(pairs: I,) -> Self
    where
        I: IntoIterator<Item = (OsString, OsString,),>,
    {
        Self::from_pairs(pairs.into_iter().filter_map(|(name, value,)| {
            Some((name.into_string().ok()?, value.into_string().ok()?,),)
        },),)
    }

    /// Discovers credentials from `(name, value)` pairs.
    ///
    /// Preferred variables come first in their fixed order, followed by any
    /// other variable whose upper-cased name contains `PAT`, in enumeration
    /// order. Search-path variables are the exception: a name whose last
    /// `_`-separated segment ends in `PATH` (`PATH`, `GOPATH`,
    /// `LD_LIBRARY_PATH`) is never a token, while `GITHUB_PATH_TOKEN` or
    /// `PATH_PAT` still are. Empty values and repeated values are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use awesome_stars::CredentialSet;
    ///
    /// let set = CredentialSet::from_pairs(vec![
    ///     ("MY_PAT".to_owned(), "second".to_owned()),
    ///     ("GITHUB_TOKEN".to_owned(), "first".to_owned()),
    /// ],);
    /// let tokens: Vec<&str> = set.iter().map(|credential| credential.expose()).collect();
    /// assert_eq!(tokens, vec!["first", "second"]);
    /// ```
    pub fn from_pairs<I,>(pairs: I,) -> Self
    where
        I: IntoIterator<Item = (String, String,),>,
    {
        let pairs: Vec<(String, String,),> = pairs.into_iter().collect();
        let mut credentials: Vec<Credential,> = Vec::new();

        let mut push = |value: &str| {
            if !value.is_empty() && !credentials.iter().any(|known| known.expose() == value,) {
                credentials.push(Credential::new(value,),);
            }
        };

        for key in PREFERRED_TOKEN_VARIABLES {
            if let Some((_, value,),) = pairs.iter().find(|(name, _,)| name == key,) {
                push(value.as_str(),);
            }
        }

        for (name, value,) in &pairs {
            if names_token(name,) {
                push(value.as_str(),);
            }
        }

        debug!("Discovered {} GitHub credentials", credentials.len());
        Self::new(credentials,)
    }

    /// Highest-priority credential, if any.
    pub fn first(&self,) -> Option<&Credential,>
    {
        self.credentials.first()
    }

    /// Credential at `index` in priority order.
    pub fn get(&self, index: usize,) -> Option<&Credential,>
    {
        self.credentials.get(index,)
    }

    pub fn len(&self,) -> usize
    {
        self.credentials.len()
    }

    pub fn is_empty(&self,) -> bool
    {
        self.credentials.is_empty()
    }

    pub fn iter(&self,) -> impl Iterator<Item = &Credential,>
    {
        self.credentials.iter()
    }
}

/// Whether a variable name marks a personal access token.
fn names_token(name: &str,) -> bool
{
    let upper = name.to_uppercase();
    let search_path =
        upper.rsplit('_',).next().is_some_and(|segment| segment.ends_with(SEARCH_PATH_SUFFIX,),);
    upper.contains(PAT_MARKER,) && !search_path
}
