//! Star leaderboards for GitHub "awesome lists".
//!
//! The library parses a nested markdown list of repository links into
//! categorized entries, resolves each repository's star count through the
//! GitHub REST API with credential fallback, and renders the entries as a
//! ranked markdown table. Lookups run sequentially; rate-limit exhaustion and
//! unrecoverable API errors abort the whole pass so that no partial report is
//! ever produced.

mod credentials;
mod entry;
mod error;
mod fetch;
mod format;
mod github;
mod markdown;
mod pipeline;
mod render;
mod slug;
#[cfg(test)]
mod testing;

pub use credentials::{Credential, CredentialSet, PREFERRED_TOKEN_VARIABLES};
pub use entry::RepoEntry;
pub use error::{Error, io_error, output_error};
pub use fetch::{fetch_many, fetch_star_data, fetch_star_data_with_progress};
pub use format::{format_stars, rate_limit_message, rate_limit_message_at};
pub use github::{DEFAULT_API_URL, GitHubClient, RepoStars, RepositoryClient, classify_response};
pub use markdown::{clean_note, parse_repos};
pub use pipeline::{Report, build_report, load_markdown};
pub use render::{render_markdown, sort_by_stars, write_report};
pub use slug::{normalize_slug, slug_from_link};
