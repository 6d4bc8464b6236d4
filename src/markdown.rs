// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Extracts repository entries from awesome-list markdown.
///
/// The document is scanned line by line. Headings maintain a stack of open
/// section titles, and bullets linking to GitHub repositories become
/// [`RepoEntry`] values categorized by the headings enclosing them. Lines that
/// do not match either shape are ignored; parsing never fails.
use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;
use tracing::debug;

use crate::{entry::RepoEntry, slug::slug_from_link};

const MAX_HEADING_LEVEL: usize = 6;
const CATEGORY_SEPARATOR: &str = " / ";

static HEADING: LazyLock<Regex,> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.*)$",).expect("heading pattern is valid",),);
static BULLET: LazyLock<Regex,> = LazyLock::new(|| {
    Regex::new(r"^-+\s*\[([^\]]+)\]\((https?://github\.com/[^)]+)\)\s*(.*)$",)
        .expect("bullet pattern is valid",)
},);
static WHITESPACE: LazyLock<Regex,> =
    LazyLock::new(|| Regex::new(r"\s+",).expect("whitespace pattern is valid",),);
static INLINE_LINK: LazyLock<Regex,> = LazyLock::new(|| {
    Regex::new(r"\[(@?[^\]]+)\]\([^)]+\)",).expect("inline link pattern is valid",)
},);
static EMOJI_SHORTCODE: LazyLock<Regex,> =
    LazyLock::new(|| Regex::new(r"[:;][a-zA-Z0-9_]+:",).expect("emoji pattern is valid",),);

/// Stack of open heading titles indexed by heading level.
#[derive(Debug, Default,)]
struct HeadingStack
{
    titles: Vec<String,>,
}

impl HeadingStack
{
    /// Opens a heading, closing every heading at the same or deeper level.
    fn open(&mut self, level: usize, title: &str,)
    {
        self.titles.truncate(level.clamp(1, MAX_HEADING_LEVEL,) - 1,);
        self.titles.push(title.trim().to_owned(),);
    }

    /// Category of the current position, excluding the document title.
    fn category(&self,) -> String
    {
        match self.titles.split_first() {
            Some((_, nested,),) if !nested.is_empty() => nested.join(CATEGORY_SEPARATOR,),
            _ => String::new(),
        }
    }
}

/// Parses repository entries from an awesome-list markdown document.
///
/// Entries keep their document order. When several bullets link to the same
/// `owner/repo`, only the first one is kept.
///
/// # Examples
///
/// ```
/// use awesome_stars::parse_repos;
///
/// let markdown = "# Awesome\n## DBs\n- [foo/bar](https://github.com/foo/bar) - a database\n";
/// let entries = parse_repos(markdown,);
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].category, "DBs");
/// assert_eq!(entries[0].note, "a database");
/// ```
pub fn parse_repos(markdown: &str,) -> Vec<RepoEntry,>
{
    let mut headings = HeadingStack::default();
    let mut entries = Vec::new();
    let mut seen = HashSet::new();

    for raw_line in markdown.lines() {
        let line = raw_line.trim();

        if let Some(captures,) = HEADING.captures(line,) {
            headings.open(captures[1].len(), &captures[2],);
            continue;
        }

        let Some(captures,) = BULLET.captures(line,) else {
            continue;
        };

        let (name, url, tail,) = (&captures[1], &captures[2], &captures[3],);
        let Some(slug,) = slug_from_link(url,) else {
            debug!("Skipping non-repository link {}", url);
            continue;
        };

        if !seen.insert(slug.clone(),) {
            debug!("Skipping duplicate repository {}", slug);
            continue;
        }

        entries.push(RepoEntry::new(name, &slug, headings.category(), clean_note(tail,),),);
    }

    debug!("Parsed {} repositories", entries.len());
    entries
}

/// Cleans the free text that follows a repository link.
///
/// Inline links are replaced by their label, emoji shortcodes such as
/// `:skull:` are removed, whitespace runs collapse to one space and leading
/// or trailing dashes and colons are trimmed.
///
/// # Examples
///
/// ```
/// use awesome_stars::clean_note;
///
/// assert_eq!(clean_note(" -  Built by [@moby](https://github.com/moby) :whale:",), "Built by @moby");
/// ```
pub fn clean_note(text: &str,) -> String
{
    let flattened = INLINE_LINK.replace_all(text, "$1",);
    let stripped = EMOJI_SHORTCODE.replace_all(&flattened, "",);
    let collapsed = WHITESPACE.replace_all(&stripped, " ",);
    collapsed.trim_matches(|ch| matches!(ch, ' ' | '-' | '–' | '—' | ':'),).to_owned()
}
