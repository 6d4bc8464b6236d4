// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Markdown leaderboard rendering.
///
/// Entries are ranked by star count, highest first, and rendered as a
/// five-column table: rank, linked slug, formatted stars, category, note.
use std::{cmp::Reverse, fs, path::Path};

use tracing::info;

use crate::{
    entry::RepoEntry,
    error::{self, Error},
    format::format_stars,
};

const TABLE_HEADER: &str = "| Rank | Repository | Stars | Category | Note |";
const TABLE_SEPARATOR: &str = "| --- | --- | --- | --- | --- |";

/// Sorts entries by stars descending. The sort is stable and unresolved
/// entries count as zero.
pub fn sort_by_stars(entries: &mut [RepoEntry],)
{
    entries.sort_by_key(|entry| Reverse(entry.ranked_stars(),),);
}

/// Renders the leaderboard table, ranking entries immediately before
/// rendering.
///
/// Entries with equal counts keep their input order. The output ends with a
/// trailing newline.
///
/// # Examples
///
/// ```
/// use awesome_stars::{RepoEntry, render_markdown};
///
/// let mut entry = RepoEntry::new("moby", "moby/moby", "Runtimes".to_owned(), "engine".to_owned(),);
/// entry.stars = Some(68_500,);
/// let table = render_markdown(&[entry],);
/// assert!(table.ends_with("| 1 | [moby/moby](https://github.com/moby/moby) | 68.5k | Runtimes | engine |\n"));
/// ```
pub fn render_markdown(entries: &[RepoEntry],) -> String
{
    let mut ranked: Vec<&RepoEntry,> = entries.iter().collect();
    ranked.sort_by_key(|entry| Reverse(entry.ranked_stars(),),);

    let mut lines = Vec::with_capacity(ranked.len() + 2,);
    lines.push(TABLE_HEADER.to_owned(),);
    lines.push(TABLE_SEPARATOR.to_owned(),);

    for (index, entry,) in ranked.iter().enumerate() {
        lines.push(format!(
            "| {} | [{}]({}) | {} | {} | {} |",
            index + 1,
            entry.slug,
            entry.url,
            format_stars(entry.ranked_stars(),),
            entry.category,
            entry.note
        ),);
    }

    let mut rendered = lines.join("\n",);
    rendered.push('\n',);
    rendered
}

/// Writes the rendered report, creating missing parent directories.
///
/// # Errors
///
/// Returns [`Error::Output`] when the directories or the file cannot be
/// written.
pub fn write_report(path: &Path, contents: &str,) -> Result<(), Error,>
{
    if let Some(parent,) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent,).map_err(|source| error::output_error(path, source,),)?;
    }

    fs::write(path, contents,).map_err(|source| error::output_error(path, source,),)?;
    info!("Wrote report to {}", path.display());

    Ok((),)
}

#[cfg(test)]
mod tests
{
    use std::fs;

    use tempfile::tempdir;

    use super::{render_markdown, sort_by_stars, write_report};
    use crate::entry::RepoEntry;

    fn ranked(name: &str, stars: Option<u64,>,) -> RepoEntry
    {
        let mut entry = RepoEntry::new(name, &format!("owner/{name}"), String::new(), String::new(),);
        entry.stars = stars;
        entry
    }

    #[test]
    fn ties_keep_input_order_and_missing_counts_last()
    {
        let entries = vec![
            ranked("first-five", Some(5,),),
            ranked("second-five", Some(5,),),
            ranked("ten", Some(10,),),
            ranked("unresolved", None,),
        ];
        let table = render_markdown(&entries,);
        let rows: Vec<&str,> = table.lines().skip(2,).collect();

        assert_eq!(rows, vec![
            "| 1 | [owner/ten](https://github.com/owner/ten) | 10 |  |  |",
            "| 2 | [owner/first-five](https://github.com/owner/first-five) | 5 |  |  |",
            "| 3 | [owner/second-five](https://github.com/owner/second-five) | 5 |  |  |",
            "| 4 | [owner/unresolved](https://github.com/owner/unresolved) | 0 |  |  |",
        ]);
    }

    #[test]
    fn table_has_header_separator_and_trailing_newline()
    {
        let mut entry =
            RepoEntry::new("cadvisor", "google/cadvisor", "Monitoring".to_owned(), "usage".to_owned(),);
        entry.stars = Some(17_240,);

        let table = render_markdown(&[entry],);

        assert_eq!(
            table,
            "| Rank | Repository | Stars | Category | Note |\n| --- | --- | --- | --- | --- |\n| 1 | \
             [google/cadvisor](https://github.com/google/cadvisor) | 17.2k | Monitoring | usage |\n"
        );
    }

    #[test]
    fn empty_input_renders_header_only()
    {
        let table = render_markdown(&[],);
        assert_eq!(table, "| Rank | Repository | Stars | Category | Note |\n| --- | --- | --- | --- | --- |\n");
    }

    #[test]
    fn sort_by_stars_is_stable_descending()
    {
        let mut entries =
            vec![ranked("a", Some(5,),), ranked("b", Some(5,),), ranked("c", Some(10,),), ranked("d", None,)];
        sort_by_stars(&mut entries,);
        let names: Vec<&str,> = entries.iter().map(|entry| entry.name.as_str(),).collect();
        assert_eq!(names, vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn write_report_creates_parent_directories()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let path = temp.path().join("github",).join("stars.md",);

        write_report(&path, "| table |\n",).expect("report written",);

        assert_eq!(fs::read_to_string(&path,).expect("readable",), "| table |\n");
    }

    #[test]
    fn write_report_reports_unwritable_destination()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let blocker = temp.path().join("file",);
        fs::write(&blocker, "",).expect("blocker written",);

        let error = write_report(&blocker.join("stars.md",), "x",).expect_err("parent is a file",);
        assert!(matches!(error, crate::Error::Output { .. }));
    }
}
