//! Content loader - reads album files from the content directory

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{Album, FrontMatter};
use crate::error::{Result, SiteError};

/// Load every album in `dir`, sorted ascending by ranking.
///
/// Files are visited in file-name order and the sort is stable, so albums
/// sharing a ranking stay ordered by file name. Albums without a ranking go
/// last.
pub fn load_all<P: AsRef<Path>>(dir: P) -> Result<Vec<Album>> {
    let dir = dir.as_ref();

    let mut albums = content_files(dir)?
        .iter()
        .map(|path| load_album(path))
        .collect::<Result<Vec<_>>>()?;

    albums.sort_by_key(|a| (a.ranking.is_none(), a.ranking));

    tracing::debug!("Loaded {} albums from {:?}", albums.len(), dir);
    Ok(albums)
}

/// Load a single album from a file
pub fn load_album(path: &Path) -> Result<Album> {
    let content = fs::read_to_string(path).map_err(|source| SiteError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let (fm, body) = FrontMatter::parse(&content);

    let slug = path
        .file_name()
        .map(|name| slug_for(&name.to_string_lossy()))
        .unwrap_or_default();

    if let Some(declared) = fm.slug.as_deref() {
        if declared != slug {
            tracing::warn!(
                "Front-matter slug '{}' in {:?} ignored, using '{}' from the file name",
                declared,
                path,
                slug
            );
        }
    }

    if fm.title.is_none() || fm.artist.is_none() {
        tracing::debug!("Album {:?} has no title or artist", path);
    }

    Ok(Album::from_parts(slug, fm, body, path.to_path_buf()))
}

/// Every content file directly inside `dir`, sorted by file name.
/// Hidden entries and subdirectories are skipped.
pub fn content_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let dir_error = |source: std::io::Error| SiteError::ContentDir {
        path: dir.to_path_buf(),
        source,
    };

    if !fs::metadata(dir).map_err(dir_error)?.is_dir() {
        return Err(dir_error(std::io::Error::new(
            std::io::ErrorKind::Other,
            "not a directory",
        )));
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();
    for entry in walker {
        let entry = entry.map_err(|e| dir_error(e.into()))?;
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        if entry.file_type().is_file() && !hidden {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Derive a slug from a file name by dropping its last extension.
/// `kind-of-blue.md` becomes `kind-of-blue`.
pub fn slug_for(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(pos) if pos > 0 => file_name[..pos].to_string(),
        _ => file_name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    fn entry(title: &str, ranking: i64) -> String {
        format!(
            "---\ntitle: {}\nartist: Someone\nranking: {}\n---\nComment on {}.\n",
            title, ranking, title
        )
    }

    #[test]
    fn test_slug_for() {
        assert_eq!(slug_for("kind-of-blue.md"), "kind-of-blue");
        assert_eq!(slug_for("blue.mdx"), "blue");
        assert_eq!(slug_for("vol.2.md"), "vol.2");
        assert_eq!(slug_for("README"), "README");
    }

    #[test]
    fn test_one_album_per_file_sorted_by_ranking() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "third.md", &entry("Third", 3));
        write(tmp.path(), "first.md", &entry("First", 1));
        write(tmp.path(), "second.mdx", &entry("Second", 2));

        let albums = load_all(tmp.path()).unwrap();
        assert_eq!(albums.len(), 3);

        let slugs: Vec<_> = albums.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, vec!["first", "second", "third"]);
        assert_eq!(albums[0].title.as_deref(), Some("First"));
        assert_eq!(albums[0].comment, "Comment on First.\n");
    }

    #[test]
    fn test_ties_ordered_by_file_name() {
        let tmp = TempDir::new().unwrap();
        for name in ["delta", "alpha", "charlie", "bravo", "echo"] {
            write(tmp.path(), &format!("{}.md", name), &entry(name, 7));
        }
        write(tmp.path(), "top.md", &entry("top", 1));

        let albums = load_all(tmp.path()).unwrap();
        let slugs: Vec<_> = albums.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, vec!["top", "alpha", "bravo", "charlie", "delta", "echo"]);
    }

    #[test]
    fn test_content_files_sorted_by_name() {
        let tmp = TempDir::new().unwrap();
        for name in ["c.md", "a.md", "b.md"] {
            write(tmp.path(), name, "");
        }
        let names: Vec<String> = content_files(tmp.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.md", "b.md", "c.md"]);
    }

    #[test]
    fn test_rankings_non_decreasing_and_unranked_last() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "x.md", &entry("x", 10));
        write(tmp.path(), "y.md", "---\ntitle: y\n---\n");
        write(tmp.path(), "z.md", &entry("z", -2));
        write(tmp.path(), "w.md", &entry("w", 10));

        let albums = load_all(tmp.path()).unwrap();
        assert_eq!(albums.last().unwrap().slug, "y");
        let ranks: Vec<i64> = albums.iter().filter_map(|a| a.ranking).collect();
        assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_missing_tags_default_to_empty() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "plain.md", &entry("Plain", 1));
        let albums = load_all(tmp.path()).unwrap();
        assert!(albums[0].tags.is_empty());
        assert_eq!(albums[0].cover, None);
    }

    #[test]
    fn test_filename_wins_over_frontmatter_slug() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "real.md", "---\nslug: declared\ntitle: T\n---\n");
        let albums = load_all(tmp.path()).unwrap();
        assert_eq!(albums[0].slug, "real");
    }

    #[test]
    fn test_hidden_files_and_directories_skipped() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "one.md", &entry("One", 1));
        write(tmp.path(), ".DS_Store", "junk");
        fs::create_dir(tmp.path().join("drafts")).unwrap();
        write(&tmp.path().join("drafts"), "two.md", &entry("Two", 2));

        let albums = load_all(tmp.path()).unwrap();
        assert_eq!(albums.len(), 1);
        assert_eq!(albums[0].slug, "one");
    }

    #[test]
    fn test_slugs_unique_per_file() {
        let tmp = TempDir::new().unwrap();
        for i in 0..5 {
            write(tmp.path(), &format!("album-{}.md", i), &entry("A", i));
        }
        let albums = load_all(tmp.path()).unwrap();
        let slugs: HashSet<_> = albums.iter().map(|a| &a.slug).collect();
        assert_eq!(slugs.len(), 5);
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let err = load_all(tmp.path().join("nope")).unwrap_err();
        assert!(matches!(err, SiteError::ContentDir { .. }));
    }

    #[test]
    fn test_file_instead_of_directory_is_fatal() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "file.md", "x");
        let err = load_all(tmp.path().join("file.md")).unwrap_err();
        assert!(matches!(err, SiteError::ContentDir { .. }));
    }

    #[test]
    fn test_empty_directory() {
        let tmp = TempDir::new().unwrap();
        assert!(load_all(tmp.path()).unwrap().is_empty());
    }
}
