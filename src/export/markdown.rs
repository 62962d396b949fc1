use std::fs;
use std::path::{Path, PathBuf};

use crate::export::ExportError;
use crate::model::Note;

/// Replace every character outside `[A-Za-z0-9]` with `_`.
///
/// Works per `char`, so a multi-byte character becomes a single `_`.
pub fn sanitize_file_stem(title: &str) -> String {
    title
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '_' })
        .collect()
}

pub fn markdown_file_name(title: &str) -> String {
    format!("{}.md", sanitize_file_stem(title))
}

/// Write the note content verbatim to `<dir>/<sanitized title>.md`,
/// overwriting any existing file. Returns the written path.
pub fn export_markdown(note: &Note, dir: &Path) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(markdown_file_name(&note.title));
    fs::write(&path, note.content.as_bytes()).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;

    tracing::info!(id = %note.id, path = %path.display(), "Exported note as markdown");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_replaces_everything_but_ascii_alphanumerics() {
        assert_eq!(sanitize_file_stem("My Note: v2!"), "My_Note__v2_");
        assert_eq!(sanitize_file_stem("Café"), "Caf_");
        assert_eq!(sanitize_file_stem(""), "");
    }

    #[test]
    fn file_name_gets_md_extension() {
        assert_eq!(markdown_file_name("Untitled Note"), "Untitled_Note.md");
    }
}
