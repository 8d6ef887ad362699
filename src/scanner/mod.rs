use crate::error::{MdSyncError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct PostFile {
    pub path: PathBuf,
    pub file_name: String,
}

/// ディレクトリ直下の通常ファイルを列挙する
///
/// サブディレクトリやソケット等は含まない。シンボリックリンクは
/// リンク先が通常ファイルの場合のみ含める。
pub fn list_plain_files(folder: &Path) -> Result<Vec<PostFile>> {
    if !folder.is_dir() {
        return Err(MdSyncError::FolderNotFound(folder.display().to_string()));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(folder).min_depth(1).max_depth(1) {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        files.push(PostFile {
            path: path.to_path_buf(),
            file_name: entry.file_name().to_string_lossy().to_string(),
        });
    }

    // ファイル名でソート
    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_list_folder_not_found() {
        let result = list_plain_files(Path::new("/nonexistent/folder"));
        assert!(matches!(result, Err(MdSyncError::FolderNotFound(_))));
    }

    #[test]
    fn test_list_file_instead_of_folder() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("post.md");
        File::create(&file).unwrap();

        let result = list_plain_files(&file);
        assert!(matches!(result, Err(MdSyncError::FolderNotFound(_))));
    }

    #[test]
    fn test_list_empty_folder() {
        let dir = tempdir().unwrap();
        let result = list_plain_files(dir.path()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_list_any_extension() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("hello.md")).unwrap().write_all(b"# hi").unwrap();
        File::create(dir.path().join("notes.txt")).unwrap().write_all(b"text").unwrap();
        File::create(dir.path().join("README")).unwrap();

        let result = list_plain_files(dir.path()).unwrap();
        let names: Vec<_> = result.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["README", "hello.md", "notes.txt"]);
    }

    #[test]
    fn test_subdirectories_excluded() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("drafts")).unwrap();
        File::create(dir.path().join("drafts").join("inner.md")).unwrap();
        File::create(dir.path().join("top.md")).unwrap();

        let result = list_plain_files(dir.path()).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].file_name, "top.md");
        assert_eq!(result[0].path, dir.path().join("top.md"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_follow_target_kind() {
        let dir = tempdir().unwrap();
        let target_dir = tempdir().unwrap();
        File::create(target_dir.path().join("real.md")).unwrap();

        std::os::unix::fs::symlink(target_dir.path().join("real.md"), dir.path().join("link.md")).unwrap();
        std::os::unix::fs::symlink(target_dir.path(), dir.path().join("linkdir")).unwrap();

        let result = list_plain_files(dir.path()).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].file_name, "link.md");
    }
}
