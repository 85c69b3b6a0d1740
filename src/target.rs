//! コマンドライン引数のパスを解析対象に解決する

use std::path::{Path, PathBuf};

use jsloc_shared_kernel::{PresentationError, PresentationResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    File(PathBuf),
    Directory(PathBuf),
}

/// パスを解析対象として解決する
///
/// 直接指定されたファイルは拡張子を大文字小文字を区別せずに判定し、
/// 除外サフィックスは適用しません。
///
/// # Errors
///
/// 存在しないパスは `InvalidTarget`、対象外の拡張子のファイルは `UnsupportedFile`。
pub fn resolve_target(path: &Path, extensions: &[String]) -> PresentationResult<Target> {
    if !path.exists() {
        return Err(PresentationError::InvalidTarget { path: path.to_path_buf() });
    }
    if path.is_dir() {
        return Ok(Target::Directory(path.to_path_buf()));
    }

    let accepted = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext)));
    if accepted {
        Ok(Target::File(path.to_path_buf()))
    } else {
        Err(PresentationError::UnsupportedFile { path: path.to_path_buf() })
    }
}
