use std::path::{Path, PathBuf};

use ignore::{DirEntry, WalkBuilder};

use crate::config::WalkOptions;
use crate::error::EngineError;

/// 走査結果: 対象ファイル (走査順) と途中で読めなかったエントリ
#[derive(Debug, Default)]
pub struct WalkOutcome {
    pub files: Vec<PathBuf>,
    pub errors: Vec<(PathBuf, EngineError)>,
}

/// 拡張子とサフィックスで対象ファイルか判定する
pub fn is_candidate(path: &Path, options: &WalkOptions) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let ext_ok = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| options.extensions.iter().any(|allowed| allowed == ext));
    ext_ok && !options.exclude_suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
}

fn is_pruned(entry: &DirEntry, options: &WalkOptions) -> bool {
    // 起点は `.` のような名前でも必ず走査する
    if entry.depth() == 0 || !entry.file_type().is_some_and(|ft| ft.is_dir()) {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    (options.skip_hidden_dirs && name.starts_with('.')) || options.prune_dirs.iter().any(|d| *d == name)
}

/// ディレクトリを逐次走査する
///
/// 兄弟はファイル名順に並ぶため、出力順は実行ごとに変わりません。
/// 読めないエントリは警告を出して記録し、走査は続けます。
pub fn walk(options: &WalkOptions) -> WalkOutcome {
    let mut outcome = WalkOutcome::default();
    let Some((first, rest)) = options.roots.split_first() else {
        return outcome;
    };

    let mut builder = WalkBuilder::new(first);
    for root in rest {
        builder.add(root);
    }

    builder
        .standard_filters(false)
        .git_ignore(options.git_ignore)
        .git_exclude(options.git_ignore)
        .git_global(options.git_ignore)
        .parents(options.git_ignore)
        .require_git(false)
        .follow_links(options.follow_links)
        .max_depth(options.max_depth)
        .sort_by_file_name(|a, b| a.cmp(b));

    let filter_options = options.clone();
    builder.filter_entry(move |entry| !is_pruned(entry, &filter_options));

    for entry in builder.build() {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_some_and(|ft| ft.is_file()) && is_candidate(entry.path(), options) {
                    outcome.files.push(entry.into_path());
                }
            }
            Err(err) => {
                let err = EngineError::Walk(err);
                let path = err.path().map_or_else(|| PathBuf::from("<walk>"), Path::to_path_buf);
                log::warn!("skipping unreadable entry {}: {err}", path.display());
                outcome.errors.push((path, err));
            }
        }
    }

    log::debug!("walk found {} candidate files", outcome.files.len());
    outcome
}
