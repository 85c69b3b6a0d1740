use std::fs;
use std::path::Path;

use jsloc_core::{CompiledRules, analyze_source};

use crate::error::{EngineError, Result};
use crate::stats::FileAnalysis;

/// ファイルを読み込んでテキストにする
///
/// 不正な UTF-8 は U+FFFD に置き換えます。
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| EngineError::FileRead { path: path.to_path_buf(), source })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// 1 ファイルを解析する
///
/// # Errors
///
/// 読み込みに失敗した場合は `EngineError::FileRead` を返し、結果は作りません。
pub fn analyze_file(path: &Path, rules: &CompiledRules) -> Result<FileAnalysis> {
    let text = read_source(path)?;
    let analysis = analyze_source(&text, rules);
    log::debug!(
        "{}: {} lines, {} logical",
        path.display(),
        analysis.metrics.total_lines,
        analysis.metrics.logical_lines
    );
    Ok(FileAnalysis::from_source(path, analysis))
}
