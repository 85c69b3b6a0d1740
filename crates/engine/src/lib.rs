//! ファイル走査と解析の実行エンジン

use std::path::PathBuf;

use jsloc_core::CompiledRules;

pub mod config;
pub mod error;
pub mod filesystem;
pub mod processor;
pub mod stats;

pub use crate::config::{Config, ConfigBuilder, WalkOptions, WalkOptionsBuilder};
pub use crate::error::{EngineError, Result};
pub use crate::processor::analyze_file;
pub use crate::stats::{FileAnalysis, RunResult};

/// 設定された起点を走査し、見つかったファイルをすべて解析する
///
/// 結果は走査順に並びます。ファイル単位の失敗は `RunResult::errors` に集められ、
/// 集計には含まれません。
///
/// # Errors
///
/// 起点が 1 つもない場合は `EngineError::Config`。strict モードでは最初の失敗をそのまま返します。
/// スレッドプールを作れない場合も失敗します。
pub fn run(config: &Config, rules: &CompiledRules) -> Result<RunResult> {
    if config.walk.roots.is_empty() {
        return Err(EngineError::Config("no root paths to walk".to_string()));
    }

    let outcome = filesystem::walk(&config.walk);
    let mut errors = outcome.errors;

    if config.strict && !errors.is_empty() {
        let (_, first) = errors.remove(0);
        return Err(first);
    }

    log::info!("analyzing {} files with {} threads", outcome.files.len(), config.threads.max(1));
    let results = analyze_all(&outcome.files, config, rules)?;

    let mut files = Vec::with_capacity(results.len());
    for (path, result) in outcome.files.into_iter().zip(results) {
        match result {
            Ok(analysis) => files.push(analysis),
            Err(err) if config.strict => return Err(err),
            Err(err) => {
                log::warn!("{err}");
                errors.push((path, err));
            }
        }
    }

    Ok(RunResult::new(files, errors))
}

#[cfg(feature = "parallel")]
fn analyze_all(paths: &[PathBuf], config: &Config, rules: &CompiledRules) -> Result<Vec<Result<FileAnalysis>>> {
    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads.max(1))
        .build()
        .map_err(|e| EngineError::ThreadPool(e.to_string()))?;

    // par_iter + collect は入力順を保つ
    Ok(pool.install(|| paths.par_iter().map(|path| analyze_file(path, rules)).collect()))
}

#[cfg(not(feature = "parallel"))]
fn analyze_all(paths: &[PathBuf], _config: &Config, rules: &CompiledRules) -> Result<Vec<Result<FileAnalysis>>> {
    Ok(paths.iter().map(|path| analyze_file(path, rules)).collect())
}
