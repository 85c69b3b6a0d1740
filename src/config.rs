use std::fs;
use std::path::{Path, PathBuf};

use jsloc_core::{CompiledRules, RuleSet};
use jsloc_engine::{Config, ConfigBuilder, WalkOptionsBuilder};
use jsloc_shared_kernel::{ErrorContext, InfrastructureError, PresentationError, PresentationResult, Result};

use crate::args::Args;

/// `--ext` の値を正規化する (先頭の `.` を外し、空は捨てる)
pub fn normalized_extensions(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|e| e.trim().trim_start_matches('.').to_string())
        .filter(|e| !e.is_empty())
        .collect()
}

fn invalid(flag: &str, value: impl ToString, reason: &str) -> PresentationError {
    PresentationError::InvalidValue { flag: flag.to_string(), value: value.to_string(), reason: reason.to_string() }
}

/// ディレクトリ走査用のエンジン設定を組み立てる
///
/// # Errors
///
/// `--jobs 0` や空の拡張子リストなど、走査できない指定は `InvalidValue`。
pub fn engine_config(args: &Args, root: PathBuf) -> PresentationResult<Config> {
    let extensions = normalized_extensions(&args.ext);
    if extensions.is_empty() {
        return Err(invalid("--ext", args.ext.join(","), "at least one extension is required"));
    }

    let threads = match args.jobs {
        Some(0) => return Err(invalid("--jobs", 0, "must be at least 1")),
        Some(n) => n,
        None => num_cpus::get(),
    };

    let walk = WalkOptionsBuilder::default()
        .roots(vec![root])
        .extensions(extensions)
        .exclude_suffixes(args.exclude_suffix.clone())
        .prune_dirs(args.exclude_dir.clone())
        .skip_hidden_dirs(!args.hidden)
        .git_ignore(args.gitignore)
        .follow_links(!args.no_follow)
        .max_depth(args.max_depth)
        .build()
        .map_err(|e| invalid("walk", "", &e.to_string()))?;

    ConfigBuilder::default()
        .walk(walk)
        .threads(threads)
        .strict(args.strict)
        .build()
        .map_err(|e| invalid("config", "", &e.to_string()))
}

/// ルールファイルを読み込む
///
/// YAML は JSON の上位集合なので、どちらの形式も同じパーサで読めます。
///
/// # Errors
///
/// 読み込み・パース・正規表現のコンパイルに失敗した場合。
pub fn load_rule_set(path: &Path) -> Result<RuleSet> {
    let text = fs::read_to_string(path)
        .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
    serde_yaml::from_str::<RuleSet>(&text).with_context(|| format!("invalid rules file {}", path.display()))
}

/// `--rules` があれば読み込み、なければ既定ルールをコンパイルする
///
/// # Errors
///
/// ルールファイルを読めない場合、またはルールが不正な場合。
pub fn load_rules(path: Option<&Path>) -> Result<CompiledRules> {
    let rule_set = match path {
        Some(path) => {
            log::info!("loading rules from {}", path.display());
            load_rule_set(path)?
        }
        None => RuleSet::default(),
    };
    Ok(rule_set.compile()?)
}
