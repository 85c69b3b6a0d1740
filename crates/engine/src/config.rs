use std::path::PathBuf;

use derive_builder::Builder;

/// 走査対象の選び方
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    #[builder(default)]
    pub roots: Vec<PathBuf>,
    /// 対象とする拡張子 (ドットなし、大文字小文字を区別)
    #[builder(default = "vec![\"js\".to_string()]")]
    pub extensions: Vec<String>,
    /// このサフィックスで終わるファイル名は除外
    #[builder(default = "vec![\".min.js\".to_string()]")]
    pub exclude_suffixes: Vec<String>,
    /// 降りないディレクトリ名
    #[builder(default = "vec![\"node_modules\".to_string()]")]
    pub prune_dirs: Vec<String>,
    #[builder(default = "true")]
    pub skip_hidden_dirs: bool,
    #[builder(default)]
    pub git_ignore: bool,
    /// シンボリックリンクの先も対象にする
    #[builder(default = "true")]
    pub follow_links: bool,
    #[builder(default)]
    pub max_depth: Option<usize>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            roots: vec![],
            extensions: vec!["js".to_string()],
            exclude_suffixes: vec![".min.js".to_string()],
            prune_dirs: vec!["node_modules".to_string()],
            skip_hidden_dirs: true,
            git_ignore: false,
            follow_links: true,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub walk: WalkOptions,
    #[builder(default = "num_cpus::get()")]
    pub threads: usize,
    #[builder(default)]
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { walk: WalkOptions::default(), threads: num_cpus::get(), strict: false }
    }
}
