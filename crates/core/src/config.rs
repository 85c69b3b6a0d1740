//! 論理行カウントのルールセット
//!
//! [`RuleSet`] は設定値 (ファイルから読み込み可能) で、[`RuleSet::compile`] で
//! カテゴリごとの正規表現にまとめた [`CompiledRules`] を得ます。
//! プロセス全体で共有する状態は持たないため、異なるルールの解析を並行して実行できます。

use std::collections::HashSet;

use jsloc_shared_kernel::{DomainError, DomainResult};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::logical::Category;

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

/// 論理行カウントのルール
///
/// 各カテゴリのパターンは英数字を含めば単語 (単語境界で一致、内部の空白は
/// 任意長の空白に一致)、含まなければ記号 (エスケープしてそのまま一致) として扱います。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RuleSet {
    pub logical: Vec<String>,
    pub iteration: Vec<String>,
    pub jump: Vec<String>,
    pub data_declaration: Vec<String>,
    pub block_delimiter: Vec<String>,
    /// この単語を含む行では `blockDelimiter` を数えない
    pub block_suppressors: Vec<String>,
    /// `name(...)` を `func()` ではなく `name()` に正規化する識別子
    pub call_keywords: Vec<String>,
    /// 関数呼び出しのプレースホルダ名
    pub call_placeholder: String,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            logical: words(&["if", "else", "else if", "try", "catch", "switch", "?"]),
            iteration: words(&["for", "while", "do"]),
            jump: words(&["return", "break", "continue", "throw"]),
            data_declaration: words(&["let", "const", "var", "function", "import", "export", "require"]),
            block_delimiter: words(&["{"]),
            block_suppressors: words(&["if", "for", "while", "switch", "try", "catch", "do"]),
            call_keywords: words(&["if", "for", "while", "switch", "catch", "require"]),
            call_placeholder: "func".to_string(),
        }
    }
}

impl RuleSet {
    /// キーワード系カテゴリのパターン
    ///
    /// `FunctionCalls` はプレースホルダで数えるためパターンを持ちません。
    pub fn patterns(&self, category: Category) -> &[String] {
        match category {
            Category::Logical => &self.logical,
            Category::Iteration => &self.iteration,
            Category::Jump => &self.jump,
            Category::DataDeclaration => &self.data_declaration,
            Category::BlockDelimiter => &self.block_delimiter,
            Category::FunctionCalls => &[],
        }
    }

    /// 正規表現を組み立てる
    ///
    /// # Errors
    ///
    /// プレースホルダ名が識別子として不正な場合、または組み立てた正規表現が
    /// コンパイルできない場合に `DomainError` を返します。
    pub fn compile(&self) -> DomainResult<CompiledRules> {
        if !is_identifier(&self.call_placeholder) {
            return Err(DomainError::InvalidRuleSet {
                reason: format!("callPlaceholder '{}' is not an identifier", self.call_placeholder),
            });
        }

        let keyword = |category: Category| compile_alternation(self.patterns(category));

        Ok(CompiledRules {
            logical: keyword(Category::Logical)?,
            iteration: keyword(Category::Iteration)?,
            jump: keyword(Category::Jump)?,
            data_declaration: keyword(Category::DataDeclaration)?,
            block_delimiter: keyword(Category::BlockDelimiter)?,
            block_suppressor: compile_alternation(&self.block_suppressors)?,
            call_keywords: self.call_keywords.iter().cloned().collect(),
            placeholder: format!("{}()", self.call_placeholder),
        })
    }
}

/// コンパイル済みルール (スレッド間で共有可能)
#[derive(Debug, Clone)]
pub struct CompiledRules {
    logical: Option<Regex>,
    iteration: Option<Regex>,
    jump: Option<Regex>,
    data_declaration: Option<Regex>,
    block_delimiter: Option<Regex>,
    block_suppressor: Option<Regex>,
    call_keywords: HashSet<String>,
    placeholder: String,
}

impl CompiledRules {
    pub(crate) fn keyword_regex(&self, category: Category) -> Option<&Regex> {
        match category {
            Category::Logical => self.logical.as_ref(),
            Category::Iteration => self.iteration.as_ref(),
            Category::Jump => self.jump.as_ref(),
            Category::DataDeclaration => self.data_declaration.as_ref(),
            Category::BlockDelimiter => self.block_delimiter.as_ref(),
            Category::FunctionCalls => None,
        }
    }

    pub(crate) fn block_suppressor(&self) -> Option<&Regex> {
        self.block_suppressor.as_ref()
    }

    pub(crate) fn is_call_keyword(&self, name: &str) -> bool {
        self.call_keywords.contains(name)
    }

    /// 正規化後の関数呼び出し (`func()`)
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }
}

impl Default for CompiledRules {
    fn default() -> Self {
        // 既定ルールは固定文字列から組み立てるため失敗しない
        RuleSet::default().compile().unwrap()
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// 単語パターンと記号パターンを 1 つの交替にまとめる
fn alternation_source(patterns: &[String]) -> Option<String> {
    let (word_patterns, symbol_patterns): (Vec<&String>, Vec<&String>) = patterns
        .iter()
        .filter(|p| !p.trim().is_empty())
        .partition(|p| p.chars().any(|c| c.is_ascii_alphanumeric()));

    let mut parts = Vec::with_capacity(2);
    if !word_patterns.is_empty() {
        let alternatives: Vec<String> = word_patterns
            .iter()
            .map(|w| w.split_whitespace().map(regex::escape).collect::<Vec<_>>().join(r"\s+"))
            .collect();
        // 単語境界は ASCII 基準 (非 ASCII 文字は単語の外側として扱う)
        parts.push(format!(r"(?-u:\b)(?:{})(?-u:\b)", alternatives.join("|")));
    }
    if !symbol_patterns.is_empty() {
        let alternatives: Vec<String> = symbol_patterns.iter().map(|s| regex::escape(s)).collect();
        parts.push(alternatives.join("|"));
    }

    if parts.is_empty() { None } else { Some(parts.join("|")) }
}

fn compile_alternation(patterns: &[String]) -> DomainResult<Option<Regex>> {
    let Some(source) = alternation_source(patterns) else {
        return Ok(None);
    };
    Regex::new(&source).map(Some).map_err(|e| DomainError::InvalidPattern {
        pattern: source.clone(),
        details: e.to_string(),
        source: Some(Box::new(e)),
    })
}
