//! 論理行カウント
//!
//! コメント除去済みの各行を [`normalize_line`] で正規化してから、カテゴリごとに
//! パターンの出現数を数えます。1 行が複数のカテゴリに寄与することがあります。
//! 合計 (`total`) は全カテゴリの和です。

mod normalize;

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

pub use normalize::normalize_line;

use crate::config::CompiledRules;

/// 構文カテゴリ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// `if`, `else`, `else if`, `try`, `catch`, `switch`, `?`
    Logical,
    /// `for`, `while`, `do`
    Iteration,
    /// `return`, `break`, `continue`, `throw`
    Jump,
    /// `let`, `const`, `var`, `function`, `import`, `export`, `require`
    DataDeclaration,
    /// 制御構文に属さない `{`
    BlockDelimiter,
    /// 正規化後の `func()`
    FunctionCalls,
}

impl Category {
    pub const ALL: [Self; 6] = [
        Self::Logical,
        Self::Iteration,
        Self::Jump,
        Self::DataDeclaration,
        Self::BlockDelimiter,
        Self::FunctionCalls,
    ];

    /// 表示・シリアライズ用の名前
    pub const fn name(self) -> &'static str {
        match self {
            Self::Logical => "logical",
            Self::Iteration => "iteration",
            Self::Jump => "jump",
            Self::DataDeclaration => "dataDeclaration",
            Self::BlockDelimiter => "blockDelimiter",
            Self::FunctionCalls => "functionCalls",
        }
    }
}

/// カテゴリ別カウント
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicalCounts {
    pub logical: usize,
    pub iteration: usize,
    pub jump: usize,
    pub data_declaration: usize,
    pub block_delimiter: usize,
    pub function_calls: usize,
}

impl LogicalCounts {
    pub const fn get(&self, category: Category) -> usize {
        match category {
            Category::Logical => self.logical,
            Category::Iteration => self.iteration,
            Category::Jump => self.jump,
            Category::DataDeclaration => self.data_declaration,
            Category::BlockDelimiter => self.block_delimiter,
            Category::FunctionCalls => self.function_calls,
        }
    }

    fn slot_mut(&mut self, category: Category) -> &mut usize {
        match category {
            Category::Logical => &mut self.logical,
            Category::Iteration => &mut self.iteration,
            Category::Jump => &mut self.jump,
            Category::DataDeclaration => &mut self.data_declaration,
            Category::BlockDelimiter => &mut self.block_delimiter,
            Category::FunctionCalls => &mut self.function_calls,
        }
    }

    pub fn record(&mut self, category: Category, count: usize) {
        *self.slot_mut(category) += count;
    }

    /// 論理行数 (全カテゴリの和)
    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|&c| self.get(c)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL.iter().map(move |&c| (c, self.get(c)))
    }
}

impl Add for LogicalCounts {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign for LogicalCounts {
    fn add_assign(&mut self, rhs: Self) {
        for (category, count) in rhs.iter() {
            self.record(category, count);
        }
    }
}

/// 正規化済みの 1 行をカテゴリごとに数える
pub fn count_normalized_line(line: &str, rules: &CompiledRules) -> LogicalCounts {
    let mut counts = LogicalCounts::default();

    for category in [Category::Logical, Category::Iteration, Category::Jump, Category::DataDeclaration] {
        if let Some(re) = rules.keyword_regex(category) {
            counts.record(category, re.find_iter(line).count());
        }
    }

    // 制御構文の `{` はキーワード側で数え済み
    let suppressed = rules.block_suppressor().is_some_and(|re| re.is_match(line));
    if !suppressed {
        if let Some(re) = rules.keyword_regex(Category::BlockDelimiter) {
            counts.record(Category::BlockDelimiter, re.find_iter(line).count());
        }
    }

    counts.record(Category::FunctionCalls, line.matches(rules.placeholder()).count());
    counts
}

/// コメント除去済みの行から論理行を数える
pub fn count_logical_lines<S: AsRef<str>>(lines: &[S], rules: &CompiledRules) -> LogicalCounts {
    lines
        .iter()
        .map(|line| {
            let normalized = normalize_line(line.as_ref(), rules);
            count_normalized_line(&normalized, rules)
        })
        .fold(LogicalCounts::default(), Add::add)
}
