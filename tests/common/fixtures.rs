use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// 一時ディレクトリ上の JS プロジェクト
#[derive(Debug)]
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self { dir: TempDir::new().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }
}

pub const UTIL_JS: &str = "\
// util module
import fs from 'fs';

/**
 * Reads a file.
 */
export function read(path) {
  if (!path) {
    throw new Error('no path'); // guard
  }
  return fs.readFileSync(path, 'utf8');
}
";

pub const INDEX_JS: &str = "const util = require('./lib/util.js');\nutil.read('a.txt');\n";

/// 典型的なレイアウト: 対象 2 ファイルと、除外されるべきもの
#[allow(dead_code)]
pub fn sample_project() -> Workspace {
    let ws = Workspace::new();
    ws.write_file("index.js", INDEX_JS);
    ws.write_file("lib/util.js", UTIL_JS);
    ws.write_file("lib/util.min.js", "var a=1;");
    ws.write_file("node_modules/dep/index.js", "module.exports = 1;\n");
    ws.write_file(".git/hooks/pre-commit.js", "exit();\n");
    ws.write_file("README.md", "# sample\n");
    ws
}

pub fn jsloc() -> Command {
    Command::new(env!("CARGO_BIN_EXE_jsloc"))
}
