//! jsloc: JavaScript ソースの行メトリクス集計 CLI

pub mod args;
pub mod config;
pub mod error;
pub mod options;
pub mod presentation;
pub mod target;

use std::io::Write;
use std::process::ExitCode;

use crate::args::Args;
use crate::error::Result;
use crate::options::RenderOptions;
use crate::target::Target;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 引数に従って解析し、結果を `out`、エラー行を `err` に書き出す
///
/// 走査中のファイル単位の失敗は `err` に出力するだけで、終了コードは成功のままです。
///
/// # Errors
///
/// 対象パスやルールファイルが不正な場合、strict モードで失敗した場合、出力に失敗した場合。
pub fn run(args: &Args, out: &mut dyn Write, err: &mut dyn Write) -> Result<ExitCode> {
    let rules = config::load_rules(args.rules.as_deref())?;
    let extensions = config::normalized_extensions(&args.ext);
    let options = RenderOptions { format: args.format, breakdown: args.breakdown, summary_only: args.summary_only };

    match target::resolve_target(&args.path, &extensions)? {
        Target::File(path) => match jsloc_engine::analyze_file(&path, &rules) {
            Ok(analysis) => {
                presentation::render_file(out, &analysis, &options)?;
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                writeln!(err, "Error in file: {}: {e}", path.display())?;
                Ok(ExitCode::FAILURE)
            }
        },
        Target::Directory(root) => {
            let config = config::engine_config(args, root)?;
            let result = jsloc_engine::run(&config, &rules)?;
            presentation::report_errors(err, &result)?;
            presentation::render_directory(out, &result, &options)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
