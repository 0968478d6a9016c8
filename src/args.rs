// src/args.rs
use crate::options::{OutputFormat, ReadFailure};
use crate::parsers;
use clap::{Args as ClapArgs, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "codecount",
    version,
    about = "言語別にコード行/コメント行/空行を数える"
)]
pub struct Args {
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub filter: FilterOptions,

    #[command(flatten)]
    pub scan: ScanOptions,

    #[command(flatten)]
    pub behavior: BehaviorOptions,

    /// 対象パス（省略時はカレントディレクトリ）
    #[arg(value_hint = ValueHint::AnyPath, help_heading = "走査/入力")]
    pub paths: Vec<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: OutputFormat,

    /// ファイルごとの行も出力
    #[arg(long, help_heading = "出力")]
    pub files: bool,
}

#[derive(ClapArgs, Debug)]
pub struct FilterOptions {
    /// 対象とする拡張子（カンマ区切り, 例: go,c,erl）
    #[arg(long, value_delimiter = ',', help_heading = "フィルタ")]
    pub ext: Vec<String>,

    /// 拡張子→言語タグの上書き (例: tpl=erlang)
    #[arg(long = "map-ext", value_parser = parsers::parse_key_val, help_heading = "フィルタ")]
    pub map_ext: Vec<(String, String)>,
}

#[derive(ClapArgs, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct ScanOptions {
    /// 隠しファイルも対象にする
    #[arg(long, help_heading = "走査/入力")]
    pub hidden: bool,

    /// シンボリックリンクを辿る
    #[arg(long, help_heading = "走査/入力")]
    pub follow: bool,

    /// .gitignore を無視する
    #[arg(long, help_heading = "走査/入力")]
    pub no_gitignore: bool,

    /// 並列数
    #[arg(long, value_parser = parsers::parse_usize_1_to_512, help_heading = "走査/入力")]
    pub jobs: Option<usize>,

    #[arg(long = "max-depth", value_parser = parsers::parse_positive_usize, help_heading = "走査/入力")]
    pub max_depth: Option<usize>,
}

#[derive(ClapArgs, Debug)]
pub struct BehaviorOptions {
    /// 最初のエラーで中断する
    #[arg(long, help_heading = "動作")]
    pub strict: bool,

    /// 読み込み途中で失敗したときの扱い
    #[arg(long, value_enum, default_value = "truncate", help_heading = "動作")]
    pub read_failure: ReadFailure,

    /// ログを詳しくする (-v: info, -vv: debug)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet", help_heading = "動作")]
    pub verbose: u8,

    /// エラー以外のログを出さない
    #[arg(short, long, help_heading = "動作")]
    pub quiet: bool,
}
