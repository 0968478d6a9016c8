use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 言語別の表
    #[default]
    Table,
    Csv,
    Json,
}

/// `--read-failure`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum ReadFailure {
    /// 読めた行までを集計に使う
    #[default]
    Truncate,
    /// そのファイルを集計から外してエラーにする
    Discard,
}
