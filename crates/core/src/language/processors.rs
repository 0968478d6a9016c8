//! 言語ファミリーごとの遷移表

pub mod c_style;
pub mod erlang_style;
pub mod go_style;

pub use c_style::{CFamily, CFamilyClassifier, CState};
pub use erlang_style::{ErlangClassifier, ErlangFamily, ErlangState};
pub use go_style::{GoClassifier, GoFamily};
