//! 拡張子から言語タグへの対応

/// Map a file extension (without the dot) to a registry tag.
///
/// Matching ignores ASCII case. Unknown extensions yield `None`.
#[must_use]
pub fn tag_for_extension(ext: &str) -> Option<&'static str> {
    let tag = match ext.to_ascii_lowercase().as_str() {
        "go" => "go",
        "c" | "h" => "c",
        "cpp" | "cc" | "cxx" | "c++" | "hpp" | "hh" | "hxx" | "h++" => "cpp",
        "java" => "java",
        "erl" | "hrl" => "erlang",
        _ => return None,
    };
    Some(tag)
}
