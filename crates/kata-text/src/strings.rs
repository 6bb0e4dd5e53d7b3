//! String utilities.

/// Reverse `s` by Unicode scalar value.
///
/// `"The quick brown fox"` becomes `"xof nworb kciuq ehT"`.
#[must_use]
pub fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}

/// Closing bracket matching an opening one.
const fn closer(open: char) -> Option<char> {
    match open {
        '[' => Some(']'),
        '(' => Some(')'),
        '{' => Some('}'),
        '<' => Some('>'),
        _ => None,
    }
}

const fn is_closer(c: char) -> bool {
    matches!(c, ']' | ')' | '}' | '>')
}

/// `true` if every `[]`, `()`, `{}` and `<>` bracket in `s` is closed in
/// the right order. Other characters are ignored.
///
/// | input | result |
/// |---|---|
/// | `""` | true |
/// | `"[]"`, `"{}"`, `"()"` | true |
/// | `"[[]"` | false |
/// | `"]["` | false |
/// | `"[[][][[]]]"` | true |
/// | `"[[][]]["` | false |
/// | `"{)"` | false |
/// | `"{[(<{[]}>)]}"` | true |
#[must_use]
pub fn is_brackets_balanced(s: &str) -> bool {
    let mut expected = Vec::new();
    for c in s.chars() {
        if let Some(close) = closer(c) {
            expected.push(close);
        } else if is_closer(c) && expected.pop() != Some(c) {
            return false;
        }
    }
    expected.is_empty()
}

/// The longest directory prefix shared by every path, including its
/// trailing `/`. Returns `""` when the paths share no directory (or there
/// are none).
///
/// | paths | result |
/// |---|---|
/// | `/web/images/image1.png`, `/web/images/image2.png` | `/web/images/` |
/// | `/web/assets/style.css`, `/web/scripts/app.js`, `home/setting.conf` | (empty) |
/// | `/web/assets/style.css`, `/.bin/mocha`, `/read.me` | `/` |
/// | `/web/favicon.ico`, `/web-scripts/dump`, `/webalizer/logs` | `/` |
#[must_use]
pub fn common_directory_path(paths: &[&str]) -> String {
    let Some((first, rest)) = paths.split_first() else {
        return String::new();
    };

    // Byte length of the common prefix, kept on a char boundary.
    let prefix_len = rest.iter().fold(first.len(), |len, path| {
        first[..len]
            .char_indices()
            .zip(path.chars())
            .find(|&((_, a), b)| a != b)
            .map_or_else(|| len.min(path.len()), |((index, _), _)| index)
    });

    let prefix = &first[..prefix_len];
    prefix
        .rfind('/')
        .map_or_else(String::new, |slash| prefix[..=slash].to_string())
}
