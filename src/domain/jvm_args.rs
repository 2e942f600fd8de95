//! Splitting of free-form JVM argument strings.

const QUOTE: char = '"';

/// Split a raw argument string into discrete runtime arguments.
///
/// Whitespace separates arguments, except inside a double-quoted span, whose
/// words are rejoined with single spaces and whose enclosing quotes are
/// dropped. Embedded quotes cannot be escaped. A quoted span that is still
/// open when the input ends is discarded.
pub fn tokenize(raw: &str) -> Vec<String> {
    let mut arguments = Vec::new();
    let mut open: Option<String> = None;

    for token in raw.split_whitespace() {
        match open.take() {
            Some(mut argument) => {
                argument.push(' ');
                if let Some(head) = token.strip_suffix(QUOTE) {
                    argument.push_str(head);
                    arguments.push(argument);
                } else {
                    argument.push_str(token);
                    open = Some(argument);
                }
            }
            None => match opening_quote(token) {
                Some(started) => open = Some(started),
                None => arguments.push(token.to_string()),
            },
        }
    }

    arguments
}

/// Start a quoted argument if `token` opens one.
///
/// A leading quote always opens, even when the token also ends with one; the
/// closing quote is only looked for in later tokens. A token that carries an
/// unbalanced quote after a prefix (`-Dname="hello`) opens too, unless that
/// quote is its last character (`-Dx=a"`).
fn opening_quote(token: &str) -> Option<String> {
    if let Some(rest) = token.strip_prefix(QUOTE) {
        return Some(rest.to_string());
    }

    let quotes = token.matches(QUOTE).count();
    if quotes % 2 == 0 {
        return None;
    }

    let at = token.find(QUOTE)?;
    if at + QUOTE.len_utf8() == token.len() {
        return None;
    }
    let mut started = String::with_capacity(token.len() - 1);
    started.push_str(&token[..at]);
    started.push_str(&token[at + 1..]);
    Some(started)
}
