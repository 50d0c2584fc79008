//! Scanner - splits source text into token strings
//!
//! Tokens are plain strings: parentheses and operators are always their
//! own token; any other character either starts a new token or merges
//! onto the previous one, which is how multi-digit numbers coalesce.

/// Split an expression string into an ordered sequence of tokens.
///
/// A `-` is pushed as its own token but still counts as a mergeable
/// predecessor for the character after it, so a digit immediately
/// following a `-` fuses into a signed numeric literal: `"-3"` becomes
/// one token. The flip side is that a binary minus must be surrounded by
/// spaces; `"30-3"` scans as `["30", "-3"]`, not `["30", "-", "3"]`.
///
/// # Example
/// ```
/// use symalg::tokenize;
///
/// let tokens = tokenize("(x * (-3 + 2))");
/// assert_eq!(tokens, ["(", "x", "*", "(", "-3", "+", "2", ")", ")"]);
/// ```
pub fn tokenize(input: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut last_char: Option<char> = None;

    for c in input.chars() {
        if matches!(c, '(' | ')' | '+' | '-' | '*' | '/') {
            tokens.push(c.to_string());
        } else if c != ' ' {
            let starts_new = matches!(last_char, None | Some(' ') | Some('('));
            match tokens.last_mut() {
                Some(last) if !starts_new => last.push(c),
                _ => tokens.push(c.to_string()),
            }
        }
        last_char = Some(c);
    }

    tokens
}
