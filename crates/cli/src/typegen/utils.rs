//! Identifier helpers shared by inference and emission.

use std::collections::HashSet;
use std::sync::LazyLock;

/// TypeScript reserved words that cannot be used as type names.
static TS_RESERVED_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "yield",
        "let",
        "static",
        "implements",
        "interface",
        "package",
        "private",
        "protected",
        "public",
        "await",
        "async",
    ]
    .into_iter()
    .collect()
});

/// Check if a property name needs quoting in an interface body.
///
/// Returns true if the name is empty, does not start with a letter,
/// underscore or dollar sign, or contains other characters.
fn needs_quoting(name: &str) -> bool {
    name.is_empty()
        || !name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        || !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Escape a string for use in a TypeScript string literal.
fn escape_ts_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Quote a property name if it is not a valid identifier.
pub fn quote_if_needed(name: &str) -> String {
    if needs_quoting(name) {
        format!("\"{}\"", escape_ts_string(name))
    } else {
        name.to_string()
    }
}

/// Derive a PascalCase type name from a property name.
///
/// Splits on `-`, `_`, `.` and spaces, capitalizes each part, strips any
/// remaining non-alphanumeric characters, prefixes an underscore when the
/// result starts with a digit and escapes reserved words. An empty result
/// falls back to `Value`.
pub fn pascal_type_name(name: &str) -> String {
    let mut result = String::new();
    for part in name.split(['-', '_', '.', ' ']) {
        let mut chars = part.chars().filter(|c| c.is_ascii_alphanumeric());
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.extend(chars);
        }
    }

    if result.is_empty() {
        return "Value".to_string();
    }

    if result.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        result = format!("_{result}");
    }

    if TS_RESERVED_WORDS.contains(result.as_str()) {
        result = format!("_{result}");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_if_needed() {
        assert_eq!(quote_if_needed("foo"), "foo");
        assert_eq!(quote_if_needed("_foo"), "_foo");
        assert_eq!(quote_if_needed("$foo"), "$foo");
        assert_eq!(quote_if_needed("foo123"), "foo123");
        assert_eq!(quote_if_needed("foo-bar"), "\"foo-bar\"");
        assert_eq!(quote_if_needed("foo.bar"), "\"foo.bar\"");
        assert_eq!(quote_if_needed("123"), "\"123\"");
        assert_eq!(quote_if_needed(""), "\"\"");
        assert_eq!(quote_if_needed("say \"hi\""), "\"say \\\"hi\\\"\"");
    }

    #[test]
    fn test_pascal_type_name() {
        assert_eq!(pascal_type_name("user"), "User");
        assert_eq!(pascal_type_name("user_name"), "UserName");
        assert_eq!(pascal_type_name("created-at"), "CreatedAt");
        assert_eq!(pascal_type_name("home.address"), "HomeAddress");
        assert_eq!(pascal_type_name("alreadyCamel"), "AlreadyCamel");
        assert_eq!(pascal_type_name("123abc"), "_123abc");
        assert_eq!(pascal_type_name("@!?"), "Value");
        assert_eq!(pascal_type_name(""), "Value");
    }
}
