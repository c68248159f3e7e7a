//! Balanced brace groups
//!
//! A group is `{` followed by any mix of non-brace text and nested groups,
//! closed by the matching `}`. The parser yields the content with the outer
//! pair removed; nested groups keep their braces. `{a{b}c}` yields `a{b}c`.

use chumsky::prelude::*;

use super::ParserError;

/// Parse one balanced group, returning its content without the outer braces.
///
/// Nesting depth is unbounded and the content may be empty.
pub(crate) fn group() -> impl Parser<char, String, Error = ParserError> + Clone {
    recursive(|group| {
        let text = none_of("{}").repeated().at_least(1).collect::<String>();
        let nested = group.map(|inner: String| format!("{{{}}}", inner));

        text.or(nested)
            .repeated()
            .collect::<String>()
            .delimited_by(just('{'), just('}'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_group(input: &str) -> Result<String, Vec<ParserError>> {
        group().then_ignore(end()).parse(input)
    }

    #[test]
    fn test_flat_group() {
        assert_eq!(parse_group("{cpu}").unwrap(), "cpu");
    }

    #[test]
    fn test_empty_group() {
        assert_eq!(parse_group("{}").unwrap(), "");
    }

    #[test]
    fn test_nested_group_keeps_inner_braces() {
        assert_eq!(parse_group("{A{B}C}").unwrap(), "A{B}C");
    }

    #[test]
    fn test_deeply_nested_group() {
        assert_eq!(parse_group("{a{b{c{d}}}e}").unwrap(), "a{b{c{d}}}e");
    }

    #[test]
    fn test_adjacent_nested_groups() {
        assert_eq!(parse_group("{{x}{y}}").unwrap(), "{x}{y}");
    }

    #[test]
    fn test_group_stops_at_matching_brace() {
        let parser = group().then(any().repeated().collect::<String>());
        let (content, rest) = parser.parse("{a}{b}").unwrap();
        assert_eq!(content, "a");
        assert_eq!(rest, "{b}");
    }

    #[test]
    fn test_unterminated_group_fails() {
        assert!(parse_group("{cpu").is_err());
        assert!(parse_group("{a{b}").is_err());
    }

    #[test]
    fn test_missing_open_brace_fails() {
        assert!(parse_group("cpu}").is_err());
    }
}
