//! Dice notation parsing.
//!
//! Parses expressions like `2d6+3`, `d20`, `3d8-2` into a [`DiceExpression`].
//! A bare integer `N` is read as `1dN`. Bounds are not checked here - legal
//! ranges differ per tool, so each tool validates the parsed expression
//! against its own table.

use thiserror::Error;

/// A parsed dice expression: `count` dice of `sides` sides, plus `modifier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceExpression {
    /// Number of dice to roll.
    pub count: i64,
    /// Number of sides per die.
    pub sides: i64,
    /// Flat modifier added to the total.
    pub modifier: i64,
}

/// Errors produced while parsing dice notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    /// The expression was empty or whitespace.
    #[error("empty dice notation")]
    Empty,

    /// The dice count before the `d` was not an integer.
    #[error("invalid dice count '{0}'")]
    InvalidCount(String),

    /// The side count after the `d` was not an integer.
    #[error("invalid die sides '{0}'")]
    InvalidSides(String),

    /// The modifier suffix was not an integer.
    #[error("invalid modifier '{0}'")]
    InvalidModifier(String),
}

/// Parse a dice notation string into a [`DiceExpression`].
///
/// Grammar (case-insensitive): `[count]d<sides>[(+|-)modifier]`, or a bare
/// integer `N` meaning `1dN`. The modifier separator is found by checking
/// `+` before `-`, splitting at the first occurrence. Known limitation: a
/// mixed expression such as `1d6-2+1` splits at the `+`, leaving `1d6-2` as
/// the body, which then fails to parse as sides.
pub fn parse_notation(text: &str) -> Result<DiceExpression, NotationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(NotationError::Empty);
    }

    // Modifier suffix; `+` wins when both signs appear.
    let (body, modifier) = if let Some((left, raw)) = text.split_once('+') {
        (left, parse_modifier(raw)?)
    } else if let Some((left, raw)) = text.split_once('-') {
        (left, -parse_modifier(raw)?)
    } else {
        (text, 0)
    };

    // `XdY` form, or a bare integer meaning `1dY`. Components tolerate
    // surrounding whitespace, as in `1d6 + 2`.
    let (count, sides_str) = match body.split_once(['d', 'D']) {
        Some((left, right)) => {
            let left = left.trim();
            let count = if left.is_empty() {
                1
            } else {
                left.parse()
                    .map_err(|_| NotationError::InvalidCount(left.to_string()))?
            };
            (count, right.trim())
        }
        None => (1, body),
    };

    let sides = sides_str
        .parse()
        .map_err(|_| NotationError::InvalidSides(sides_str.to_string()))?;

    Ok(DiceExpression {
        count,
        sides,
        modifier,
    })
}

fn parse_modifier(raw: &str) -> Result<i64, NotationError> {
    raw.trim()
        .parse()
        .map_err(|_| NotationError::InvalidModifier(raw.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_notation() {
        let expr = parse_notation("2d6+3").unwrap();
        assert_eq!(expr.count, 2);
        assert_eq!(expr.sides, 6);
        assert_eq!(expr.modifier, 3);
    }

    #[test]
    fn test_parse_implicit_count() {
        let expr = parse_notation("d20").unwrap();
        assert_eq!(expr.count, 1);
        assert_eq!(expr.sides, 20);
        assert_eq!(expr.modifier, 0);
    }

    #[test]
    fn test_parse_bare_integer() {
        let expr = parse_notation("4").unwrap();
        assert_eq!(expr.count, 1);
        assert_eq!(expr.sides, 4);
        assert_eq!(expr.modifier, 0);
    }

    #[test]
    fn test_parse_negative_modifier() {
        let expr = parse_notation("3d8-2").unwrap();
        assert_eq!(expr.count, 3);
        assert_eq!(expr.sides, 8);
        assert_eq!(expr.modifier, -2);
    }

    #[test]
    fn test_parse_case_insensitive() {
        let expr = parse_notation("2D10+1").unwrap();
        assert_eq!(expr.count, 2);
        assert_eq!(expr.sides, 10);
        assert_eq!(expr.modifier, 1);
    }

    #[test]
    fn test_parse_whitespace() {
        let expr = parse_notation("  1d20  ").unwrap();
        assert_eq!(expr.count, 1);
        assert_eq!(expr.sides, 20);
    }

    #[test]
    fn test_parse_interior_whitespace() {
        let expr = parse_notation("1d6 + 2").unwrap();
        assert_eq!(expr.count, 1);
        assert_eq!(expr.sides, 6);
        assert_eq!(expr.modifier, 2);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_notation("abc").is_err());
        assert!(parse_notation("2d").is_err());
        assert!(parse_notation("d").is_err());
        assert!(parse_notation("").is_err());
        assert!(parse_notation("   ").is_err());
        assert!(parse_notation("x2d6").is_err());
    }

    #[test]
    fn test_parse_mixed_signs_fails() {
        // `+` is split first, leaving `1d6-2` as the body.
        assert!(parse_notation("1d6-2+1").is_err());
    }

    #[test]
    fn test_parse_modifier_errors() {
        assert_eq!(
            parse_notation("1d6+x"),
            Err(NotationError::InvalidModifier("x".to_string()))
        );
        assert_eq!(
            parse_notation("2d6+"),
            Err(NotationError::InvalidModifier(String::new()))
        );
    }

    #[test]
    fn test_parse_leading_minus_is_not_count() {
        // `-1d6` reads as a `-` modifier split with an empty body.
        assert!(parse_notation("-1d6").is_err());
    }
}
