use nom::{
    bytes::complete::{tag, take_while1},
    character::complete::digit1,
    combinator::map,
    sequence::tuple,
    IResult,
};

use super::Rule;

pub type RuleResult<'a, T> = IResult<&'a str, T, nom::error::Error<&'a str>>;

/// Letters allowed in a suffix or replacement: the Cyrillic range а-я in
/// either case.
pub fn is_rule_letter(c: char) -> bool {
    matches!(c, 'а'..='я' | 'А'..='Я')
}

fn word(input: &str) -> RuleResult<&str> {
    take_while1(is_rule_letter)(input)
}

fn space(input: &str) -> RuleResult<&str> {
    take_while1(char::is_whitespace)(input)
}

/// Counts too large for `u64` saturate rather than rejecting the rule.
fn frequency(input: &str) -> RuleResult<u64> {
    map(digit1, |digits: &str| digits.parse::<u64>().unwrap_or(u64::MAX))(input)
}

/// `<suffix> ==> <replacement> <frequency>`, anchored at the start of the
/// input. Anything after the frequency digits is left unconsumed.
pub fn rule(input: &str) -> RuleResult<Rule> {
    let (rest, (suffix, _, _, _, replacement, _, frequency)) =
        tuple((word, space, tag("==>"), space, word, space, frequency))(input)?;

    Ok((rest, Rule::new(suffix, replacement, frequency)))
}

/// Parses one line of a rule source. Surrounding whitespace is ignored and
/// lines that do not match the rule grammar yield `None`.
pub fn parse_rule_line(line: &str) -> Option<Rule> {
    rule(line.trim()).ok().map(|(_, rule)| rule)
}
