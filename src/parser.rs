use pest::{Parser, iterators::Pairs};
use pest_derive::Parser;

use crate::ast::RawElement;

#[derive(Parser)]
#[grammar = "src/tally.pest"]
pub struct TallyParser;

impl TallyParser {
    /// Split input into its comma-separated raw elements, untrimmed
    pub fn parse_elements<'a>(
        input: &'a str,
    ) -> Result<Vec<RawElement<'a>>, pest::error::Error<Rule>> {
        let mut pairs: Pairs<'a, Rule> = TallyParser::parse(Rule::list, input)?;
        let list = pairs.next().expect("parser returned no list rule");

        Ok(list
            .into_inner()
            .filter(|pair| pair.as_rule() == Rule::element)
            .map(|pair| RawElement::new(pair.as_str()))
            .collect())
    }
}
