//! Public API for the parser.

use crate::ast::StatechartDescriptor;
use crate::lexer::tokenize;
use crate::parser::combinators::Parser;
use crate::parser::error::ParseError;

/// Parse a statesketch source into a statechart descriptor.
///
/// Comments and line breaks only delimit lines, so they are dropped before
/// the grammar runs. The whole input must be a single root state
/// declaration; anything after it is an error.
pub fn parse(source: &str) -> Result<StatechartDescriptor, ParseError> {
    let tokens = tokenize(source)?;
    let significant: Vec<_> = tokens.into_iter().filter(|t| !t.is_trivia()).collect();
    // Failures at end of input have no token to point at; fall back to the
    // last one seen, or to the start of an empty source.
    let fallback = significant
        .last()
        .map(|token| (token.line, token.col))
        .unwrap_or((1, 1));
    let mut parser = Parser::new(significant);
    let root = parser
        .state_declaration()
        .map_err(|failure| ParseError::from_failure(failure, fallback))?;
    parser
        .end_of_input()
        .map_err(|failure| ParseError::from_failure(failure, fallback))?;
    Ok(StatechartDescriptor { root })
}
