use thiserror::Error;

use crate::data::{Fact, Goal, KnowledgeBase, Rule, Term};

/// Error raised while parsing program text.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("parse error at {line}:{column}: {message}")]
pub struct ParseError {
    /// 1-based source line of the offending statement.
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl ParseError {
    fn new(line: usize, message: impl Into<String>) -> Self {
        Self { line, column: 0, message: message.into() }
    }
}

/// Top-level parse result: registered clauses plus the `?-` queries, each
/// in source order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    pub facts: Vec<Fact>,
    pub rules: Vec<Rule>,
    pub queries: Vec<Goal>,
}

impl Program {
    /// Populate a fresh knowledge base from the program's clauses and hand
    /// back the queries to run against it.
    pub fn into_knowledge_base(self) -> (KnowledgeBase, Vec<Goal>) {
        let mut kb = KnowledgeBase::new();
        for fact in self.facts {
            kb.add_fact(fact.predicate, fact.args);
        }
        for rule in self.rules {
            kb.add_rule(rule.head, rule.body);
        }
        (kb, self.queries)
    }
}

/// Parser entry point.
///
/// The accepted syntax is one statement per `.`-terminated run of lines:
///
/// ```text
/// % facts, rules, and queries
/// parent(alice, bob).
/// grandparent(X, Z) :- parent(X, Y), parent(Y, Z).
/// ?- grandparent(alice, Who).
/// ```
///
/// Identifiers starting with an uppercase letter or `_` are variables;
/// lowercase-initial bare words are symbol constants and integer literals
/// are integer constants. `%` starts a comment running to end of line.
#[derive(Clone, Debug, Default)]
pub struct Parser;

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse_str(&self, source: &str) -> Result<Program, ParseError> {
        let mut program = Program::default();
        let mut buffer = String::new();
        let mut start_line = 0usize;
        let mut depth = 0i32;

        for (line_idx, raw_line) in source.lines().enumerate() {
            let line = strip_comment(raw_line).trim().to_string();
            if line.is_empty() {
                continue;
            }
            if buffer.is_empty() {
                start_line = line_idx + 1;
            } else {
                buffer.push(' ');
            }
            for ch in line.chars() {
                match ch {
                    '(' => depth += 1,
                    ')' => depth -= 1,
                    _ => {}
                }
            }
            buffer.push_str(&line);

            if depth == 0 && buffer.ends_with('.') {
                let statement = buffer.trim_end_matches('.').trim().to_string();
                if !statement.is_empty() {
                    parse_statement(&statement, start_line, &mut program)?;
                }
                buffer.clear();
            }
        }

        if !buffer.trim().is_empty() {
            return Err(ParseError::new(
                start_line,
                format!("unterminated statement: {}", buffer.trim()),
            ));
        }
        Ok(program)
    }
}

fn parse_statement(
    statement: &str,
    line: usize,
    program: &mut Program,
) -> Result<(), ParseError> {
    if let Some(rest) = statement.strip_prefix("?-") {
        let goals = split_top_level(rest, ',');
        if goals.len() != 1 {
            return Err(ParseError::new(
                line,
                "a query takes exactly one goal",
            ));
        }
        program.queries.push(parse_goal(goals[0], line)?);
        return Ok(());
    }

    if let Some(split_at) = find_top_level(statement, ":-") {
        let head_text = &statement[..split_at];
        let body_text = &statement[split_at + 2..];
        let head = parse_goal(head_text, line)?;
        let mut body = Vec::new();
        for goal_text in split_top_level(body_text, ',') {
            body.push(parse_goal(goal_text, line)?);
        }
        if body.is_empty() {
            return Err(ParseError::new(line, "rule body is empty"));
        }
        program.rules.push(Rule::new(head, body));
        return Ok(());
    }

    let goal = parse_goal(statement, line)?;
    program.facts.push(Fact::new(goal.predicate, goal.args));
    Ok(())
}

fn parse_goal(text: &str, line: usize) -> Result<Goal, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::new(line, "empty goal"));
    }

    let Some(open_paren) = text.find('(') else {
        let predicate = parse_predicate_name(text, line)?;
        return Ok(Goal::new(predicate, vec![]));
    };

    if !text.ends_with(')') {
        return Err(ParseError::new(
            line,
            format!("expected `)` to close `{}`", text),
        ));
    }
    let predicate = parse_predicate_name(&text[..open_paren], line)?;
    let args_text = &text[open_paren + 1..text.len() - 1];
    let mut args = Vec::new();
    for token in split_top_level(args_text, ',') {
        args.push(parse_term(token, line)?);
    }
    Ok(Goal::new(predicate, args))
}

fn parse_predicate_name(text: &str, line: usize) -> Result<String, ParseError> {
    let name = text.trim();
    let valid = !name.is_empty()
        && name.starts_with(|c: char| c.is_ascii_lowercase())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid {
        return Err(ParseError::new(
            line,
            format!("invalid predicate name `{}`", name),
        ));
    }
    Ok(name.to_string())
}

fn parse_term(token: &str, line: usize) -> Result<Term, ParseError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ParseError::new(line, "empty argument"));
    }

    if let Ok(value) = token.parse::<i64>() {
        return Ok(Term::int(value));
    }

    let identifier = token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !identifier {
        return Err(ParseError::new(
            line,
            format!("unsupported token `{}`", token),
        ));
    }

    if token.starts_with(|c: char| c.is_ascii_uppercase() || c == '_') {
        Ok(Term::var(token))
    } else if token.starts_with(|c: char| c.is_ascii_lowercase()) {
        Ok(Term::sym(token))
    } else {
        Err(ParseError::new(
            line,
            format!("unsupported token `{}`", token),
        ))
    }
}

/// Split `text` at every top-level (paren depth zero) occurrence of `sep`,
/// dropping empty pieces produced by leading/trailing separators.
fn split_top_level(text: &str, sep: char) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut depth = 0i32;
    let mut start = 0usize;
    for (index, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth -= 1,
            c if c == sep && depth == 0 => {
                pieces.push(&text[start..index]);
                start = index + sep.len_utf8();
            }
            _ => {}
        }
    }
    pieces.push(&text[start..]);
    pieces.retain(|piece| !piece.trim().is_empty());
    pieces
}

/// Byte offset of the first top-level occurrence of `needle`, if any.
fn find_top_level(text: &str, needle: &str) -> Option<usize> {
    let mut depth = 0i32;
    for (index, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
        if depth == 0 && text[index..].starts_with(needle) {
            return Some(index);
        }
    }
    None
}

fn strip_comment(line: &str) -> &str {
    match line.find('%') {
        Some(index) => &line[..index],
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::{Parser, Program};
    use crate::data::Term;

    fn parse(source: &str) -> Program {
        Parser::new().parse_str(source).expect("parse failed")
    }

    #[test]
    fn parse_facts_rules_and_queries() {
        let program = parse(
            r#"
            % a small family tree
            parent(alice, bob).
            parent(bob, carol).
            grandparent(X, Z) :- parent(X, Y), parent(Y, Z).
            ?- grandparent(alice, Who).
            "#,
        );
        assert_eq!(program.facts.len(), 2);
        assert_eq!(program.rules.len(), 1);
        assert_eq!(program.queries.len(), 1);
        assert_eq!(program.facts[0].to_string(), "parent(alice, bob)");
        assert_eq!(
            program.rules[0].to_string(),
            "grandparent(X, Z) :- parent(X, Y), parent(Y, Z)"
        );
        assert_eq!(program.queries[0].to_string(), "grandparent(alice, Who)");
    }

    #[test]
    fn term_classification() {
        let program = parse("likes(Alice, _thing, tea, 42, -7).");
        let args = &program.facts[0].args;
        assert_eq!(args[0], Term::var("Alice"));
        assert_eq!(args[1], Term::var("_thing"));
        assert_eq!(args[2], Term::sym("tea"));
        assert_eq!(args[3], Term::int(42));
        assert_eq!(args[4], Term::int(-7));
    }

    #[test]
    fn zero_arity_statement() {
        let program = parse("halted.\n?- halted.");
        assert_eq!(program.facts[0].to_string(), "halted");
        assert!(program.facts[0].args.is_empty());
        assert_eq!(program.queries[0].to_string(), "halted");
    }

    #[test]
    fn statement_spanning_lines() {
        let program = parse("grandparent(X, Z) :-\n  parent(X, Y),\n  parent(Y, Z).");
        assert_eq!(program.rules.len(), 1);
        assert_eq!(program.rules[0].body.len(), 2);
    }

    #[test]
    fn comments_are_stripped() {
        let program = parse("parent(a, b). % trailing\n% whole-line comment\n");
        assert_eq!(program.facts.len(), 1);
    }

    #[test]
    fn errors_carry_the_statement_line() {
        let err = Parser::new()
            .parse_str("parent(a, b).\nBadHead(x).")
            .expect_err("uppercase predicate must be rejected");
        assert_eq!(err.line, 2);
        assert!(err.message.contains("invalid predicate name"));
    }

    #[test]
    fn unterminated_statement_is_rejected() {
        let err = Parser::new()
            .parse_str("parent(a, b)")
            .expect_err("missing terminating dot");
        assert!(err.message.contains("unterminated"));
    }

    #[test]
    fn conjunctive_query_is_rejected() {
        let err = Parser::new()
            .parse_str("?- parent(a, X), parent(X, Y).")
            .expect_err("queries take one goal");
        assert!(err.message.contains("exactly one goal"));
    }

    #[test]
    fn empty_rule_body_is_rejected() {
        let err = Parser::new()
            .parse_str("p(X) :- .")
            .expect_err("empty body");
        assert!(err.message.contains("rule body is empty"));
    }
}
