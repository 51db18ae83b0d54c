//! Natural-language arithmetic evaluation.
//!
//! The evaluator takes a free-text expression like
//! `"add 10 to the average of paris and london"` and runs it through a fixed
//! pipeline: context substitution → lexicon normalization → tokenization →
//! two-stack (shunting-yard) evaluation. Malformed input never fails; the
//! evaluator degrades to the best partial result, and an empty operand stack
//! yields `0`.

use crate::context::{Context, Value};
use crate::tools::lexicon;
use crate::tools::Tool;
use crate::types::{Answer, AppError, Result, ToolArgs};
use async_trait::async_trait;

/// A lexical token of a normalized expression.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Operator(char),
    Open,
    Close,
}

/// Scans `expr` left to right into numbers, operator symbols, and
/// parentheses. Unrecognized characters are silently dropped so garbled
/// input degrades instead of erroring.
fn tokenize(expr: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = expr.chars().peekable();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            let mut literal = String::new();
            while let Some(&d) = chars.peek() {
                if d.is_ascii_digit() {
                    literal.push(d);
                    chars.next();
                } else {
                    break;
                }
            }
            if chars.peek() == Some(&'.') {
                literal.push('.');
                chars.next();
                while let Some(&d) = chars.peek() {
                    if d.is_ascii_digit() {
                        literal.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
            }
            if let Ok(n) = literal.parse::<f64>() {
                tokens.push(Token::Number(n));
            }
        } else {
            match c {
                '+' | '-' | '*' | '/' | '%' | 'A' => tokens.push(Token::Operator(c)),
                '(' => tokens.push(Token::Open),
                ')' => tokens.push(Token::Close),
                _ => {}
            }
            chars.next();
        }
    }
    tokens
}

/// Binding strength; `(` never blocks anything, so unknowns map to 0.
fn precedence(op: char) -> u8 {
    match op {
        '+' | '-' | 'A' => 1,
        '*' | '/' | '%' => 2,
        _ => 0,
    }
}

/// Applies a binary operator.
///
/// `%` is "a percent of b", not a modulo; `A` is the arithmetic mean.
/// Division by zero yields signed infinity keyed off the dividend instead of
/// erroring. An operator outside the lexicon is an internal defect.
fn apply(a: f64, b: f64, op: char) -> Result<f64> {
    match op {
        '+' => Ok(a + b),
        '-' => Ok(a - b),
        '*' => Ok(a * b),
        '/' => {
            if b == 0.0 {
                Ok(if a >= 0.0 {
                    f64::INFINITY
                } else {
                    f64::NEG_INFINITY
                })
            } else {
                Ok(a / b)
            }
        }
        '%' => Ok((a / 100.0) * b),
        'A' => Ok((a + b) / 2.0),
        other => Err(AppError::UnsupportedOperator(other)),
    }
}

/// Pops the top operator and applies it to the top two operands.
///
/// Returns `Ok(false)` when application is impossible, after first trying
/// unary-minus recovery: a pending `-` with a single operand negates it in
/// place instead of consuming an operand pair.
fn apply_top(values: &mut Vec<f64>, ops: &mut Vec<char>) -> Result<bool> {
    let Some(&op) = ops.last() else {
        return Ok(false);
    };
    if values.len() < 2 {
        if op == '-' {
            if let Some(v) = values.pop() {
                values.push(-v);
                ops.pop();
                return Ok(true);
            }
        }
        return Ok(false);
    }
    ops.pop();
    // values.len() >= 2 checked above
    let b = values.pop().unwrap_or(0.0);
    let a = values.pop().unwrap_or(0.0);
    values.push(apply(a, b, op)?);
    Ok(true)
}

/// Evaluates a natural-language arithmetic expression against the context.
///
/// Pipeline, strictly in this order: substitute context values into the raw
/// text, normalize operator phrases to symbols, tokenize, then evaluate with
/// a two-stack algorithm. The result is recorded back into the context under
/// the normalized expression text so later calls in the same query can
/// reference the computation literally.
///
/// The only error path is [`AppError::UnsupportedOperator`], unreachable
/// through the fixed lexicon; everything else degrades to a value.
pub fn evaluate(expr: &str, context: &mut Context) -> Result<f64> {
    let substituted = context.substitute(expr);
    let normalized = lexicon::normalize(&substituted);
    let tokens = tokenize(&normalized);

    let mut values: Vec<f64> = Vec::new();
    let mut ops: Vec<char> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(n) => values.push(n),
            Token::Open => ops.push('('),
            Token::Close => {
                while ops.last().is_some_and(|&top| top != '(') {
                    if !apply_top(&mut values, &mut ops)? {
                        break;
                    }
                }
                if ops.last() == Some(&'(') {
                    ops.pop();
                }
            }
            Token::Operator(op) => {
                while ops
                    .last()
                    .is_some_and(|&top| top != '(' && precedence(top) >= precedence(op))
                {
                    if !apply_top(&mut values, &mut ops)? {
                        break;
                    }
                }
                ops.push(op);
            }
        }
    }

    while !ops.is_empty() {
        if !apply_top(&mut values, &mut ops)? {
            break;
        }
    }

    let result = values.last().copied().unwrap_or(0.0);
    context.insert(normalized, Value::Number(result));
    Ok(result)
}

/// Tool wrapper around [`evaluate`].
pub struct Calculator;

#[async_trait]
impl Tool for Calculator {
    fn name(&self) -> &str {
        "calculator"
    }

    fn description(&self) -> &str {
        "Evaluate natural-language arithmetic expressions"
    }

    async fn execute(&self, args: &ToolArgs, context: &mut Context) -> Result<Answer> {
        let expr = args.get("expr").map(String::as_str).unwrap_or_default();
        let result = evaluate(expr, context)?;
        Ok(Answer::Number(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(expr: &str) -> f64 {
        evaluate(expr, &mut Context::new()).unwrap()
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("2 plus 3 times 4"), 14.0);
        assert_eq!(eval("(2 plus 3) times 4"), 20.0);
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(eval("-5 plus -10"), -15.0);
        assert_eq!(eval("-7"), -7.0);
    }

    #[test]
    fn test_percent_is_percent_of() {
        assert_eq!(eval("10 percent of 50"), 5.0);
        assert_eq!(eval("50 % 10"), 5.0);
    }

    #[test]
    fn test_average() {
        assert_eq!(eval("average of 4 and 6"), 5.0);
    }

    #[test]
    fn test_division_by_zero_is_signed_infinity() {
        assert_eq!(eval("10 divided by 0"), f64::INFINITY);
        assert_eq!(eval("-10 divided by 0"), f64::NEG_INFINITY);
        assert_eq!(eval("0 divided by 0"), f64::INFINITY);
    }

    #[test]
    fn test_empty_and_garbled_input_degrade() {
        assert_eq!(eval(""), 0.0);
        assert_eq!(eval("no numbers here at all?!"), 0.0);
        // dangling operator: best partial result
        assert_eq!(eval("5 plus"), 5.0);
    }

    #[test]
    fn test_context_substitution() {
        let mut ctx = Context::new();
        ctx.insert("paris", 18.0);
        ctx.insert("london", 17.0);
        let result = evaluate("add 10 to the average of paris and london", &mut ctx).unwrap();
        assert_eq!(result, 27.5);
    }

    #[test]
    fn test_result_is_recorded_under_normalized_expression() {
        let mut ctx = Context::new();
        evaluate("2 plus 3", &mut ctx).unwrap();
        assert_eq!(ctx.get("2 + 3"), Some(&Value::Number(5.0)));
    }

    #[test]
    fn test_large_chained_expression() {
        let expr = vec!["1"; 10_000].join(" plus ");
        assert_eq!(eval(&expr), 10_000.0);
    }

    #[tokio::test]
    async fn test_calculator_tool() {
        let mut ctx = Context::new();
        let mut args = ToolArgs::new();
        args.insert("expr".to_string(), "2 plus 2".to_string());
        let answer = Calculator.execute(&args, &mut ctx).await.unwrap();
        assert_eq!(answer, Answer::Number(4.0));
    }
}
