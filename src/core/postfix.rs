//! Infix to postfix translation using the shunting-yard algorithm.
//!
//! Terms are single characters: `"12+3"` and `"1+23"` both translate to
//! `"123+"`. A `;` ends the expression and anything after it is ignored.

use crate::utils::error::{AlgoError, Result};

const OPERATORS: &[char] = &['+', '-', '*', '/', '%', '^', '(', ')', ';'];

fn is_operand(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

fn is_allowed(c: char) -> bool {
    is_operand(c) || OPERATORS.contains(&c)
}

fn precedence(op: char) -> u8 {
    match op {
        '+' | '-' => 1,
        '*' | '/' | '%' => 2,
        '^' => 3,
        _ => 0,
    }
}

fn is_right_associative(op: char) -> bool {
    op == '^'
}

/// Whether `top` must leave the stack before `incoming` is pushed.
fn pops_before(top: char, incoming: char) -> bool {
    if top == '(' {
        return false;
    }
    let (top_prec, incoming_prec) = (precedence(top), precedence(incoming));
    top_prec > incoming_prec || (top_prec == incoming_prec && !is_right_associative(incoming))
}

fn invalid(message: String) -> AlgoError {
    AlgoError::InvalidExpression { message }
}

/// Translates an infix expression into postfix notation.
///
/// Spaces are stripped first. The remaining text must be made only of ASCII
/// letters, digits and `+ - * / % ^ ( ) ;`.
pub fn infix_to_postfix(infix: &str) -> Result<String> {
    let expr: Vec<char> = infix.chars().filter(|&c| c != ' ').collect();
    let compact: String = expr.iter().collect();

    if expr.is_empty() || !expr.iter().all(|&c| is_allowed(c)) {
        return Err(invalid(format!("invalid infix expression: '{}'", compact)));
    }

    let mismatch = || AlgoError::ParenthesesMismatch {
        expression: compact.clone(),
    };

    let mut stack: Vec<char> = Vec::new();
    let mut postfix = String::with_capacity(expr.len());

    for (i, &c) in expr.iter().enumerate() {
        if is_operand(c) {
            match expr.get(i + 1) {
                Some(&next) if next.is_ascii_alphabetic() => {
                    return Err(invalid(format!(
                        "operands '{}' and '{}' without operator",
                        c, next
                    )));
                }
                Some('(') => {
                    return Err(invalid(format!(
                        "operand '{}' and '(' adjacent without operator",
                        c
                    )));
                }
                _ => {}
            }
            postfix.push(c);
            continue;
        }

        match c {
            ';' => break,
            '(' => stack.push(c),
            ')' => loop {
                match stack.pop() {
                    Some('(') => break,
                    Some(op) => postfix.push(op),
                    None => return Err(mismatch()),
                }
            },
            op => {
                while let Some(&top) = stack.last() {
                    if !pops_before(top, op) {
                        break;
                    }
                    postfix.push(top);
                    stack.pop();
                }
                stack.push(op);
            }
        }
    }

    while let Some(op) = stack.pop() {
        if op == '(' {
            return Err(mismatch());
        }
        postfix.push(op);
    }

    tracing::trace!("translated '{}' into '{}'", compact, postfix);
    Ok(postfix)
}
