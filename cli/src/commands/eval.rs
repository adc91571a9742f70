use std::cmp::Ordering;

use anyhow::{bail, Context, Result};
use serde_json::json;
use wide::{Signedness, WideInt};

use super::{parse_operand, render};
use crate::args::Output;

/// Evaluate `lhs op rhs` in `WideInt<N, S>`.
///
/// Arithmetic wraps. Shift counts are plain `i64`s: a zero count leaves the
/// value unchanged, while negative counts and counts past the width clear it
/// (or fill with the sign bit on `>>`).
pub fn eval<const N: usize, S: Signedness>(
    lhs: &str,
    op: &str,
    rhs: &str,
    out: Output,
) -> Result<String> {
    let a: WideInt<N, S> = parse_operand(lhs)?;

    if op == "<<" || op == ">>" {
        let n: i64 = rhs
            .parse()
            .with_context(|| format!("invalid shift count {rhs:?}"))?;
        let v = if op == "<<" { a << n } else { a >> n };
        return Ok(render(v, out));
    }

    let b: WideInt<N, S> = parse_operand(rhs)?;
    let v = match op {
        "+" => a.wrapping_add(b),
        "-" => a.wrapping_sub(b),
        "*" => a.wrapping_mul(b),
        "/" | "%" => {
            let (q, r) = a
                .try_div_rem(b)
                .with_context(|| format!("cannot evaluate {lhs} {op} {rhs}"))?;
            if op == "/" {
                q
            } else {
                r
            }
        }
        "&" => a.bit_and(b),
        "|" => a.bit_or(b),
        "^" => a.bit_xor(b),
        _ => return compare(a.cmp(&b), op, out),
    };
    Ok(render(v, out))
}

fn compare(ord: Ordering, op: &str, out: Output) -> Result<String> {
    let holds = match op {
        "==" => ord == Ordering::Equal,
        "!=" => ord != Ordering::Equal,
        "<" => ord == Ordering::Less,
        "<=" => ord != Ordering::Greater,
        ">" => ord == Ordering::Greater,
        ">=" => ord != Ordering::Less,
        _ => bail!("unknown operator {op:?}"),
    };
    if out.json {
        Ok(json!({ "value": holds }).to_string())
    } else {
        Ok(holds.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wide::{Signed, UInt256, Unsigned};

    fn eval_256(lhs: &str, op: &str, rhs: &str) -> Result<String> {
        eval::<4, Signed>(lhs, op, rhs, Output::default())
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(eval_256("-5", "+", "2").unwrap(), "-3");
        assert_eq!(eval_256("7", "/", "-2").unwrap(), "-3");
        assert_eq!(eval_256("-7", "%", "2").unwrap(), "-1");
        assert_eq!(eval_256("0x10", "*", "3").unwrap(), "48");
    }

    #[test]
    fn test_shift_counts() {
        assert_eq!(
            eval_256("1", "<<", "200").unwrap(),
            "1606938044258990275541962092341162602522202993782792835301376"
        );
        assert_eq!(eval_256("-8", ">>", "1").unwrap(), "-4");
        assert_eq!(eval_256("5", "<<", "0").unwrap(), "5");
        assert_eq!(eval_256("5", "<<", "-3").unwrap(), "0");
        assert_eq!(eval_256("-8", ">>", "-1").unwrap(), "-1");
        assert!(eval_256("5", "<<", "x").is_err());
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(eval_256("-1", "<", "0").unwrap(), "true");
        assert_eq!(eval_256("3", ">=", "3").unwrap(), "true");
        assert_eq!(eval_256("3", "!=", "3").unwrap(), "false");
    }

    #[test]
    fn test_unsigned_rejects_minus() {
        let out = Output::default();
        assert_eq!(eval::<4, Unsigned>("0", "-", "1", out).unwrap(), UInt256::MAX.to_string());
        assert!(eval::<4, Unsigned>("-1", "+", "1", out).is_err());
    }

    #[test]
    fn test_unknown_operator() {
        let err = eval_256("1", "**", "2").unwrap_err();
        assert!(err.to_string().contains("unknown operator"));
    }
}
