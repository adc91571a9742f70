pub mod convert;
pub mod eval;
pub mod limits;

use anyhow::{Context, Result};
use serde_json::json;
use wide::{Signedness, WideInt};

use crate::args::Output;

/// `Int256`, `UInt1024`, ...
pub fn type_name<const N: usize, S: Signedness>() -> String {
    format!("{}{}", S::NAME, WideInt::<N, S>::BITS)
}

/// Parse an operand as decimal, or hex with a `0x` prefix.
pub fn parse_operand<const N: usize, S: Signedness>(text: &str) -> Result<WideInt<N, S>> {
    text.parse()
        .with_context(|| format!("invalid {} operand {text:?}", type_name::<N, S>()))
}

/// Render a single integer result.
pub fn render<const N: usize, S: Signedness>(v: WideInt<N, S>, out: Output) -> String {
    let text = if out.hex {
        format!("{v:#x}")
    } else {
        v.to_string()
    };
    if out.json {
        json!({ "type": type_name::<N, S>(), "value": text }).to_string()
    } else {
        text
    }
}
