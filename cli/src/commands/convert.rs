use anyhow::Result;
use serde_json::json;
use wide::{Signedness, WideInt};

use super::{parse_operand, type_name};
use crate::args::Output;

/// Show `value` as decimal, two's-complement hex, the nearest `f64` and its
/// low 64 bits.
pub fn convert<const N: usize, S: Signedness>(value: &str, out: Output) -> Result<String> {
    let v: WideInt<N, S> = parse_operand(value)?;

    if out.json {
        return Ok(json!({
            "type": type_name::<N, S>(),
            "decimal": v,
            "hex": format!("{v:#x}"),
            "f64": v.to_f64(),
            "low64": v.as_u64(),
            "bits": v.bits(),
        })
        .to_string());
    }

    Ok(format!(
        "decimal: {v}\nhex: {v:#x}\nf64: {:e}\nlow64: {}\nbits: {}",
        v.to_f64(),
        v.as_u64(),
        v.bits(),
    ))
}
