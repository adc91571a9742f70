use serde_json::json;
use wide::{Signedness, WideInt};

use super::type_name;
use crate::args::Output;

pub fn limits<const N: usize, S: Signedness>(out: Output) -> String {
    let (min, max) = if out.hex {
        (format!("{:#x}", WideInt::<N, S>::MIN), format!("{:#x}", WideInt::<N, S>::MAX))
    } else {
        (WideInt::<N, S>::MIN.to_string(), WideInt::<N, S>::MAX.to_string())
    };

    if out.json {
        return json!({
            "type": type_name::<N, S>(),
            "bits": WideInt::<N, S>::BITS,
            "digits10": WideInt::<N, S>::DIGITS10,
            "min": min,
            "max": max,
        })
        .to_string();
    }

    format!(
        "type: {}\nbits: {}\ndigits10: {}\nmin: {min}\nmax: {max}",
        type_name::<N, S>(),
        WideInt::<N, S>::BITS,
        WideInt::<N, S>::DIGITS10,
    )
}
