//! `serde` support (feature `serde`, on by default).
//!
//! Human-readable formats carry the decimal string, so values of any width
//! survive JSON untouched; integers are accepted on input. Binary formats
//! carry the two's-complement bytes, least significant first.

use std::fmt;
use std::marker::PhantomData;

use ::serde::de::{self, Deserialize, Deserializer, Visitor};
use ::serde::ser::{Serialize, Serializer};

use crate::int::WideInt;
use crate::sign::Signedness;

impl<const N: usize, S: Signedness> Serialize for WideInt<N, S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            let bytes: Vec<u8> = self
                .to_le_limbs()
                .iter()
                .flat_map(|limb| limb.to_le_bytes())
                .collect();
            serializer.serialize_bytes(&bytes)
        }
    }
}

impl<'de, const N: usize, S: Signedness> Deserialize<'de> for WideInt<N, S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(TextVisitor::<N, S>(PhantomData))
        } else {
            deserializer.deserialize_bytes(BytesVisitor::<N, S>(PhantomData))
        }
    }
}

struct TextVisitor<const N: usize, S>(PhantomData<S>);

impl<'de, const N: usize, S: Signedness> Visitor<'de> for TextVisitor<N, S> {
    type Value = WideInt<N, S>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {}-bit integer as a string or number", WideInt::<N, S>::BITS)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        if v < 0 && !S::SIGNED {
            return Err(E::invalid_value(de::Unexpected::Signed(v), &self));
        }
        Ok(WideInt::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(WideInt::from(v))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Self::Value, E> {
        if v < 0 && !S::SIGNED {
            return Err(E::custom(format_args!("negative value {v} for an unsigned integer")));
        }
        Ok(WideInt::from(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
        Ok(WideInt::from(v))
    }
}

struct BytesVisitor<const N: usize, S>(PhantomData<S>);

impl<'de, const N: usize, S: Signedness> Visitor<'de> for BytesVisitor<N, S> {
    type Value = WideInt<N, S>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} little-endian bytes", N * 8)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        if v.len() != N * 8 {
            return Err(E::invalid_length(v.len(), &self));
        }
        let mut limbs = [0u64; N];
        for (limb, chunk) in limbs.iter_mut().zip(v.chunks_exact(8)) {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(chunk);
            *limb = u64::from_le_bytes(buf);
        }
        Ok(WideInt::from_le_limbs(limbs))
    }

    fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<Self::Value, E> {
        self.visit_bytes(&v)
    }
}
