//! Raw file bytes <-> code units.

use anyhow::{bail, Result};
use unibase::CodeUnit;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Endian {
    #[default]
    Le,
    Be,
}

impl Endian {
    pub fn as_str(self) -> &'static str {
        match self {
            Endian::Le => "le",
            Endian::Be => "be",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "le" | "little" => Some(Endian::Le),
            "be" | "big" => Some(Endian::Be),
            _ => None,
        }
    }
}

/// clap value parser for `--endian`.
pub fn parse_endian(s: &str) -> Result<Endian, String> {
    Endian::parse(s).ok_or_else(|| format!("unknown byte order {s:?} (expected le or be)"))
}

/// A code unit with a fixed on-disk width.
pub trait WireUnit: CodeUnit {
    const WIDTH: usize;

    fn from_bytes(chunk: &[u8], endian: Endian) -> Self;

    fn write_bytes(self, endian: Endian, out: &mut Vec<u8>);
}

impl WireUnit for u8 {
    const WIDTH: usize = 1;

    fn from_bytes(chunk: &[u8], _endian: Endian) -> Self {
        chunk[0]
    }

    fn write_bytes(self, _endian: Endian, out: &mut Vec<u8>) {
        out.push(self);
    }
}

macro_rules! impl_wire_unit {
    ($t:ty, $n:literal) => {
        impl WireUnit for $t {
            const WIDTH: usize = $n;

            fn from_bytes(chunk: &[u8], endian: Endian) -> Self {
                let mut raw = [0u8; $n];
                raw.copy_from_slice(chunk);
                match endian {
                    Endian::Le => <$t>::from_le_bytes(raw),
                    Endian::Be => <$t>::from_be_bytes(raw),
                }
            }

            fn write_bytes(self, endian: Endian, out: &mut Vec<u8>) {
                match endian {
                    Endian::Le => out.extend_from_slice(&self.to_le_bytes()),
                    Endian::Be => out.extend_from_slice(&self.to_be_bytes()),
                }
            }
        }
    };
}

impl_wire_unit!(u16, 2);
impl_wire_unit!(u32, 4);

pub fn decode_units<T: WireUnit>(bytes: &[u8], endian: Endian) -> Result<Vec<T>> {
    if bytes.len() % T::WIDTH != 0 {
        bail!(
            "input length {} is not a multiple of the {}-byte code unit",
            bytes.len(),
            T::WIDTH
        );
    }
    Ok(bytes
        .chunks_exact(T::WIDTH)
        .map(|chunk| T::from_bytes(chunk, endian))
        .collect())
}

pub fn encode_units<T: WireUnit>(units: &[T], endian: Endian) -> Vec<u8> {
    let mut out = Vec::with_capacity(units.len() * T::WIDTH);
    for unit in units {
        unit.write_bytes(endian, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_order_is_respected() {
        let le: Vec<u16> = decode_units(&[0x3D, 0xD8, 0x00, 0xDE], Endian::Le).expect("decode");
        assert_eq!(le, vec![0xD83D, 0xDE00]);
        let be: Vec<u16> = decode_units(&[0xD8, 0x3D, 0xDE, 0x00], Endian::Be).expect("decode");
        assert_eq!(be, le);
        assert_eq!(encode_units(&be, Endian::Be), vec![0xD8, 0x3D, 0xDE, 0x00]);

        let wide: Vec<u32> = decode_units(&[0, 0, 0x01, 0x00], Endian::Be).expect("decode");
        assert_eq!(wide, vec![0x100]);
    }

    #[test]
    fn odd_lengths_are_rejected() {
        let err = decode_units::<u32>(&[1, 2, 3], Endian::Le).expect_err("must fail");
        assert!(err.to_string().contains("multiple of the 4-byte"), "{err}");
    }

    #[test]
    fn endian_names() {
        assert_eq!(Endian::parse("be"), Some(Endian::Be));
        assert_eq!(Endian::parse(Endian::Le.as_str()), Some(Endian::Le));
        assert_eq!(Endian::parse("middle"), None);
        assert!(parse_endian("middle").is_err());
    }
}
