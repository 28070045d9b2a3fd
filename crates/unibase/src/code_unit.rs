use std::fmt;

/// A fixed-width code unit: `u8` for ASCII/UTF-8, `u16` for UTF-16, `u32` for
/// UTF-32.
pub trait CodeUnit: Copy + Eq + Ord + Default + fmt::Debug + 'static {
    const BITS: u32;

    fn to_u32(self) -> u32;

    /// Widens a byte without translation; only ASCII bytes mean the same thing
    /// in every encoding.
    fn from_ascii(byte: u8) -> Self;

    fn is_ascii(self) -> bool {
        self.to_u32() < 0x80
    }
}

macro_rules! impl_code_unit {
    ($($t:ty),*) => {
        $(
            impl CodeUnit for $t {
                const BITS: u32 = <$t>::BITS;

                fn to_u32(self) -> u32 {
                    self as u32
                }

                fn from_ascii(byte: u8) -> Self {
                    byte as $t
                }
            }
        )*
    };
}

impl_code_unit!(u8, u16, u32);

pub fn is_string_ascii<T: CodeUnit>(units: &[T]) -> bool {
    units.iter().all(|u| u.is_ascii())
}
