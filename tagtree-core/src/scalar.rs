//! Scalar type and integer width identification.

use core::fmt;

/// Bit width of an integer scalar.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Width {
    /// 8 bits
    W8,
    /// 16 bits
    W16,
    /// 32 bits
    W32,
    /// 64 bits
    W64,
}

impl Width {
    /// All widths, narrowest first.
    pub const ALL: [Width; 4] = [Width::W8, Width::W16, Width::W32, Width::W64];

    /// Number of bits in this width.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Width::W8 => 8,
            Width::W16 => 16,
            Width::W32 => 32,
            Width::W64 => 64,
        }
    }

    /// Smallest signed value representable at this width.
    #[inline]
    pub const fn signed_min(self) -> i64 {
        match self {
            Width::W8 => i8::MIN as i64,
            Width::W16 => i16::MIN as i64,
            Width::W32 => i32::MIN as i64,
            Width::W64 => i64::MIN,
        }
    }

    /// Largest signed value representable at this width.
    #[inline]
    pub const fn signed_max(self) -> i64 {
        match self {
            Width::W8 => i8::MAX as i64,
            Width::W16 => i16::MAX as i64,
            Width::W32 => i32::MAX as i64,
            Width::W64 => i64::MAX,
        }
    }

    /// Largest unsigned value representable at this width.
    #[inline]
    pub const fn unsigned_max(self) -> u64 {
        match self {
            Width::W8 => u8::MAX as u64,
            Width::W16 => u16::MAX as u64,
            Width::W32 => u32::MAX as u64,
            Width::W64 => u64::MAX,
        }
    }

    /// Returns `true` if `v` fits in a signed integer of this width.
    #[inline]
    pub const fn fits_signed(self, v: i64) -> bool {
        v >= self.signed_min() && v <= self.signed_max()
    }

    /// Returns `true` if `v` fits in an unsigned integer of this width.
    #[inline]
    pub const fn fits_unsigned(self, v: u64) -> bool {
        v <= self.unsigned_max()
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// All scalar types a record field can declare.
///
/// Integer types carry their width and signedness; a field declared as one
/// scalar type only ever matches a tree leaf of exactly that type.
///
/// ```
/// use tagtree_core::{ScalarType, Width};
///
/// assert_eq!(ScalarType::signed(Width::W8), ScalarType::I8);
/// assert_eq!(ScalarType::U16.width(), Some(Width::W16));
/// assert_eq!(ScalarType::F64.width(), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum ScalarType {
    /// Primitive type `i8`.
    I8,
    /// Primitive type `i16`.
    I16,
    /// Primitive type `i32`.
    I32,
    /// Primitive type `i64`.
    I64,
    /// Primitive type `u8`.
    U8,
    /// Primitive type `u16`.
    U16,
    /// Primitive type `u32`.
    U32,
    /// Primitive type `u64`.
    U64,
    /// Primitive type `f32`.
    F32,
    /// Primitive type `f64`.
    F64,
    /// Primitive type `bool`.
    Bool,
    /// UTF-8 text (`String`).
    String,
}

impl ScalarType {
    /// The signed integer type of the given width.
    pub const fn signed(width: Width) -> Self {
        match width {
            Width::W8 => ScalarType::I8,
            Width::W16 => ScalarType::I16,
            Width::W32 => ScalarType::I32,
            Width::W64 => ScalarType::I64,
        }
    }

    /// The unsigned integer type of the given width.
    pub const fn unsigned(width: Width) -> Self {
        match width {
            Width::W8 => ScalarType::U8,
            Width::W16 => ScalarType::U16,
            Width::W32 => ScalarType::U32,
            Width::W64 => ScalarType::U64,
        }
    }

    /// Integer width, or `None` for non-integer scalars.
    pub const fn width(self) -> Option<Width> {
        match self {
            ScalarType::I8 | ScalarType::U8 => Some(Width::W8),
            ScalarType::I16 | ScalarType::U16 => Some(Width::W16),
            ScalarType::I32 | ScalarType::U32 => Some(Width::W32),
            ScalarType::I64 | ScalarType::U64 => Some(Width::W64),
            ScalarType::F32 | ScalarType::F64 | ScalarType::Bool | ScalarType::String => None,
        }
    }

    /// Returns `true` for signed integers.
    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            ScalarType::I8 | ScalarType::I16 | ScalarType::I32 | ScalarType::I64
        )
    }

    /// Returns `true` for unsigned integers.
    pub const fn is_unsigned(self) -> bool {
        matches!(
            self,
            ScalarType::U8 | ScalarType::U16 | ScalarType::U32 | ScalarType::U64
        )
    }

    /// Returns `true` for `f32` and `f64`.
    pub const fn is_float(self) -> bool {
        matches!(self, ScalarType::F32 | ScalarType::F64)
    }

    /// The Rust name of this scalar type.
    pub const fn name(self) -> &'static str {
        match self {
            ScalarType::I8 => "i8",
            ScalarType::I16 => "i16",
            ScalarType::I32 => "i32",
            ScalarType::I64 => "i64",
            ScalarType::U8 => "u8",
            ScalarType::U16 => "u16",
            ScalarType::U32 => "u32",
            ScalarType::U64 => "u64",
            ScalarType::F32 => "f32",
            ScalarType::F64 => "f64",
            ScalarType::Bool => "bool",
            ScalarType::String => "string",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
