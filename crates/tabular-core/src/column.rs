//! Column descriptors and column type resolution.

use std::fmt;
use std::str::FromStr;

use num_complex::{Complex32, Complex64};
use serde::{Deserialize, Serialize};

use crate::error::{FrameError, Result};
use crate::value::{NativeType, ValueType};

/// The five value domains a column can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Signed integers, accessed as `i64`.
    Int,
    /// Unsigned integers, accessed as `u64`.
    Uint,
    /// Floating point numbers, accessed as `f64`.
    Float,
    /// Complex numbers, accessed as `Complex64`.
    Complex,
    /// Text, accessed as `String`.
    String,
}

impl ColumnType {
    /// All column types, in declaration order.
    pub const ALL: [ColumnType; 5] = [
        ColumnType::Int,
        ColumnType::Uint,
        ColumnType::Float,
        ColumnType::Complex,
        ColumnType::String,
    ];

    /// Returns the canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Int => "int",
            ColumnType::Uint => "uint",
            ColumnType::Float => "float",
            ColumnType::Complex => "complex",
            ColumnType::String => "string",
        }
    }

    /// Returns true if Sum, Min and Max are defined for this type.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, ColumnType::String)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "int" => Ok(ColumnType::Int),
            "uint" => Ok(ColumnType::Uint),
            "float" => Ok(ColumnType::Float),
            "complex" => Ok(ColumnType::Complex),
            "string" => Ok(ColumnType::String),
            _ => Err(format!("{s} is an invalid type")),
        }
    }
}

/// Primitive field kinds a record may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    Complex32,
    Complex64,
    String,
    Bool,
    Char,
}

impl PrimitiveKind {
    /// Returns the Rust spelling of the primitive.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveKind::I8 => "i8",
            PrimitiveKind::I16 => "i16",
            PrimitiveKind::I32 => "i32",
            PrimitiveKind::I64 => "i64",
            PrimitiveKind::Isize => "isize",
            PrimitiveKind::U8 => "u8",
            PrimitiveKind::U16 => "u16",
            PrimitiveKind::U32 => "u32",
            PrimitiveKind::U64 => "u64",
            PrimitiveKind::Usize => "usize",
            PrimitiveKind::F32 => "f32",
            PrimitiveKind::F64 => "f64",
            PrimitiveKind::Complex32 => "Complex32",
            PrimitiveKind::Complex64 => "Complex64",
            PrimitiveKind::String => "String",
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::Char => "char",
        }
    }

    /// Maps the primitive to its column type, if it has one.
    pub fn column_type(&self) -> Option<ColumnType> {
        match self {
            PrimitiveKind::I8
            | PrimitiveKind::I16
            | PrimitiveKind::I32
            | PrimitiveKind::I64
            | PrimitiveKind::Isize => Some(ColumnType::Int),
            PrimitiveKind::U8
            | PrimitiveKind::U16
            | PrimitiveKind::U32
            | PrimitiveKind::U64
            | PrimitiveKind::Usize => Some(ColumnType::Uint),
            PrimitiveKind::F32 | PrimitiveKind::F64 => Some(ColumnType::Float),
            PrimitiveKind::Complex32 | PrimitiveKind::Complex64 => Some(ColumnType::Complex),
            PrimitiveKind::String => Some(ColumnType::String),
            PrimitiveKind::Bool | PrimitiveKind::Char => None,
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Types that can be declared as primitive record fields.
pub trait PrimitiveField {
    /// The primitive kind of the type.
    const KIND: PrimitiveKind;
}

macro_rules! primitive_field {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl PrimitiveField for $ty {
                const KIND: PrimitiveKind = PrimitiveKind::$kind;
            }
        )*
    };
}

primitive_field! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    Complex32 => Complex32,
    Complex64 => Complex64,
    String => String,
    str => String,
    bool => Bool,
    char => Char,
}

/// The declared type of a record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// A language primitive.
    Primitive(PrimitiveKind),
    /// A reference (or box) to another kind. Resolves like its target.
    Reference(Box<FieldKind>),
    /// A user type, described by the value families it implements.
    Composite {
        type_name: String,
        families: Vec<ColumnType>,
    },
}

impl FieldKind {
    /// Kind of a primitive type.
    pub fn of<T: PrimitiveField + ?Sized>() -> Self {
        FieldKind::Primitive(T::KIND)
    }

    /// Kind of a custom type implementing [`ValueType`].
    pub fn custom<T: ValueType>() -> Self {
        FieldKind::Composite {
            type_name: std::any::type_name::<T>().to_string(),
            families: vec![<T::Native as NativeType>::COLUMN_TYPE],
        }
    }

    /// Kind of a reference to `target`.
    pub fn reference(target: FieldKind) -> Self {
        FieldKind::Reference(Box::new(target))
    }

    /// Resolves the column type of the field, and whether it is a basic type.
    ///
    /// `column` only names the column in error messages.
    pub fn resolve(&self, column: &str) -> Result<(ColumnType, bool)> {
        match self {
            FieldKind::Reference(target) => target.resolve(column),
            FieldKind::Composite {
                type_name,
                families,
            } => match families.as_slice() {
                [family] => Ok((*family, false)),
                [] => Err(FrameError::NoValueType {
                    column: column.to_string(),
                    type_name: type_name.clone(),
                }),
                _ => Err(FrameError::AmbiguousValueType {
                    column: column.to_string(),
                    type_name: type_name.clone(),
                }),
            },
            FieldKind::Primitive(kind) => kind
                .column_type()
                .map(|column_type| (column_type, true))
                .ok_or_else(|| FrameError::InvalidType {
                    column: column.to_string(),
                    kind: kind.to_string(),
                }),
        }
    }
}

/// A named, typed column of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    column_type: ColumnType,
    index: usize,
    basic_type: bool,
}

impl Column {
    /// Create a column descriptor.
    ///
    /// `index` is the position of the source field in its record.
    pub fn new(
        name: impl Into<String>,
        column_type: ColumnType,
        index: usize,
        basic_type: bool,
    ) -> Self {
        Self {
            name: name.into(),
            column_type,
            index,
            basic_type,
        }
    }

    /// Column name, unique within its table.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }

    /// Position of the source field in the originating record.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the column holds built-in values rather than a custom type.
    pub fn is_basic_type(&self) -> bool {
        self.basic_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_type_parses_known_names() {
        for column_type in ColumnType::ALL {
            assert_eq!(column_type.as_str().parse::<ColumnType>(), Ok(column_type));
        }
        assert_eq!(
            "bool".parse::<ColumnType>(),
            Err("bool is an invalid type".to_string())
        );
    }

    #[test]
    fn test_primitives_resolve_to_basic_types() {
        let cases = [
            (FieldKind::of::<i8>(), ColumnType::Int),
            (FieldKind::of::<i64>(), ColumnType::Int),
            (FieldKind::of::<usize>(), ColumnType::Uint),
            (FieldKind::of::<f32>(), ColumnType::Float),
            (FieldKind::of::<Complex32>(), ColumnType::Complex),
            (FieldKind::of::<String>(), ColumnType::String),
            (FieldKind::of::<str>(), ColumnType::String),
        ];
        for (kind, expected) in cases {
            assert_eq!(kind.resolve("c"), Ok((expected, true)), "{kind:?}");
        }
    }

    #[test]
    fn test_references_resolve_like_their_target() {
        let kind = FieldKind::reference(FieldKind::reference(FieldKind::of::<u16>()));
        assert_eq!(kind.resolve("c"), Ok((ColumnType::Uint, true)));
    }

    #[test]
    fn test_invalid_primitives_are_rejected() {
        let err = FieldKind::of::<bool>().resolve("a").unwrap_err();
        assert_eq!(err.to_string(), "in column a: bool type is invalid");
        assert!(FieldKind::of::<char>().resolve("a").is_err());
    }

    #[test]
    fn test_composites_need_exactly_one_family() {
        let none = FieldKind::Composite {
            type_name: "Empty".to_string(),
            families: vec![],
        };
        assert_eq!(
            none.resolve("a").unwrap_err().to_string(),
            "in column a: type Empty doesn't implement a value type"
        );

        let both = FieldKind::Composite {
            type_name: "Both".to_string(),
            families: vec![ColumnType::Int, ColumnType::String],
        };
        assert!(matches!(
            both.resolve("a"),
            Err(FrameError::AmbiguousValueType { .. })
        ));

        let one = FieldKind::Composite {
            type_name: "Kelvin".to_string(),
            families: vec![ColumnType::Float],
        };
        assert_eq!(one.resolve("a"), Ok((ColumnType::Float, false)));
    }

    #[test]
    fn test_column_serializes_as_json() {
        let column = Column::new("temp", ColumnType::Float, 2, true);
        let json = serde_json::to_string(&column).expect("serialize column");
        assert!(json.contains("\"column_type\":\"float\""));
        let round: Column = serde_json::from_str(&json).expect("deserialize column");
        assert_eq!(round, column);
    }
}
