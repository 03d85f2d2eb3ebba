use std::fmt;

use arrow::array::{
    Array, ArrayRef, AsArray, BooleanArray, Float64Array, Int64Array, StringArray, UInt64Array,
};
use arrow::compute::{cast, kernels::arity::unary};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int64Type, UInt64Type};
use arrow::util::display::{ArrayFormatter, FormatOptions};

use crate::errors::DqError;
use crate::types::Value;

/// Logical value domain of a column, decided once from its Arrow type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Integer,
    Float,
    Text,
    Categorical,
    Boolean,
    Datetime,
    Other,
}

impl ColumnKind {
    pub fn from_data_type(data_type: &DataType) -> Self {
        match data_type {
            DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64 => ColumnKind::Integer,
            DataType::Float16
            | DataType::Float32
            | DataType::Float64
            | DataType::Decimal128(_, _)
            | DataType::Decimal256(_, _) => ColumnKind::Float,
            DataType::Utf8 | DataType::LargeUtf8 | DataType::Utf8View => ColumnKind::Text,
            DataType::Dictionary(_, _) => ColumnKind::Categorical,
            DataType::Boolean => ColumnKind::Boolean,
            DataType::Date32
            | DataType::Date64
            | DataType::Timestamp(_, _)
            | DataType::Time32(_)
            | DataType::Time64(_) => ColumnKind::Datetime,
            _ => ColumnKind::Other,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnKind::Integer | ColumnKind::Float)
    }

    pub fn is_textual(&self) -> bool {
        matches!(self, ColumnKind::Text)
    }

    /// Kinds the partition advisory knows how to assess. Datetime is left out.
    pub fn is_partitionable(&self) -> bool {
        matches!(
            self,
            ColumnKind::Text
                | ColumnKind::Categorical
                | ColumnKind::Integer
                | ColumnKind::Float
                | ColumnKind::Boolean
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Integer => "integer",
            ColumnKind::Float => "float",
            ColumnKind::Text => "text",
            ColumnKind::Categorical => "categorical",
            ColumnKind::Boolean => "boolean",
            ColumnKind::Datetime => "datetime",
            ColumnKind::Other => "other",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column values normalized to one Arrow array type per kind.
enum ColumnData<'a> {
    Integer(Int64Array),
    /// Kept unsigned so values above `i64::MAX` survive.
    Unsigned(UInt64Array),
    /// NaN is folded into the null mask.
    Float(Float64Array),
    Boolean(BooleanArray),
    /// Text, categorical and temporal columns, rendered as UTF-8.
    Text(StringArray),
    Other(ArrayFormatter<'a>),
}

/// Read-only view over one column of a [`Table`](super::Table).
pub struct Column<'a> {
    name: &'a str,
    array: &'a ArrayRef,
    kind: ColumnKind,
    data: ColumnData<'a>,
}

impl<'a> Column<'a> {
    pub(crate) fn new(name: &'a str, array: &'a ArrayRef) -> Result<Self, DqError> {
        let kind = ColumnKind::from_data_type(array.data_type());
        let data = match kind {
            ColumnKind::Integer if array.data_type() == &DataType::UInt64 => {
                ColumnData::Unsigned(array.as_primitive::<UInt64Type>().clone())
            }
            ColumnKind::Integer => {
                let casted = cast(array, &DataType::Int64)?;
                ColumnData::Integer(casted.as_primitive::<Int64Type>().clone())
            }
            ColumnKind::Float => ColumnData::Float(float_values(array)?),
            ColumnKind::Boolean => ColumnData::Boolean(array.as_boolean().clone()),
            ColumnKind::Text | ColumnKind::Categorical | ColumnKind::Datetime => {
                let casted = cast(array, &DataType::Utf8)?;
                ColumnData::Text(casted.as_string::<i32>().clone())
            }
            ColumnKind::Other => ColumnData::Other(ArrayFormatter::try_new(
                array.as_ref(),
                &FormatOptions::default(),
            )?),
        };
        Ok(Self {
            name,
            array,
            kind,
            data,
        })
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    pub fn data_type(&self) -> &'a DataType {
        self.array.data_type()
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    pub fn missing_count(&self) -> usize {
        match &self.data {
            ColumnData::Integer(a) => a.null_count(),
            ColumnData::Unsigned(a) => a.null_count(),
            ColumnData::Float(a) => a.null_count(),
            ColumnData::Boolean(a) => a.null_count(),
            ColumnData::Text(a) => a.null_count(),
            ColumnData::Other(_) => self.array.null_count(),
        }
    }

    pub fn is_missing(&self, i: usize) -> bool {
        match &self.data {
            ColumnData::Integer(a) => a.is_null(i),
            ColumnData::Unsigned(a) => a.is_null(i),
            ColumnData::Float(a) => a.is_null(i),
            ColumnData::Boolean(a) => a.is_null(i),
            ColumnData::Text(a) => a.is_null(i),
            ColumnData::Other(_) => self.array.is_null(i),
        }
    }

    /// Value at row `i`, `Value::Null` when missing.
    pub fn value(&self, i: usize) -> Value {
        if self.is_missing(i) {
            return Value::Null;
        }
        match &self.data {
            ColumnData::Integer(a) => Value::Integer(a.value(i)),
            ColumnData::Unsigned(a) => Value::from(a.value(i)),
            ColumnData::Float(a) => Value::Float(a.value(i)),
            ColumnData::Boolean(a) => Value::Boolean(a.value(i)),
            ColumnData::Text(a) => Value::Text(a.value(i).to_string()),
            ColumnData::Other(formatter) => Value::Text(formatter.value(i).to_string()),
        }
    }

    pub fn values(&self) -> impl Iterator<Item = Value> + '_ {
        (0..self.len()).map(|i| self.value(i))
    }

    /// Numeric view of the column as `f64`, `None` for non-numeric kinds.
    pub fn numbers(&self) -> Option<Float64Array> {
        match &self.data {
            ColumnData::Integer(a) => Some(unary(a, |v| v as f64)),
            ColumnData::Unsigned(a) => Some(unary(a, |v| v as f64)),
            ColumnData::Float(a) => Some(a.clone()),
            _ => None,
        }
    }

    /// UTF-8 view of the column, `None` unless the kind renders as text.
    pub fn strings(&self) -> Option<&StringArray> {
        match &self.data {
            ColumnData::Text(a) => Some(a),
            _ => None,
        }
    }
}

/// Float64 view with NaN folded into the null mask.
fn float_values(array: &ArrayRef) -> Result<Float64Array, DqError> {
    match array.data_type() {
        DataType::Float16 | DataType::Float32 => {
            let casted = cast(array, &DataType::Float32)?;
            Ok(casted
                .as_primitive::<Float32Type>()
                .iter()
                .map(|v| v.filter(|f| !f.is_nan()).map(widen_f32))
                .collect())
        }
        _ => {
            let casted = cast(array, &DataType::Float64)?;
            Ok(casted
                .as_primitive::<Float64Type>()
                .iter()
                .map(|v| v.filter(|f| !f.is_nan()))
                .collect())
        }
    }
}

/// Widen through the shortest decimal form, so `1.1f32` reads as `1.1`.
fn widen_f32(v: f32) -> f64 {
    v.to_string().parse().unwrap_or(v as f64)
}
