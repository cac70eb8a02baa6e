/// A configuration value, classified into one of the categories the literal
/// renderers know how to emit.
///
/// Every value entering the pipeline is sorted into exactly one variant at the
/// boundary, through the `From` impls below or through
/// [`ConfigValue::opaque`]. Renderers then dispatch on the variant alone and
/// never inspect source types again.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    /// Absent value, rendered as the target language's null token.
    Null,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Char(char),
    Str(String),
    /// Textual form of a value outside the fixed categories.
    ///
    /// Rendered like a string: quoted and escaped. This variant is the
    /// fallback that keeps classification total.
    Opaque(String),
}

/// Capability for values that only promise a textual conversion.
///
/// Types outside the fixed [`ConfigValue`] categories implement this to be
/// captured as [`ConfigValue::Opaque`]. The conversion runs once, at
/// classification time.
pub trait HasTextualForm {
    /// The value's textual form, before any quoting or escaping.
    fn textual_form(&self) -> String;
}

impl ConfigValue {
    /// Captures a value outside the fixed categories by its textual form.
    pub fn opaque(value: &dyn HasTextualForm) -> Self {
        Self::Opaque(value.textual_form())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Category name, matching the `type` names accepted in manifests.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::I8(_) => "byte",
            Self::I16(_) => "short",
            Self::I32(_) => "int",
            Self::I64(_) => "long",
            Self::F32(_) => "float",
            Self::F64(_) => "double",
            Self::Char(_) => "char",
            Self::Str(_) => "string",
            Self::Opaque(_) => "opaque",
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i8> for ConfigValue {
    fn from(value: i8) -> Self {
        Self::I8(value)
    }
}

impl From<i16> for ConfigValue {
    fn from(value: i16) -> Self {
        Self::I16(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        Self::I32(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::I64(value)
    }
}

impl From<f32> for ConfigValue {
    fn from(value: f32) -> Self {
        Self::F32(value)
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        Self::F64(value)
    }
}

impl From<char> for ConfigValue {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl<T> From<Option<T>> for ConfigValue
where
    T: Into<ConfigValue>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Self::Null,
        }
    }
}
