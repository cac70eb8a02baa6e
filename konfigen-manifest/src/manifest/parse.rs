//! Manifest parsing from files and strings.

use std::{fmt, path::Path, str::FromStr};

use indexmap::IndexMap;
use konfigen_ir::{ConfigValue, Environment};
use serde::Deserialize;

use super::{Application, Desktop, Manifest, validate::ParseContext};
use crate::{Error, Result};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "konfigen.toml")
    }
}

impl Manifest {
    /// Parse a konfigen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a konfigen.toml from a string with a custom filename for error
    /// reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let ctx = ParseContext::new(content, filename);
    let raw: RawManifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    lower_manifest(raw, ctx)
}

/// Raw deserialization targets, lowered into [`Manifest`] after validation.
#[derive(Debug, Deserialize)]
struct RawManifest {
    application: RawApplication,
    desktop: RawDesktop,
    #[serde(default)]
    fields: IndexMap<String, RawField>,
}

#[derive(Debug, Deserialize)]
struct RawApplication {
    id: String,
    environment: String,
    version: String,
    #[serde(default, rename = "comprehensive-version")]
    comprehensive_version: bool,
}

#[derive(Debug, Deserialize)]
struct RawDesktop {
    #[serde(rename = "main-class")]
    main_class: String,
    #[serde(rename = "package-name")]
    package_name: String,
    #[serde(rename = "package-version")]
    package_version: Option<String>,
}

/// A custom field value: either a bare TOML scalar or a `{ type, value }`
/// table pinning the exact target type.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawField {
    Typed(TypedField),
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Anything else (arrays, nested tables, datetimes); rejected with a
    /// diagnostic during lowering.
    Other(toml::Value),
}

#[derive(Debug, Deserialize)]
struct TypedField {
    #[serde(rename = "type")]
    ty: FieldType,
    #[serde(default)]
    value: Option<toml::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum FieldType {
    Null,
    Bool,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Char,
    String,
}

impl FieldType {
    fn as_str(&self) -> &'static str {
        match self {
            FieldType::Null => "null",
            FieldType::Bool => "bool",
            FieldType::Byte => "byte",
            FieldType::Short => "short",
            FieldType::Int => "int",
            FieldType::Long => "long",
            FieldType::Float => "float",
            FieldType::Double => "double",
            FieldType::Char => "char",
            FieldType::String => "string",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn lower_manifest(raw: RawManifest, ctx: ParseContext) -> Result<Manifest> {
    let app_ctx = ctx.in_section("application");
    require_filled(app_ctx, "id", &raw.application.id)?;
    require_filled(app_ctx, "environment", &raw.application.environment)?;
    require_filled(app_ctx, "version", &raw.application.version)?;

    let desktop_ctx = ctx.in_section("desktop");
    require_filled(desktop_ctx, "main-class", &raw.desktop.main_class)?;
    require_filled(desktop_ctx, "package-name", &raw.desktop.package_name)?;
    if let Some(package_version) = &raw.desktop.package_version {
        require_filled(desktop_ctx, "package-version", package_version)?;
    }

    // Comprehensive versions interpolate the environment short form, so the
    // environment must be a known one when the flag is set.
    if raw.application.comprehensive_version
        && Environment::from_name(&raw.application.environment).is_none()
    {
        return Err(ctx.unknown_environment_error(&raw.application.environment));
    }

    let fields_ctx = ctx.in_section("fields");
    let mut fields = IndexMap::with_capacity(raw.fields.len());
    for (name, value) in raw.fields {
        fields_ctx.validate_name(&name, "field")?;
        let lowered = lower_field(fields_ctx, &name, value)?;
        fields.insert(name, lowered);
    }

    Ok(Manifest {
        application: Application {
            id: raw.application.id,
            environment: raw.application.environment,
            version: raw.application.version,
            comprehensive_version: raw.application.comprehensive_version,
        },
        desktop: Desktop {
            main_class: raw.desktop.main_class,
            package_name: raw.desktop.package_name,
            package_version: raw.desktop.package_version,
        },
        fields,
    })
}

fn require_filled(ctx: ParseContext, key: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ctx.blank_field_error(key));
    }
    Ok(())
}

fn lower_field(ctx: ParseContext, name: &str, field: RawField) -> Result<ConfigValue> {
    match field {
        RawField::Typed(typed) => lower_typed_field(ctx, name, typed),
        RawField::Bool(v) => Ok(ConfigValue::Bool(v)),
        // Bare integers narrow to int when they fit; wider values keep the
        // long type.
        RawField::Int(v) => Ok(narrow_int(v)),
        RawField::Float(v) => Ok(ConfigValue::F64(v)),
        RawField::Str(v) => Ok(ConfigValue::Str(v)),
        RawField::Other(value) => {
            let detail = match &value {
                toml::Value::Table(table) => match table.get("type") {
                    Some(toml::Value::String(ty)) => format!("unknown field type '{}'", ty),
                    _ => "tables need a 'type' key naming the target type".to_string(),
                },
                other => format!("{} values are not supported", value_kind(other)),
            };
            Err(ctx.unsupported_field_error(name, detail))
        }
    }
}

fn lower_typed_field(ctx: ParseContext, name: &str, field: TypedField) -> Result<ConfigValue> {
    use toml::Value;

    match (field.ty, field.value) {
        (FieldType::Null, None) => Ok(ConfigValue::Null),
        (FieldType::Null, Some(_)) => Err(ctx.unsupported_field_error(
            name,
            "type 'null' does not take a value".to_string(),
        )),
        (ty, None) => Err(ctx.unsupported_field_error(name, format!("type '{ty}' requires a value"))),
        (FieldType::Bool, Some(Value::Boolean(v))) => Ok(ConfigValue::Bool(v)),
        (FieldType::Byte, Some(Value::Integer(v))) => i8::try_from(v)
            .map(ConfigValue::I8)
            .map_err(|_| out_of_range(ctx, name, FieldType::Byte, v)),
        (FieldType::Short, Some(Value::Integer(v))) => i16::try_from(v)
            .map(ConfigValue::I16)
            .map_err(|_| out_of_range(ctx, name, FieldType::Short, v)),
        (FieldType::Int, Some(Value::Integer(v))) => i32::try_from(v)
            .map(ConfigValue::I32)
            .map_err(|_| out_of_range(ctx, name, FieldType::Int, v)),
        (FieldType::Long, Some(Value::Integer(v))) => Ok(ConfigValue::I64(v)),
        (FieldType::Float, Some(Value::Float(v))) => Ok(ConfigValue::F32(v as f32)),
        (FieldType::Float, Some(Value::Integer(v))) => Ok(ConfigValue::F32(v as f32)),
        (FieldType::Double, Some(Value::Float(v))) => Ok(ConfigValue::F64(v)),
        (FieldType::Double, Some(Value::Integer(v))) => Ok(ConfigValue::F64(v as f64)),
        (FieldType::Char, Some(Value::String(s))) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(ConfigValue::Char(c)),
                _ => Err(ctx.unsupported_field_error(
                    name,
                    format!("type 'char' needs exactly one character, got {:?}", s),
                )),
            }
        }
        (FieldType::String, Some(Value::String(s))) => Ok(ConfigValue::Str(s)),
        (ty, Some(other)) => Err(ctx.unsupported_field_error(
            name,
            format!("type '{}' cannot take a {} value", ty, value_kind(&other)),
        )),
    }
}

fn out_of_range(ctx: ParseContext, name: &str, ty: FieldType, value: i64) -> Box<Error> {
    ctx.unsupported_field_error(name, format!("value {value} is out of range for type '{ty}'"))
}

fn narrow_int(value: i64) -> ConfigValue {
    i32::try_from(value)
        .map(ConfigValue::I32)
        .unwrap_or(ConfigValue::I64(value))
}

fn value_kind(value: &toml::Value) -> &'static str {
    match value {
        toml::Value::String(_) => "string",
        toml::Value::Integer(_) => "integer",
        toml::Value::Float(_) => "float",
        toml::Value::Boolean(_) => "boolean",
        toml::Value::Datetime(_) => "datetime",
        toml::Value::Array(_) => "array",
        toml::Value::Table(_) => "table",
    }
}
