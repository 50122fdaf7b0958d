use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Typed descriptor for a single component kind.
///
/// The wire format is internally tagged on `type`, matching the schema
/// document format (`{"type": "text", "required": true, ...}`). Every
/// variant carries `required`; variant-specific constraint fields are
/// optional and camelCase on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ComponentDescriptor {
    Text(TextComponent),
    Integer(IntegerComponent),
    Reference(ReferenceComponent),
    Datetime(DatetimeComponent),
    Url(UrlComponent),
    Email(EmailComponent),
    Boolean(BooleanComponent),
}

impl ComponentDescriptor {
    /// Wire tag for this descriptor's variant.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::Reference(_) => "reference",
            Self::Datetime(_) => "datetime",
            Self::Url(_) => "url",
            Self::Email(_) => "email",
            Self::Boolean(_) => "boolean",
        }
    }

    /// Whether entity instances must carry a value for this component.
    pub fn required(&self) -> bool {
        match self {
            Self::Text(c) => c.required,
            Self::Integer(c) => c.required,
            Self::Reference(c) => c.required,
            Self::Datetime(c) => c.required,
            Self::Url(c) => c.required,
            Self::Email(c) => c.required,
            Self::Boolean(c) => c.required,
        }
    }
}

/// Free-form text with optional length bounds.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TextComponent {
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
}

/// Integer value with an optional inclusive range.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IntegerComponent {
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
}

/// Pointer to an instance of another entity type.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceComponent {
    #[serde(default)]
    pub required: bool,
    /// Name of the referenced entity type; validated against the
    /// document's entity map.
    pub entity_type: String,
}

/// Timestamp value with optional string-encoded bounds.
///
/// Bound comparison semantics belong to the storage engine; this core only
/// carries them through.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatetimeComponent {
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UrlComponent {
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmailComponent {
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BooleanComponent {
    #[serde(default)]
    pub required: bool,
}
