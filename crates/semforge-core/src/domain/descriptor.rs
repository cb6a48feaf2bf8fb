//! Parsed tool self-description model.
//!
//! # Design
//!
//! These types are the immutable product of parsing a descriptor document.
//! They carry the declared data only. Turning declarations into generated
//! fields happens in [`crate::domain::classify`], and nothing in this module
//! touches I/O.
//!
//! [`ValueKind`] lookups are exhaustive matches: adding a kind without a
//! format token or holder type is a compile error, not a runtime fallback.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::error::DomainError;

// ── Value kinds ─────────────────────────────────────────────────────────────

/// The declared element kind of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Integer,
    Float,
    Double,
    Boolean,
    String,
    File,
    Directory,
    Image,
    Geometry,
    Transform,
    Table,
    Point,
    Region,
}

impl ValueKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Double => "double",
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::File => "file",
            Self::Directory => "directory",
            Self::Image => "image",
            Self::Geometry => "geometry",
            Self::Transform => "transform",
            Self::Table => "table",
            Self::Point => "point",
            Self::Region => "region",
        }
    }

    /// Whether values of this kind name filesystem objects.
    pub const fn is_file_like(self) -> bool {
        matches!(
            self,
            Self::File
                | Self::Directory
                | Self::Image
                | Self::Geometry
                | Self::Transform
                | Self::Table
        )
    }

    /// Substitution token this kind contributes to an argument template.
    /// Booleans are bare flags and contribute nothing.
    pub const fn format_token(self) -> &'static str {
        match self {
            Self::Boolean => "",
            Self::Integer => "%d",
            Self::Float | Self::Double => "%f",
            Self::String
            | Self::File
            | Self::Directory
            | Self::Image
            | Self::Geometry
            | Self::Transform
            | Self::Table
            | Self::Point
            | Self::Region => "%s",
        }
    }

    /// Holder type named in the generated field declaration.
    pub const fn holder_type(self) -> &'static str {
        match self {
            Self::Integer => "traits.Int",
            Self::Float | Self::Double => "traits.Float",
            Self::Boolean => "traits.Bool",
            Self::String => "traits.Str",
            Self::File | Self::Image | Self::Geometry | Self::Transform | Self::Table => "File",
            Self::Directory => "Directory",
            Self::Point | Self::Region => "traits.List",
        }
    }

    /// Extension used when deriving a default output filename and the
    /// descriptor names no extensions itself. Only file-like kinds can
    /// reach filename derivation; the rest are listed for totality.
    pub const fn default_extension(self) -> &'static str {
        match self {
            Self::Image => ".nii",
            Self::Transform => ".mat",
            Self::Geometry => ".vtk",
            Self::File | Self::Directory | Self::Table => "",
            Self::Integer
            | Self::Float
            | Self::Double
            | Self::Boolean
            | Self::String
            | Self::Point
            | Self::Region => "",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "integer" => Ok(Self::Integer),
            "float" => Ok(Self::Float),
            "double" => Ok(Self::Double),
            "boolean" => Ok(Self::Boolean),
            "string" => Ok(Self::String),
            "file" => Ok(Self::File),
            "directory" => Ok(Self::Directory),
            "image" => Ok(Self::Image),
            "geometry" => Ok(Self::Geometry),
            "transform" => Ok(Self::Transform),
            "table" => Ok(Self::Table),
            "point" => Ok(Self::Point),
            "region" => Ok(Self::Region),
            other => Err(DomainError::UnknownParameterKind {
                tag: other.to_string(),
            }),
        }
    }
}

// ── Parameter shape ─────────────────────────────────────────────────────────

/// How a parameter's values are shaped: a single value, a closed choice
/// between declared values, or an open-ended vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterShape {
    Scalar(ValueKind),
    Enumeration(ValueKind),
    Vector(ValueKind),
}

impl ParameterShape {
    pub const fn element_kind(self) -> ValueKind {
        match self {
            Self::Scalar(kind) | Self::Enumeration(kind) | Self::Vector(kind) => kind,
        }
    }

    /// Whether this is an unwrapped file-like parameter. Channel rules
    /// apply only to these.
    pub fn is_bare_file_like(self) -> bool {
        matches!(self, Self::Scalar(kind) if kind.is_file_like())
    }

    /// Substitution token for the argument template. Vectors always pass
    /// as a single formatted string regardless of element kind.
    pub const fn format_token(self) -> &'static str {
        match self {
            Self::Vector(_) => "%s",
            Self::Scalar(kind) | Self::Enumeration(kind) => kind.format_token(),
        }
    }
}

impl fmt::Display for ParameterShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => write!(f, "{kind}"),
            Self::Enumeration(kind) => write!(f, "{kind}-enumeration"),
            Self::Vector(kind) => write!(f, "{kind}-vector"),
        }
    }
}

impl FromStr for ParameterShape {
    type Err = DomainError;

    /// Parses a descriptor element tag: `<kind>`, `<kind>-enumeration` or
    /// `<kind>-vector`. Unknown base kinds report the full tag.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let unknown = || DomainError::UnknownParameterKind {
            tag: tag.to_string(),
        };
        if let Some(base) = tag.strip_suffix("-enumeration") {
            Ok(Self::Enumeration(base.parse().map_err(|_| unknown())?))
        } else if let Some(base) = tag.strip_suffix("-vector") {
            Ok(Self::Vector(base.parse().map_err(|_| unknown())?))
        } else {
            Ok(Self::Scalar(tag.parse()?))
        }
    }
}

// ── Channel ─────────────────────────────────────────────────────────────────

/// Declared direction of a file-like parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Input,
    Output,
}

impl Channel {
    /// Validates the raw channel text of a node. Absence and unknown values
    /// are both schema violations, reported against the resolved parameter
    /// identifier.
    pub fn resolve(raw: Option<&str>, parameter: &str) -> Result<Self, DomainError> {
        match raw {
            Some("input") => Ok(Self::Input),
            Some("output") => Ok(Self::Output),
            Some(other) => Err(DomainError::InvalidChannel {
                parameter: parameter.to_string(),
                value: other.to_string(),
            }),
            None => Err(DomainError::MissingChannel {
                parameter: parameter.to_string(),
            }),
        }
    }
}

// ── Parameter nodes and groups ──────────────────────────────────────────────

/// One declared parameter, exactly as the descriptor states it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterNode {
    pub shape: ParameterShape,
    /// `multiple="true"`: the parameter may be repeated on the command line.
    pub repeatable: bool,
    pub name: Option<String>,
    /// Raw flag text, dashes and padding included.
    pub long_flag: Option<String>,
    /// Declared position within the group's index space.
    pub index: Option<u32>,
    /// Raw channel text; validated during classification.
    pub channel: Option<String>,
    /// Comma-separated extension hints for derived output filenames.
    pub extensions: Option<String>,
    /// Declared choice values, in document order.
    pub values: Vec<String>,
    pub description: Option<String>,
}

impl ParameterNode {
    /// Empty node of the given shape; the parser fills fields as it walks.
    pub fn new(shape: ParameterShape) -> Self {
        Self {
            shape,
            repeatable: false,
            name: None,
            long_flag: None,
            index: None,
            channel: None,
            extensions: None,
            values: Vec::new(),
            description: None,
        }
    }
}

/// Ordered parameters sharing one positional index space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterGroup {
    pub nodes: Vec<ParameterNode>,
}

impl ParameterGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Largest declared index in the group, zero when nothing is positional.
    pub fn max_index(&self) -> u32 {
        self.nodes
            .iter()
            .filter_map(|node| node.index)
            .max()
            .unwrap_or(0)
    }
}

// ── Tool-level documentation ────────────────────────────────────────────────

/// Executable-level documentation fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescriptorDocs {
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub documentation_url: Option<String>,
    pub license: Option<String>,
    pub contributor: Option<String>,
    pub acknowledgements: Option<String>,
}

impl DescriptorDocs {
    /// Field name and value pairs in the fixed documentation order.
    pub fn in_order(&self) -> [(&'static str, Option<&str>); 8] {
        [
            ("title", self.title.as_deref()),
            ("category", self.category.as_deref()),
            ("description", self.description.as_deref()),
            ("version", self.version.as_deref()),
            ("documentation-url", self.documentation_url.as_deref()),
            ("license", self.license.as_deref()),
            ("contributor", self.contributor.as_deref()),
            ("acknowledgements", self.acknowledgements.as_deref()),
        ]
    }

    /// Stores a field by its descriptor tag name. Unknown tags are ignored;
    /// descriptors routinely carry fields the generator has no use for.
    pub fn set(&mut self, tag: &str, value: String) {
        match tag {
            "title" => self.title = Some(value),
            "category" => self.category = Some(value),
            "description" => self.description = Some(value),
            "version" => self.version = Some(value),
            "documentation-url" => self.documentation_url = Some(value),
            "license" => self.license = Some(value),
            "contributor" => self.contributor = Some(value),
            "acknowledgements" => self.acknowledgements = Some(value),
            _ => {}
        }
    }
}

// ── Tool descriptor ─────────────────────────────────────────────────────────

/// Parsed self-description of one tool. Immutable once parsed, discarded
/// after synthesis.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolDescriptor {
    /// Tool identifier exactly as queried, possibly dotted.
    pub tool: String,
    pub docs: DescriptorDocs,
    pub groups: Vec<ParameterGroup>,
}

impl ToolDescriptor {
    pub fn new(tool: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            docs: DescriptorDocs::default(),
            groups: Vec::new(),
        }
    }

    /// Wrapper name: the last dot-segment of the tool identifier.
    pub fn wrapper_name(&self) -> &str {
        self.tool.rsplit('.').next().unwrap_or(&self.tool)
    }
}

// ============================================================================
// TESTS
// ============================================================================
