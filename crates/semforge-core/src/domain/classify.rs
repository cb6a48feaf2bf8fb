//! Parameter classification: declared nodes to generated fields.
//!
//! The rules here mirror the calling convention of the wrapped tools:
//!
//! - An explicit flag beats the declared name, both as the identifier
//!   source and as the argument template.
//! - Only flag-less indexed parameters are positional. Positions count
//!   backwards from the end of their group's index space.
//! - File-like values must declare a direction. Output-channel files
//!   materialise twice: an input-side override plus an output-side result
//!   sharing one identifier.
//!
//! Classification is pure; all I/O happened before the descriptor reached
//! this module.

use crate::domain::descriptor::{
    Channel, ParameterGroup, ParameterNode, ParameterShape, ToolDescriptor, ValueKind,
};
use crate::domain::error::DomainError;
use crate::domain::generated::{GeneratedParameter, MultiElement, ParamRole, ValueHolder};
use crate::domain::sanitize::{sanitize_identifier, strip_flag};

/// Separator between repeated vector values.
const DEFAULT_SEPARATOR: &str = ",";
/// The non-conformant tool family joins vector values with semicolons.
const COMPAT_SEPARATOR: &str = ";";

/// Identifiers removed wholesale in compatibility mode; the synthetic
/// runtime controls below replace them.
const COMPAT_BLOCKLIST: &[&str] = &["maxMemoryUsage"];

/// Classified parameters of one tool, split by spec side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedParameters {
    pub inputs: Vec<GeneratedParameter>,
    pub outputs: Vec<GeneratedParameter>,
    /// Identifier and derived default filename pairs, in generation order.
    pub output_filenames: Vec<(String, String)>,
}

/// Classifies every parameter group of a descriptor, in document order.
pub fn classify_descriptor(
    descriptor: &ToolDescriptor,
    compat: bool,
) -> Result<ClassifiedParameters, DomainError> {
    let mut classified = ClassifiedParameters::default();
    for group in &descriptor.groups {
        classify_group(group, compat, &mut classified)?;
    }
    if compat {
        apply_compat_rules(&mut classified);
    }
    Ok(classified)
}

fn classify_group(
    group: &ParameterGroup,
    compat: bool,
    out: &mut ClassifiedParameters,
) -> Result<(), DomainError> {
    // One past the largest declared index; positions are offsets back
    // from here, so the highest-indexed parameter lands at -1. Widened
    // past u32 so a u32::MAX index cannot wrap.
    let next_slot = i64::from(group.max_index()) + 1;
    for node in &group.nodes {
        classify_node(node, next_slot, compat, out)?;
    }
    Ok(())
}

fn classify_node(
    node: &ParameterNode,
    next_slot: i64,
    compat: bool,
    out: &mut ClassifiedParameters,
) -> Result<(), DomainError> {
    let (identifier, raw_flag) = resolve_identifier(node)?;

    let mut argstr = match (&raw_flag, node.index) {
        (Some(flag), _) => format!("--{flag} "),
        (None, Some(_)) => String::new(),
        (None, None) => format!("--{identifier} "),
    };
    argstr.push_str(node.shape.format_token());

    let position = node.index.map(|index| i64::from(index) - next_slot);

    let description = node.description.as_ref().map(|d| d.replace('\n', ", "));

    let mut separator = None;
    let holder = match node.shape {
        ParameterShape::Enumeration(_) => ValueHolder::Choice {
            values: node.values.clone(),
        },
        ParameterShape::Vector(kind) => {
            separator = Some(if compat {
                COMPAT_SEPARATOR
            } else {
                DEFAULT_SEPARATOR
            });
            argstr.push_str("...");
            ValueHolder::Multi(vector_element(kind))
        }
        ParameterShape::Scalar(kind) if node.repeatable => {
            argstr.push_str("...");
            ValueHolder::Multi(repeated_element(kind))
        }
        ParameterShape::Scalar(kind) => ValueHolder::Plain(kind),
    };

    if node.shape.is_bare_file_like() {
        match Channel::resolve(node.channel.as_deref(), &identifier)? {
            Channel::Output => {
                let filename = derive_output_filename(node, &identifier);
                out.inputs.push(GeneratedParameter {
                    identifier: identifier.clone(),
                    holder: holder.clone(),
                    role: ParamRole::OutputOverride,
                    argstr: Some(argstr),
                    position,
                    separator,
                    requires_existing: false,
                    hash_exempt: true,
                    default: None,
                    description: description.clone(),
                });
                out.outputs.push(GeneratedParameter {
                    identifier: identifier.clone(),
                    holder,
                    role: ParamRole::OutputResult,
                    argstr: None,
                    position,
                    separator,
                    requires_existing: true,
                    hash_exempt: false,
                    default: None,
                    description,
                });
                out.output_filenames.push((identifier, filename));
            }
            Channel::Input => {
                // repeated inputs hold their existence check on the
                // element type, not the holder
                let requires_existing = matches!(holder, ValueHolder::Plain(_));
                out.inputs.push(GeneratedParameter {
                    identifier,
                    holder,
                    role: ParamRole::Input,
                    argstr: Some(argstr),
                    position,
                    separator,
                    requires_existing,
                    hash_exempt: false,
                    default: None,
                    description,
                });
            }
        }
    } else {
        out.inputs.push(GeneratedParameter {
            identifier,
            holder,
            role: ParamRole::Input,
            argstr: Some(argstr),
            position,
            separator,
            requires_existing: false,
            hash_exempt: false,
            default: None,
            description,
        });
    }
    Ok(())
}

/// Resolves the generated identifier and, when present, the stripped flag
/// text the argument template is built from.
fn resolve_identifier(node: &ParameterNode) -> Result<(String, Option<String>), DomainError> {
    if let Some(flag) = &node.long_flag {
        let stripped = strip_flag(flag);
        Ok((sanitize_identifier(stripped), Some(stripped.to_string())))
    } else if let Some(name) = &node.name {
        Ok((sanitize_identifier(name), None))
    } else {
        Err(DomainError::MissingName {
            kind: node.shape.to_string(),
        })
    }
}

/// Default filename for an output-channel parameter: the identifier plus
/// the first declared extension, or the kind's own default extension.
fn derive_output_filename(node: &ParameterNode, identifier: &str) -> String {
    let extension = match &node.extensions {
        Some(list) => list.split(',').next().unwrap_or(""),
        None => node.shape.element_kind().default_extension(),
    };
    format!("{identifier}{extension}")
}

fn vector_element(kind: ValueKind) -> MultiElement {
    MultiElement::Typed {
        kind,
        exists: kind.is_file_like(),
    }
}

fn repeated_element(kind: ValueKind) -> MultiElement {
    match kind {
        ValueKind::Point | ValueKind::Region => MultiElement::FloatTriple,
        _ => MultiElement::Typed {
            kind,
            exists: kind.is_file_like(),
        },
    }
}

/// Compatibility rules for the non-conformant tool family: drop the
/// blocklisted declared controls from both spec sides, then append the
/// synthetic runtime controls every tool of the family accepts.
fn apply_compat_rules(classified: &mut ClassifiedParameters) {
    let blocked = |identifier: &str| COMPAT_BLOCKLIST.contains(&identifier);
    classified.inputs.retain(|param| !blocked(&param.identifier));
    classified
        .outputs
        .retain(|param| !blocked(&param.identifier));
    classified
        .output_filenames
        .retain(|(identifier, _)| !blocked(identifier));

    classified.inputs.push(GeneratedParameter {
        identifier: "xDefaultMem".into(),
        holder: ValueHolder::Plain(ValueKind::Integer),
        role: ParamRole::Input,
        argstr: Some("-xDefaultMem %d".into()),
        position: None,
        separator: None,
        requires_existing: false,
        hash_exempt: false,
        default: None,
        description: Some("Set default maximum heap size".into()),
    });
    classified.inputs.push(GeneratedParameter {
        identifier: "xMaxProcess".into(),
        holder: ValueHolder::Plain(ValueKind::Integer),
        role: ParamRole::Input,
        argstr: Some("-xMaxProcess %d".into()),
        position: None,
        separator: None,
        requires_existing: false,
        hash_exempt: false,
        default: Some("1".into()),
        description: Some("Set default maximum number of processes.".into()),
    });
}

// ============================================================================
// TESTS
// ============================================================================
