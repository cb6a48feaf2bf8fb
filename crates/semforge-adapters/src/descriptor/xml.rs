//! Descriptor document parsing.
//!
//! A streaming pull parse over `quick-xml` events. The document shape is
//!
//! ```text
//! <executable>
//!   <title>…</title> <category>…</category> …     documentation fields
//!   <parameters>                                   one index space each
//!     <label>…</label> <description>…</description>  skipped
//!     <image fileExtensions=".nrrd" multiple="true">  one parameter
//!       <name>…</name> <longflag>…</longflag>
//!       <channel>…</channel> <index>…</index>
//!       <element>…</element> …
//!     </image>
//!   </parameters>
//! </executable>
//! ```
//!
//! Parameter element tags double as type declarations and are parsed with
//! [`ParameterShape`]; an unrecognised tag inside a group is a schema
//! error, not markup noise. Everything else unknown is skipped.

use quick_xml::events::Event;
use quick_xml::Reader;

use semforge_core::application::ApplicationError;
use semforge_core::domain::DomainError;
use semforge_core::prelude::*;

/// Where the walk currently is in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// Outside any parameter group; element text feeds the doc fields.
    Document,
    /// Inside `<parameters>`, between parameter declarations.
    Group,
    /// Inside a group's `<label>` or `<description>`; content is skipped.
    GroupMeta,
    /// Inside one parameter element.
    Parameter,
}

/// Parses descriptor text into a [`ToolDescriptor`].
///
/// Markup faults become [`ApplicationError::DescriptorParse`] carrying the
/// raw text; schema faults (unknown parameter kinds, unparseable indices)
/// surface as domain errors.
pub fn parse_descriptor(tool: &str, text: &str) -> SemforgeResult<ToolDescriptor> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut descriptor = ToolDescriptor::new(tool);
    let mut group = ParameterGroup::new();
    let mut node: Option<ParameterNode> = None;
    let mut param_tag = String::new();
    let mut pending = String::new();
    let mut scope = Scope::Document;
    let mut saw_root = false;

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref event)) => {
                saw_root = true;
                pending.clear();
                let tag = String::from_utf8_lossy(event.name().as_ref()).into_owned();
                match scope {
                    Scope::Document => {
                        if tag == "parameters" {
                            group = ParameterGroup::new();
                            scope = Scope::Group;
                        }
                    }
                    Scope::Group => {
                        if tag == "label" || tag == "description" {
                            scope = Scope::GroupMeta;
                        } else {
                            let shape: ParameterShape = tag.parse()?;
                            let mut fresh = ParameterNode::new(shape);
                            for attr in event.attributes() {
                                let attr = attr.map_err(|err| parse_error(tool, text, &err))?;
                                match attr.key.as_ref() {
                                    b"multiple" => {
                                        let value = attr
                                            .unescape_value()
                                            .map_err(|err| parse_error(tool, text, &err))?;
                                        fresh.repeatable = value.as_ref() == "true";
                                    }
                                    b"fileExtensions" => {
                                        let value = attr
                                            .unescape_value()
                                            .map_err(|err| parse_error(tool, text, &err))?;
                                        if !value.is_empty() {
                                            fresh.extensions = Some(value.into_owned());
                                        }
                                    }
                                    _ => {}
                                }
                            }
                            node = Some(fresh);
                            param_tag = tag;
                            scope = Scope::Parameter;
                        }
                    }
                    Scope::GroupMeta | Scope::Parameter => {}
                }
            }
            Ok(Event::Text(event)) => {
                let piece = event
                    .unescape()
                    .map_err(|err| parse_error(tool, text, &err))?;
                pending.push_str(&piece);
            }
            Ok(Event::End(ref event)) => {
                let tag = String::from_utf8_lossy(event.name().as_ref()).into_owned();
                let value = std::mem::take(&mut pending);
                match scope {
                    Scope::Document => {
                        if tag != "executable" && !value.is_empty() {
                            descriptor.docs.set(&tag, value);
                        }
                    }
                    Scope::Group => {
                        if tag == "parameters" {
                            descriptor.groups.push(std::mem::take(&mut group));
                            scope = Scope::Document;
                        }
                    }
                    Scope::GroupMeta => {
                        if tag == "label" || tag == "description" {
                            scope = Scope::Group;
                        }
                    }
                    Scope::Parameter => {
                        if tag == param_tag {
                            if let Some(finished) = node.take() {
                                group.nodes.push(finished);
                            }
                            scope = Scope::Group;
                        } else if let Some(current) = node.as_mut() {
                            if !value.is_empty() {
                                apply_child(current, &tag, value)?;
                            }
                        }
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(parse_error(tool, text, &err)),
            _ => {}
        }
        buf.clear();
    }

    // Open scopes at end of input mean the document was truncated, and
    // input without any element at all is not a document.
    if scope != Scope::Document {
        return Err(parse_error(tool, text, &"unexpected end of document"));
    }
    if !saw_root {
        return Err(parse_error(tool, text, &"no root element found"));
    }

    Ok(descriptor)
}

/// Stores one child element's text on the parameter under construction.
fn apply_child(node: &mut ParameterNode, tag: &str, value: String) -> SemforgeResult<()> {
    match tag {
        "name" => node.name = Some(value),
        "longflag" => node.long_flag = Some(value),
        "description" => node.description = Some(value),
        "channel" => node.channel = Some(value),
        "element" => node.values.push(value),
        "index" => {
            let parsed = value.parse::<u32>().map_err(|_| DomainError::InvalidIndex {
                parameter: parameter_label(node),
                value: value.clone(),
            })?;
            node.index = Some(parsed);
        }
        // Declared defaults and short flags carry no generated field.
        _ => {}
    }
    Ok(())
}

/// Best identifier available for error messages mid-parse.
fn parameter_label(node: &ParameterNode) -> String {
    node.name
        .clone()
        .or_else(|| node.long_flag.clone())
        .unwrap_or_else(|| node.shape.to_string())
}

fn parse_error(tool: &str, raw: &str, reason: &dyn std::fmt::Display) -> SemforgeError {
    ApplicationError::DescriptorParse {
        tool: tool.to_string(),
        reason: reason.to_string(),
        raw: raw.to_string(),
    }
    .into()
}

// ============================================================================
// TESTS
// ============================================================================
