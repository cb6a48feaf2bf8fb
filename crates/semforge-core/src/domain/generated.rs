//! Generated parameters and their field rendering.
//!
//! A [`GeneratedParameter`] is the classified form of one declared
//! parameter: identifier, holder type, role and rendering attributes.
//! Rendering produces a single field declaration line of the generated
//! input or output spec class.
//!
//! # Rendering layout
//!
//! ```text
//! identifier = Holder(value, value, named=..., named=...)
//! ```
//!
//! Leading values (choice literals, element types, defaults) each carry a
//! trailing `, ` so named arguments append cleanly. Named arguments render
//! in a fixed canonical order: `argstr`, `desc`, `position`, `sep`,
//! `hash_files`, `exists`, `usedefault`.

use serde::Serialize;

use crate::domain::descriptor::ValueKind;

// ── Parameter roles ─────────────────────────────────────────────────────────

/// Which spec side a generated parameter belongs to, and with what duties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParamRole {
    /// Ordinary input field.
    Input,
    /// Input-side override for an output-channel value: the caller either
    /// requests generation with a boolean or names the file explicitly.
    OutputOverride,
    /// Output-side result field.
    OutputResult,
}

// ── Holder types ────────────────────────────────────────────────────────────

/// Element type inside a multi-valued holder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum MultiElement {
    Typed { kind: ValueKind, exists: bool },
    /// Spatial coordinate: a fixed triple of floats per element.
    FloatTriple,
}

/// The value-holder type of a generated field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ValueHolder {
    Plain(ValueKind),
    Choice { values: Vec<String> },
    Multi(MultiElement),
}

// ── Generated parameter ─────────────────────────────────────────────────────

/// One field of a generated input or output spec.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedParameter {
    pub identifier: String,
    pub holder: ValueHolder,
    pub role: ParamRole,
    /// Argument template; `None` renders no argstr (output results).
    pub argstr: Option<String>,
    /// Negative offset from the end of the positional slice. Indices come
    /// off the wire as `u32`, so the offset math needs the wider type.
    pub position: Option<i64>,
    /// Separator between repeated vector values.
    pub separator: Option<&'static str>,
    /// Renders `exists=True`.
    pub requires_existing: bool,
    /// Renders `hash_files=False`.
    pub hash_exempt: bool,
    /// Literal default value, rendered ahead of named arguments with
    /// `usedefault=True` appended.
    pub default: Option<String>,
    pub description: Option<String>,
}

impl GeneratedParameter {
    /// Renders the complete field declaration, without indentation.
    pub fn render(&self) -> String {
        match self.role {
            ParamRole::OutputOverride => self.render_override(),
            ParamRole::Input | ParamRole::OutputResult => format!(
                "{} = {}({}{})",
                self.identifier,
                self.holder_name(),
                self.render_values(),
                self.render_named()
            ),
        }
    }

    fn holder_name(&self) -> &'static str {
        match (&self.holder, self.role) {
            (ValueHolder::Plain(kind), _) => kind.holder_type(),
            (ValueHolder::Choice { .. }, _) => "traits.Enum",
            (ValueHolder::Multi(_), ParamRole::OutputResult) => "OutputMultiPath",
            (ValueHolder::Multi(_), _) => "InputMultiPath",
        }
    }

    /// Leading positional values. Each is followed by `, ` so the named
    /// arguments can append; the trailing separator survives even when no
    /// named argument follows.
    fn render_values(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        match &self.holder {
            ValueHolder::Plain(_) => {}
            ValueHolder::Choice { values } => {
                parts.extend(
                    values
                        .iter()
                        .map(|value| format!("\"{}\"", value.replace('"', ""))),
                );
            }
            ValueHolder::Multi(element) => parts.push(self.render_element(element)),
        }
        if let Some(default) = &self.default {
            parts.push(default.clone());
        }
        if parts.is_empty() {
            String::new()
        } else {
            format!("{}, ", parts.join(", "))
        }
    }

    fn render_element(&self, element: &MultiElement) -> String {
        match element {
            MultiElement::FloatTriple => {
                "traits.List(traits.Float(), minlen=3, maxlen=3)".to_string()
            }
            MultiElement::Typed { kind, exists } => {
                if *exists && self.role != ParamRole::OutputOverride {
                    format!("{}(exists=True)", kind.holder_type())
                } else if *exists {
                    // the override side drops the existence constraint but
                    // keeps the call parentheses
                    format!("{}()", kind.holder_type())
                } else {
                    kind.holder_type().to_string()
                }
            }
        }
    }

    /// Named arguments in canonical order. String values render with
    /// double quotes, so any double quote inside them becomes a single
    /// quote to keep the line well formed.
    fn render_named(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(argstr) = &self.argstr {
            parts.push(format!("argstr=\"{}\"", argstr.replace('"', "'")));
        }
        if let Some(desc) = &self.description {
            parts.push(format!("desc=\"{}\"", desc.replace('"', "'")));
        }
        if let Some(position) = self.position {
            parts.push(format!("position={position}"));
        }
        if let Some(separator) = self.separator {
            parts.push(format!("sep=\"{separator}\""));
        }
        if self.hash_exempt {
            parts.push("hash_files=False".to_string());
        }
        if self.requires_existing {
            parts.push("exists=True".to_string());
        }
        if self.default.is_some() {
            parts.push("usedefault=True".to_string());
        }
        parts.join(", ")
    }

    /// Output overrides render as an either-type: a boolean request or an
    /// explicit path.
    fn render_override(&self) -> String {
        let inner = match &self.holder {
            ValueHolder::Plain(kind) => format!("{}()", kind.holder_type()),
            ValueHolder::Choice { .. } => "traits.Enum()".to_string(),
            ValueHolder::Multi(element) => {
                format!("InputMultiPath({}, )", self.render_element(element))
            }
        };
        format!(
            "{} = traits.Either(traits.Bool, {}, {})",
            self.identifier,
            inner,
            self.render_named()
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn input(identifier: &str, holder: ValueHolder) -> GeneratedParameter {
        GeneratedParameter {
            identifier: identifier.to_string(),
            holder,
            role: ParamRole::Input,
            argstr: None,
            position: None,
            separator: None,
            requires_existing: false,
            hash_exempt: false,
            default: None,
            description: None,
        }
    }

    #[test]
    fn test_plain_scalar_field() {
        let mut param = input("threshold", ValueHolder::Plain(ValueKind::Integer));
        param.argstr = Some("--threshold %d".into());
        param.description = Some("Cutoff value".into());
        assert_eq!(
            param.render(),
            "threshold = traits.Int(argstr=\"--threshold %d\", desc=\"Cutoff value\")"
        );
    }

    #[test]
    fn test_positional_file_field() {
        let mut param = input("inputVolume", ValueHolder::Plain(ValueKind::Image));
        param.argstr = Some("%s".into());
        param.position = Some(-1);
        param.requires_existing = true;
        assert_eq!(
            param.render(),
            "inputVolume = File(argstr=\"%s\", position=-1, exists=True)"
        );
    }

    #[test]
    fn test_choice_values_are_quoted() {
        let mut param = input(
            "interpolation",
            ValueHolder::Choice {
                values: vec!["linear".into(), "nearest\"".into()],
            },
        );
        param.argstr = Some("--interpolation %s".into());
        assert_eq!(
            param.render(),
            "interpolation = traits.Enum(\"linear\", \"nearest\", argstr=\"--interpolation %s\")"
        );
    }

    #[test]
    fn test_vector_keeps_trailing_value_separator() {
        let mut param = input(
            "weights",
            ValueHolder::Multi(MultiElement::Typed {
                kind: ValueKind::Float,
                exists: false,
            }),
        );
        param.argstr = Some("--weights %s...".into());
        param.separator = Some(",");
        assert_eq!(
            param.render(),
            "weights = InputMultiPath(traits.Float, argstr=\"--weights %s...\", sep=\",\")"
        );
    }

    #[test]
    fn test_file_elements_carry_existence() {
        let mut param = input(
            "inputs",
            ValueHolder::Multi(MultiElement::Typed {
                kind: ValueKind::File,
                exists: true,
            }),
        );
        param.argstr = Some("--inputs %s...".into());
        assert_eq!(
            param.render(),
            "inputs = InputMultiPath(File(exists=True), argstr=\"--inputs %s...\")"
        );
    }

    #[test]
    fn test_coordinate_triples() {
        let mut param = input("seed", ValueHolder::Multi(MultiElement::FloatTriple));
        param.argstr = Some("--seed %s...".into());
        assert_eq!(
            param.render(),
            "seed = InputMultiPath(traits.List(traits.Float(), minlen=3, maxlen=3), argstr=\"--seed %s...\")"
        );
    }

    #[test]
    fn test_output_override_is_an_either() {
        let param = GeneratedParameter {
            identifier: "outputVolume".into(),
            holder: ValueHolder::Plain(ValueKind::Image),
            role: ParamRole::OutputOverride,
            argstr: Some("--outputVolume %s".into()),
            position: None,
            separator: None,
            requires_existing: false,
            hash_exempt: true,
            default: None,
            description: None,
        };
        assert_eq!(
            param.render(),
            "outputVolume = traits.Either(traits.Bool, File(), argstr=\"--outputVolume %s\", hash_files=False)"
        );
    }

    #[test]
    fn test_repeated_output_override_drops_element_existence() {
        let param = GeneratedParameter {
            identifier: "outputs".into(),
            holder: ValueHolder::Multi(MultiElement::Typed {
                kind: ValueKind::File,
                exists: true,
            }),
            role: ParamRole::OutputOverride,
            argstr: Some("--outputs %s...".into()),
            position: None,
            separator: None,
            requires_existing: false,
            hash_exempt: true,
            default: None,
            description: None,
        };
        assert_eq!(
            param.render(),
            "outputs = traits.Either(traits.Bool, InputMultiPath(File(), ), argstr=\"--outputs %s...\", hash_files=False)"
        );
    }

    #[test]
    fn test_output_result_field() {
        let param = GeneratedParameter {
            identifier: "outputVolume".into(),
            holder: ValueHolder::Plain(ValueKind::Image),
            role: ParamRole::OutputResult,
            argstr: None,
            position: None,
            separator: None,
            requires_existing: true,
            hash_exempt: false,
            default: None,
            description: Some("Result image".into()),
        };
        assert_eq!(
            param.render(),
            "outputVolume = File(desc=\"Result image\", exists=True)"
        );
    }

    #[test]
    fn test_repeated_output_result_uses_output_holder() {
        let param = GeneratedParameter {
            identifier: "outputs".into(),
            holder: ValueHolder::Multi(MultiElement::Typed {
                kind: ValueKind::File,
                exists: true,
            }),
            role: ParamRole::OutputResult,
            argstr: None,
            position: None,
            separator: None,
            requires_existing: true,
            hash_exempt: false,
            default: None,
            description: None,
        };
        assert_eq!(
            param.render(),
            "outputs = OutputMultiPath(File(exists=True), exists=True)"
        );
    }

    #[test]
    fn test_default_renders_first_with_usedefault() {
        let mut param = input("xMaxProcess", ValueHolder::Plain(ValueKind::Integer));
        param.argstr = Some("-xMaxProcess %d".into());
        param.default = Some("1".into());
        param.description = Some("Set default maximum number of processes.".into());
        assert_eq!(
            param.render(),
            "xMaxProcess = traits.Int(1, argstr=\"-xMaxProcess %d\", desc=\"Set default maximum number of processes.\", usedefault=True)"
        );
    }

    #[test]
    fn test_quotes_in_descriptions_become_single() {
        let mut param = input("mode", ValueHolder::Plain(ValueKind::String));
        param.argstr = Some("--mode %s".into());
        param.description = Some("use \"fast\" mode".into());
        assert_eq!(
            param.render(),
            "mode = traits.Str(argstr=\"--mode %s\", desc=\"use 'fast' mode\")"
        );
    }
}
