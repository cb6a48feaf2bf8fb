//! Tool spec synthesis and module text emission.
//!
//! [`synthesize`] turns a parsed descriptor into a [`ToolSpec`]: the
//! complete, renderable definition of one generated wrapper. Rendering is
//! split in two so callers can compose module files out of several specs:
//!
//! - [`ToolSpec::render_definition`] produces the three class definitions
//!   of one tool.
//! - [`render_module_file`] wraps one or more definitions with the fixed
//!   generated-file header and import block.

use serde::Serialize;

use crate::domain::classify::classify_descriptor;
use crate::domain::descriptor::ToolDescriptor;
use crate::domain::error::DomainError;
use crate::domain::generated::GeneratedParameter;

// ── Batch options ───────────────────────────────────────────────────────────

/// Options shared by every tool in a generation batch.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Prefix tokens prepended to every tool invocation.
    pub launcher: Vec<String>,
    /// Sets the X-redirection flag on generated wrappers.
    pub redirect_x: bool,
    /// Enables corrective rewrites and extra rules for the non-conformant
    /// tool family.
    pub compat: bool,
}

// ── Tool spec ───────────────────────────────────────────────────────────────

/// Synthesised wrapper definition for one tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    /// Wrapper class name: the last dot-segment of the tool identifier.
    pub name: String,
    /// Raw category field from the descriptor.
    pub category: String,
    pub inputs: Vec<GeneratedParameter>,
    pub outputs: Vec<GeneratedParameter>,
    /// Identifier and default filename pairs for output-channel values.
    pub output_filenames: Vec<(String, String)>,
    /// Invocation template: launcher prefix plus tool identifier.
    pub command: String,
    pub redirect_x: bool,
    /// Rendered documentation block.
    pub docs: String,
}

/// Builds a [`ToolSpec`] from a parsed descriptor.
pub fn synthesize(
    descriptor: &ToolDescriptor,
    options: &BatchOptions,
) -> Result<ToolSpec, DomainError> {
    let category = descriptor
        .docs
        .category
        .as_deref()
        .map(str::trim)
        .unwrap_or_default();
    if category.is_empty() {
        return Err(DomainError::MissingCategory {
            tool: descriptor.tool.clone(),
        });
    }

    let classified = classify_descriptor(descriptor, options.compat)?;

    Ok(ToolSpec {
        name: descriptor.wrapper_name().to_string(),
        category: category.to_string(),
        inputs: classified.inputs,
        outputs: classified.outputs,
        output_filenames: classified.output_filenames,
        command: format!("{} {} ", options.launcher.join(" "), descriptor.tool),
        redirect_x: options.redirect_x,
        docs: render_docs(descriptor),
    })
}

/// Documentation block: the non-empty fields in fixed order, each rendered
/// as `field: value` followed by a blank line.
fn render_docs(descriptor: &ToolDescriptor) -> String {
    let mut docs = String::new();
    for (field, value) in descriptor.docs.in_order() {
        let Some(value) = value else { continue };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        docs.push_str(field);
        docs.push_str(": ");
        docs.push_str(value);
        docs.push_str("\n\n");
    }
    docs
}

impl ToolSpec {
    /// Dot-split category path. The category's first whitespace-delimited
    /// token is authoritative; trailing prose in category fields is dropped.
    pub fn category_path(&self) -> Vec<&str> {
        let head = self.category.split(' ').next().unwrap_or("");
        head.split('.').filter(|segment| !segment.is_empty()).collect()
    }

    /// Renders the three class definitions for this tool: input spec,
    /// output spec and the wrapper class.
    pub fn render_definition(&self) -> String {
        let mut code = String::new();

        code.push_str(&format!("class {}InputSpec(CommandLineInputSpec):\n", self.name));
        for field in &self.inputs {
            code.push_str("    ");
            code.push_str(&field.render());
            code.push('\n');
        }
        code.push_str("\n\n");

        code.push_str(&format!("class {}OutputSpec(TraitedSpec):\n", self.name));
        if self.outputs.is_empty() {
            code.push_str("    pass\n");
        } else {
            for field in &self.outputs {
                code.push_str("    ");
                code.push_str(&field.render());
                code.push('\n');
            }
        }
        code.push_str("\n\n");

        code.push_str(&self.render_wrapper());
        code
    }

    fn render_wrapper(&self) -> String {
        let filenames = self
            .output_filenames
            .iter()
            .map(|(identifier, filename)| format!("'{identifier}':'{filename}'"))
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "class {name}(SEMLikeCommandLine):\n    \"\"\"{docs}\"\"\"\n\n    input_spec = {name}InputSpec\n    output_spec = {name}OutputSpec\n    _cmd = \"{command}\"\n    _outputs_filenames = {{{filenames}}}\n    _redirect_x = {redirect}\n",
            name = self.name,
            docs = self.docs,
            command = self.command,
            filenames = filenames,
            redirect = if self.redirect_x { "True" } else { "False" },
        )
    }
}

// ── Module files ────────────────────────────────────────────────────────────

const MODULE_HEADER: &str = "# -*- coding: utf-8 -*-\n\"\"\"Autogenerated file - DO NOT EDIT\nIf you spot a bug, please report it on the mailing list and/or change the generator.\"\"\"\n\n";

/// The import block is identical at every tree depth; generated modules
/// are relocated under a common runtime package when shipped.
const MODULE_IMPORTS: &str = "from ..base import (CommandLine, CommandLineInputSpec, SEMLikeCommandLine, TraitedSpec,\n                    File, Directory, traits, isdefined, InputMultiPath, OutputMultiPath)\nimport os\n\n\n";

/// Renders a complete generated module file from one or more definitions.
pub fn render_module_file(definitions: &[String]) -> String {
    let mut file = String::new();
    file.push_str(MODULE_HEADER);
    file.push_str(MODULE_IMPORTS);
    file.push_str(&definitions.join("\n\n"));
    file
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::descriptor::{ParameterGroup, ParameterNode, ParameterShape, ValueKind};

    fn minimal_spec(name: &str, category: &str) -> ToolSpec {
        ToolSpec {
            name: name.to_string(),
            category: category.to_string(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            output_filenames: Vec::new(),
            command: format!(" {name} "),
            redirect_x: false,
            docs: String::new(),
        }
    }

    fn descriptor_with_category(category: &str) -> ToolDescriptor {
        let mut descriptor = ToolDescriptor::new("GradientFilter");
        descriptor.docs.category = Some(category.to_string());
        descriptor
    }

    #[test]
    fn test_missing_category_is_rejected() {
        let descriptor = ToolDescriptor::new("GradientFilter");
        let err = synthesize(&descriptor, &BatchOptions::default()).unwrap_err();
        assert_eq!(
            err,
            DomainError::MissingCategory {
                tool: "GradientFilter".into()
            }
        );

        let blank = descriptor_with_category("   ");
        assert!(synthesize(&blank, &BatchOptions::default()).is_err());
    }

    #[test]
    fn test_command_template_joins_launcher_and_tool() {
        let descriptor = descriptor_with_category("Filtering");
        let options = BatchOptions {
            launcher: vec!["/opt/slicer/Slicer3".into(), "--launch".into()],
            ..Default::default()
        };
        let spec = synthesize(&descriptor, &options).unwrap();
        assert_eq!(spec.command, "/opt/slicer/Slicer3 --launch GradientFilter ");
    }

    #[test]
    fn test_empty_launcher_keeps_leading_space() {
        let descriptor = descriptor_with_category("Filtering");
        let spec = synthesize(&descriptor, &BatchOptions::default()).unwrap();
        assert_eq!(spec.command, " GradientFilter ");
    }

    #[test]
    fn test_category_path_splits_on_dots() {
        assert_eq!(
            minimal_spec("T", "Filtering.Denoising").category_path(),
            vec!["Filtering", "Denoising"]
        );
        assert_eq!(minimal_spec("T", "Filtering").category_path(), vec!["Filtering"]);
    }

    #[test]
    fn test_category_path_takes_first_token_only() {
        assert_eq!(
            minimal_spec("T", "Diffusion legacy tools").category_path(),
            vec!["Diffusion"]
        );
    }

    #[test]
    fn test_docs_render_in_fixed_order() {
        let mut descriptor = descriptor_with_category("Filtering");
        descriptor.docs.title = Some("Gradient Filter".into());
        descriptor.docs.description = Some("Smooths volumes.".into());
        descriptor.docs.contributor = Some("A. Dev".into());

        let spec = synthesize(&descriptor, &BatchOptions::default()).unwrap();
        assert_eq!(
            spec.docs,
            "title: Gradient Filter\n\ncategory: Filtering\n\ndescription: Smooths volumes.\n\ncontributor: A. Dev\n\n"
        );
    }

    #[test]
    fn test_docs_skip_blank_fields() {
        let mut descriptor = descriptor_with_category("Filtering");
        descriptor.docs.version = Some("  ".into());
        let spec = synthesize(&descriptor, &BatchOptions::default()).unwrap();
        assert!(!spec.docs.contains("version"));
    }

    #[test]
    fn test_definition_contains_all_three_classes() {
        let mut descriptor = descriptor_with_category("Filtering");
        let mut threshold = ParameterNode::new(ParameterShape::Scalar(ValueKind::Integer));
        threshold.long_flag = Some("--threshold".into());
        descriptor.groups.push(ParameterGroup {
            nodes: vec![threshold],
        });

        let code = synthesize(&descriptor, &BatchOptions::default())
            .unwrap()
            .render_definition();
        assert!(code.contains("class GradientFilterInputSpec(CommandLineInputSpec):"));
        assert!(code.contains("    threshold = traits.Int(argstr=\"--threshold %d\")"));
        assert!(code.contains("class GradientFilterOutputSpec(TraitedSpec):"));
        assert!(code.contains("    pass\n"));
        assert!(code.contains("class GradientFilter(SEMLikeCommandLine):"));
        assert!(code.contains("    input_spec = GradientFilterInputSpec"));
        assert!(code.contains("    _cmd = \" GradientFilter \""));
        assert!(code.contains("    _outputs_filenames = {}"));
        assert!(code.contains("    _redirect_x = False"));
    }

    #[test]
    fn test_output_filenames_render_without_spaces() {
        let mut spec = minimal_spec("T", "Filtering");
        spec.output_filenames = vec![
            ("outputVolume".into(), "outputVolume.nii".into()),
            ("outputTransform".into(), "outputTransform.mat".into()),
        ];
        assert!(spec.render_definition().contains(
            "_outputs_filenames = {'outputVolume':'outputVolume.nii','outputTransform':'outputTransform.mat'}"
        ));
    }

    #[test]
    fn test_redirect_flag_is_always_written() {
        let mut spec = minimal_spec("T", "Filtering");
        assert!(spec.render_definition().contains("_redirect_x = False"));
        spec.redirect_x = true;
        assert!(spec.render_definition().contains("_redirect_x = True"));
    }

    #[test]
    fn test_module_file_layout() {
        let definition = minimal_spec("T", "Filtering").render_definition();
        let file = render_module_file(&[definition]);
        assert!(file.starts_with("# -*- coding: utf-8 -*-\n"));
        assert!(file.contains("\"\"\"Autogenerated file - DO NOT EDIT"));
        assert!(file.contains("from ..base import"));
        assert!(file.contains("import os\n\n\n"));
    }

    #[test]
    fn test_module_file_joins_definitions_with_blank_lines() {
        let first = minimal_spec("First", "F").render_definition();
        let second = minimal_spec("Second", "F").render_definition();
        let file = render_module_file(&[first, second]);
        let first_at = file.find("class First(").unwrap();
        let second_at = file.find("class SecondInputSpec(").unwrap();
        assert!(first_at < second_at);
        assert!(file.contains("_redirect_x = False\n\n\nclass SecondInputSpec"));
    }
}
