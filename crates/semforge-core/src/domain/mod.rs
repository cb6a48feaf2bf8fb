//! Core domain layer for semforge.
//!
//! Pure logic only: the descriptor model, identifier sanitation, parameter
//! classification, spec synthesis and package-tree planning. Nothing here
//! performs I/O; acquisition and materialisation go through the
//! application ports.
//!
//! Data flows in one direction:
//!
//! ```text
//! ToolDescriptor ──classify──▶ ClassifiedParameters
//!        │                            │
//!        └────────synthesize──────────┘
//!                     │
//!                     ▼
//!                 ToolSpec ──insert──▶ PackageTree ──plan──▶ [WriteStep]
//! ```

pub mod classify;
pub mod descriptor;
pub mod error;
pub mod generated;
pub mod sanitize;
pub mod spec;
pub mod tree;

// Re-exports for convenience
pub use classify::{classify_descriptor, ClassifiedParameters};
pub use descriptor::{
    Channel, DescriptorDocs, ParameterGroup, ParameterNode, ParameterShape, ToolDescriptor,
    ValueKind,
};
pub use error::{DomainError, ErrorCategory};
pub use generated::{GeneratedParameter, MultiElement, ParamRole, ValueHolder};
pub use sanitize::{sanitize_identifier, strip_flag};
pub use spec::{render_module_file, synthesize, BatchOptions, ToolSpec};
pub use tree::{ModuleEntry, PackageNode, PackageTree, WriteStep};

// ============================================================================
// CROSS-MODULE TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn output_volume_node() -> ParameterNode {
        let mut node = ParameterNode::new(ParameterShape::Scalar(ValueKind::Image));
        node.long_flag = Some("--outputVolume".into());
        node.channel = Some("output".into());
        node.description = Some("Filtered volume".into());
        node
    }

    #[test]
    fn test_descriptor_to_rendered_field() {
        let mut descriptor = ToolDescriptor::new("GradientFilter");
        descriptor.docs.category = Some("Filtering".into());
        descriptor.groups.push(ParameterGroup {
            nodes: vec![output_volume_node()],
        });

        let spec = synthesize(&descriptor, &BatchOptions::default()).unwrap();
        let code = spec.render_definition();
        assert!(code.contains(
            "outputVolume = traits.Either(traits.Bool, File(), argstr=\"--outputVolume %s\", desc=\"Filtered volume\", hash_files=False)"
        ));
        assert!(code.contains("outputVolume = File(desc=\"Filtered volume\", exists=True)"));
        assert!(code.contains("_outputs_filenames = {'outputVolume':'outputVolume.nii'}"));
    }

    #[test]
    fn test_spec_flows_into_tree() {
        let mut descriptor = ToolDescriptor::new("GradientFilter");
        descriptor.docs.category = Some("Filtering.Denoising".into());

        let spec = synthesize(&descriptor, &BatchOptions::default()).unwrap();
        let mut tree = PackageTree::new();
        tree.insert(&spec);
        let steps = tree.plan(std::path::Path::new("pkg"));
        assert!(steps.iter().any(|step| matches!(
            step,
            WriteStep::WriteFile { path, .. }
                if path.ends_with("Filtering/Denoising/denoising.py")
        )));
    }
}
