//! Descriptor acquisition and parsing.
//!
//! Split in three: [`shell`] runs the tool and captures text, [`compat`]
//! repairs output from known non-conformant tool families, [`xml`] turns
//! text into the domain's [`semforge_core::domain::ToolDescriptor`].

mod compat;
mod shell;
mod xml;

pub use compat::apply_compat_rewrites;
pub use shell::ShellDescriptorSource;
pub use xml::parse_descriptor;
