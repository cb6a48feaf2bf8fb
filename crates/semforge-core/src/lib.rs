//! Semforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the semforge
//! wrapper generator, following hexagonal (ports and adapters)
//! architecture. Given self-describing command-line tools, it classifies
//! their declared parameters into typed fields and plans a generated
//! package tree grouped by tool category.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          semforge-cli (CLI)             │
//! │      (drives the application)           │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (GenerateService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (DescriptorSource, Filesystem,          │
//! │  ProgressReporter)                      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    semforge-adapters (Infrastructure)   │
//! │ (ShellDescriptorSource, LocalFilesystem)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (Descriptor, Classifier, PackageTree)   │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! Wire a [`application::GenerateService`] with adapter implementations of
//! the three ports, then hand it the tool list and a
//! [`domain::BatchOptions`]:
//!
//! ```text
//! let service = GenerateService::new(source, filesystem, reporter);
//! service.generate(&tools, &options, Path::new("./generated"))?;
//! ```

pub mod application;
pub mod domain;
pub mod error;

/// Commonly used types, re-exported for convenience.
pub mod prelude {
    pub use crate::application::{
        apply_write_steps,
        ports::{DescriptorSource, Filesystem, ProgressReporter},
        GenerateService,
    };
    pub use crate::domain::{
        BatchOptions, Channel, ClassifiedParameters, DescriptorDocs, GeneratedParameter,
        PackageTree, ParamRole, ParameterGroup, ParameterNode, ParameterShape, ToolDescriptor,
        ToolSpec, ValueHolder, ValueKind, WriteStep,
    };
    pub use crate::error::{SemforgeError, SemforgeResult};
}

/// Version of the semforge core library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
