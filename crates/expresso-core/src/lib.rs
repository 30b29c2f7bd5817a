//! Expresso Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Expresso
//! skeleton generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          expresso-cli (CLI)             │
//! │      (Implements Driving Ports)         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (GenerateService + the guard)       │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Filesystem, Engine, Catalog, Guard)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    expresso-adapters (Infrastructure)   │
//! │ (LocalFilesystem, RawRenderer, Embedded)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Blueprint, AssemblyModel, Manifest)   │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use expresso_core::{
//!     application::GenerateService,
//!     domain::{Blueprint, Database, LanguageVariant},
//! };
//!
//! let blueprint = Blueprint::builder("my-app")
//!     .variant(LanguageVariant::Js)
//!     .database(Database::Mongoose)?
//!     .build()?;
//!
//! let service = GenerateService::new(filesystem, engine, catalog, confirmation);
//! let report = service.generate(&blueprint)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateReport, GenerateService,
        ports::{DirState, Filesystem, OverwriteConfirmation, TemplateCatalog, TemplateEngine},
    };
    pub use crate::domain::{
        AssemblyModel, Blueprint, BlueprintBuilder, Cache, CssEngine, Database, LanguageVariant,
        ResourceManifest, ViewEngine, resolve,
    };
    pub use crate::error::{ExpressoError, ExpressoResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
