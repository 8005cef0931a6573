mod export;
mod import;

/// External (serializable) representations of instances and solutions.
pub mod ext_repr;

/// Random generation of problem instances
pub mod generator;

/// Rendering of solutions as SVG documents
pub mod svg;

#[doc(inline)]
pub use export::export;
#[doc(inline)]
pub use export::export_instance;
#[doc(inline)]
pub use import::import;
