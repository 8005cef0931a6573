mod chromosome;
mod decoder;
mod shaking;

#[doc(inline)]
pub use chromosome::Chromosome;
#[doc(inline)]
pub use decoder::Decoder;
#[doc(inline)]
pub use decoder::NextFitDecoder;
#[doc(inline)]
pub use shaking::ShakeReport;
#[doc(inline)]
pub use shaking::par_shake_populations;
#[doc(inline)]
pub use shaking::shake_chromosome;
#[doc(inline)]
pub use shaking::shake_populations;
