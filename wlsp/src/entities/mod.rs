mod instance;
mod rect;
mod solution;

#[doc(inline)]
pub use instance::Instance;
#[doc(inline)]
pub use instance::MetricStats;
#[doc(inline)]
pub use rect::Rect;
#[doc(inline)]
pub use solution::Level;
#[doc(inline)]
pub use solution::LevelOrder;
#[doc(inline)]
pub use solution::Solution;
