mod ff_tree;

#[doc(inline)]
pub use ff_tree::FirstFitTree;
