//! Transform module — quaternion TRS values and a parent/child hierarchy.
//!
//! [`Transform`] is a plain value. [`TransformHierarchy`] owns many of them,
//! links them into a tree and caches each node's world matrix until the node
//! or one of its ancestors changes.

mod hierarchy;
mod transform;

pub use hierarchy::{TransformHierarchy, TransformKey};
pub use transform::{look_rotation, Transform};
