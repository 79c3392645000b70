//! Domain Services
//!
//! Business logic operating on domain entities. The layer resolver walks
//! the registry directly; everything else here is pure.

mod condition_evaluator;
mod conflict_markers;
mod layer_resolver;
mod three_way_merge;

pub use condition_evaluator::{ConditionError, ConditionEvaluator, PathPattern};
pub use conflict_markers::{count_conflict_blocks, has_conflict_markers, strip_markers, ConflictSide};
pub use layer_resolver::{LayerDir, LayerResolver, ResolveError};
pub use three_way_merge::{
    merge, Conflict, MergeResult, LOCAL_MARKER, REMOTE_MARKER, SEPARATOR_MARKER,
};
