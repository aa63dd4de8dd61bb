//! Sub-entity gathering across one or many parents.

use engine_bridge::{EntityHandle, ScriptEngine};
use scribe_types::Category;

/// Collect every sub-entity of `category` under the given parents, in
/// parent order. Entities shared between parents appear once per parent;
/// callers that need a set must dedup themselves.
pub fn collect_sub_entities(
    engine: &dyn ScriptEngine,
    parents: &[EntityHandle],
    category: Category,
) -> Vec<EntityHandle> {
    let mut out = Vec::new();
    for parent in parents {
        out.extend(engine.sub_entities(parent, category));
    }
    out
}
