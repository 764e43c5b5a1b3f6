//! Tree ascent and pattern helpers.

use crate::template::{Element, NodeId, Template};
use regex::Regex;

/// First ancestor element of `id` satisfying `pred`, nearest first.
///
/// Ascent goes through the template's parent index and terminates at the
/// structural root; text and comment ancestors cannot occur but non-element
/// nodes are skipped defensively by the element lookup.
pub fn nearest_ancestor<P>(template: &Template, id: NodeId, pred: P) -> Option<NodeId>
where
    P: Fn(&Element) -> bool,
{
    template
        .ancestors(id)
        .find(|ancestor| template.element(*ancestor).is_some_and(&pred))
}

/// Builds the anchored alternation `^(v1|v2|…)$` over `values`.
///
/// Every value is metacharacter-escaped before joining, so names containing
/// regex metacharacters cannot corrupt the pattern.
///
/// # Errors
///
/// Returns the regex compile error for pathological inputs (in practice the
/// escaped alternation always compiles unless it exceeds the size limit).
pub fn to_pattern<I, S>(values: I) -> Result<Regex, regex::Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let escaped: Vec<String> = values
        .into_iter()
        .map(|v| regex::escape(v.as_ref()))
        .collect();
    Regex::new(&format!("^({})$", escaped.join("|")))
}
