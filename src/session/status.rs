//! Status line text for a built project.

use crate::concepts::ConceptSet;

/// `"<name> [expresses no concepts]"` or
/// `"<name> [expresses N concept(s) from M categor(y|ies)]"`.
pub fn status_message(project_name: &str, concepts: &ConceptSet) -> String {
    let concept_count = concepts.len();
    if concept_count == 0 {
        return format!("{project_name} [expresses no concepts]");
    }

    let category_count = concepts.categories().len();
    format!(
        "{project_name} [expresses {concept_count} concept{} from {category_count} categor{}]",
        if concept_count == 1 { "" } else { "s" },
        if category_count == 1 { "y" } else { "ies" },
    )
}
