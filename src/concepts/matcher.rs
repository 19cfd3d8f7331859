//! The concept matcher.

use super::catalog::Catalog;
use super::context::MatchContext;
use super::set::ConceptSet;
use crate::model::{ElementOracle, OracleError, OracleResult, SourceElement};

/// Result of classifying one element.
///
/// `failures` lists the oracle errors hit while evaluating rules; each
/// failed rule counted as not matching.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Classification {
    pub concepts: ConceptSet,
    pub failures: Vec<OracleError>,
}

impl Classification {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Decides which catalog concepts an element expresses.
#[derive(Clone, Debug, Default)]
pub struct ConceptMatcher {
    catalog: Catalog,
}

impl ConceptMatcher {
    /// A matcher over the built-in jMolecules catalog.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Evaluate every concept against `element`, collecting rule failures
    /// instead of stopping at them.
    pub fn classify<O>(&self, element: &SourceElement, cx: &mut MatchContext<'_, O>) -> Classification
    where
        O: ElementOracle + ?Sized,
    {
        let kind = element.kind();
        let mut matched = Vec::new();
        let mut failures: Vec<OracleError> = Vec::new();

        for (concept, rules) in self.catalog.iter() {
            for rule in rules.iter().filter(|rule| rule.applies_to(&kind)) {
                match rule.matches(element, cx) {
                    Ok(true) => {
                        matched.push(concept);
                        break;
                    }
                    Ok(false) => {}
                    Err(err) => {
                        if !failures.contains(&err) {
                            failures.push(err);
                        }
                    }
                }
            }
        }

        Classification {
            concepts: matched.into_iter().collect(),
            failures,
        }
    }

    /// The concepts `element` expresses. Rules whose evidence cannot be read
    /// count as not matching; the failures are logged.
    pub fn expresses<O>(&self, element: &SourceElement, cx: &mut MatchContext<'_, O>) -> ConceptSet
    where
        O: ElementOracle + ?Sized,
    {
        let classification = self.classify(element, cx);
        for failure in &classification.failures {
            tracing::warn!(
                "[MATCH] {} {}: rule skipped: {}",
                element.kind().as_str(),
                element.id(),
                failure
            );
        }
        classification.concepts
    }

    /// Like [`ConceptMatcher::expresses`], but the first oracle failure is
    /// returned instead of being treated as a non-match.
    pub fn try_expresses<O>(
        &self,
        element: &SourceElement,
        cx: &mut MatchContext<'_, O>,
    ) -> OracleResult<ConceptSet>
    where
        O: ElementOracle + ?Sized,
    {
        let kind = element.kind();
        let mut matched = Vec::new();
        for (concept, rules) in self.catalog.iter() {
            for rule in rules.iter().filter(|rule| rule.applies_to(&kind)) {
                if rule.matches(element, cx)? {
                    matched.push(concept);
                    break;
                }
            }
        }
        Ok(matched.into_iter().collect())
    }
}
