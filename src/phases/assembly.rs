//! Phase 5: Assembly
//!
//! The final phase folds the ordered documents into one `FacesConfig`.
//!
//! ## Process
//!
//! 1.  **Fold**: Documents are applied in their final order to a single
//!     rule engine. Each document's records merge into the records built
//!     from the documents before it, so for any key the last document wins
//!     field by field.
//!
//! 2.  **Validation**: Records are validated as each element closes.
//!     Managed-bean exclusivity is checked again after every merge, since
//!     two individually valid declarations can conflict once combined.

use log::debug;

use super::OrderedDocuments;
use crate::error::Result;
use crate::rules::{FacesConfig, RuleEngine, RuleTable};

/// Executes Phase 5: merge the ordered documents into one model.
pub fn execute(ordered: &OrderedDocuments, table: &RuleTable) -> Result<FacesConfig> {
    let mut engine = RuleEngine::new(table);
    for document in &ordered.documents {
        debug!("Assembling {}", document.system_id());
        engine.apply(document)?;
    }
    let config = engine.finish()?;
    debug!(
        "Assembled {} managed bean(s), {} validator(s), {} navigation rule(s)",
        config.managed_beans.len(),
        config.validators.len(),
        config.navigation_rules.len()
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::DescriptorSummary;
    use crate::document::ConfigDocument;

    fn bean_doc(class: &str, scope: Option<&str>) -> ConfigDocument {
        let scope = scope
            .map(|s| format!("<managed-bean-scope>{}</managed-bean-scope>", s))
            .unwrap_or_default();
        ConfigDocument::parse(
            &format!(
                "<faces-config><managed-bean><managed-bean-name>bean</managed-bean-name>\
                 <managed-bean-class>{}</managed-bean-class>{}</managed-bean></faces-config>",
                class, scope
            ),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_phase5_last_document_wins() {
        let ordered = OrderedDocuments {
            documents: vec![
                bean_doc("First", Some("application")),
                bean_doc("Second", None),
                bean_doc("Third", None),
            ],
            summary: DescriptorSummary::default(),
        };
        let config = execute(&ordered, &RuleTable::default()).unwrap();
        let bean = config.managed_bean("bean").unwrap();
        assert_eq!(bean.managed_bean_class.as_deref(), Some("Third"));
        assert_eq!(bean.managed_bean_scope.as_deref(), Some("application"));
    }

    #[test]
    fn test_phase5_empty() {
        let ordered = OrderedDocuments {
            documents: Vec::new(),
            summary: DescriptorSummary::default(),
        };
        assert_eq!(
            execute(&ordered, &RuleTable::default()).unwrap(),
            FacesConfig::default()
        );
    }
}
