//! Orchestrator for a complete configuration load
//!
//! `Documents` holds the collaborators of a load (providers, parser,
//! populators, executor and rule table) and runs the phases in sequence.
//! `discover_and_order` stops after Phase 4 and returns the ordered
//! documents; `load` continues through Phase 5 and adds the merged model.

use std::sync::Arc;

use log::{debug, info};

use super::{phase1, phase2, phase3, phase4, phase5, OrderedDocuments};
use crate::error::Result;
use crate::executor::Executor;
use crate::parser::{DocumentParser, XmlDocumentParser};
use crate::provider::{Populator, ResourceProvider, APPLICATION_DESCRIPTOR};
use crate::rules::{FacesConfig, RuleTable};

/// Result of a full load: the ordered documents and their merged model.
#[derive(Debug)]
pub struct LoadedConfig {
    pub documents: OrderedDocuments,
    pub config: FacesConfig,
}

/// Configuration load driver.
pub struct Documents {
    providers: Vec<Arc<dyn ResourceProvider>>,
    parser: Arc<dyn DocumentParser>,
    populators: Vec<Arc<dyn Populator>>,
    executor: Executor,
    application_descriptor: String,
    rules: RuleTable,
}

impl Default for Documents {
    fn default() -> Self {
        Self::new()
    }
}

impl Documents {
    /// A driver with no providers, a non-validating XML parser and inline
    /// execution.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            parser: Arc::new(XmlDocumentParser::default()),
            populators: Vec::new(),
            executor: Executor::Inline,
            application_descriptor: APPLICATION_DESCRIPTOR.to_string(),
            rules: RuleTable::default(),
        }
    }

    pub fn with_provider(mut self, provider: Arc<dyn ResourceProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn with_providers<I>(mut self, providers: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn ResourceProvider>>,
    {
        self.providers.extend(providers);
        self
    }

    pub fn with_parser(mut self, parser: Arc<dyn DocumentParser>) -> Self {
        self.parser = parser;
        self
    }

    /// Registers a populator. The first registered populator produces the
    /// implementation-default descriptor.
    pub fn with_populator(mut self, populator: Arc<dyn Populator>) -> Self {
        self.populators.push(populator);
        self
    }

    pub fn with_executor(mut self, executor: Executor) -> Self {
        self.executor = executor;
        self
    }

    /// Overrides the path that identifies the application descriptor.
    pub fn with_application_descriptor(mut self, path: impl Into<String>) -> Self {
        self.application_descriptor = path.into();
        self
    }

    pub fn with_rules(mut self, rules: RuleTable) -> Self {
        self.rules = rules;
        self
    }

    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Runs Phases 1-4.
    ///
    /// 1. Discover descriptor URLs from every provider
    /// 2. Parse each unique URL
    /// 3. Run the populators and splice their documents in
    /// 4. Summarise the application descriptor and order the documents
    pub fn discover_and_order(&self) -> Result<OrderedDocuments> {
        // Phase 1: Discovery
        let urls = phase1::execute(&self.providers, &self.executor)?;
        debug!("Discovered {} descriptor(s)", urls.len());

        // Phase 2: Parsing
        let parsed = phase2::execute(&urls, &self.parser, &self.executor)?;

        // Phase 3: Population
        let collected = phase3::execute(&self.populators, parsed)?;

        // Phase 4: Ordering
        let ordered = phase4::execute(collected, &self.application_descriptor)?;
        debug!("Document order: {:?}", ordered.names());
        Ok(ordered)
    }

    /// Runs all five phases.
    pub fn load(&self) -> Result<LoadedConfig> {
        let documents = self.discover_and_order()?;

        // Phase 5: Assembly
        let config = phase5::execute(&documents, &self.rules)?;
        info!(
            "Loaded {} descriptor(s) (version {}, metadata-complete: {})",
            documents.len(),
            documents.summary.version,
            documents.summary.metadata_complete
        );
        Ok(LoadedConfig { documents, config })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ConfigDocument;
    use crate::error::Error;
    use crate::provider::StaticProvider;
    use url::Url;

    /// Builds documents from an in-memory table of URL path to XML.
    struct MapParser(Vec<(&'static str, String)>);

    impl DocumentParser for MapParser {
        fn parse(&self, url: &Url) -> Result<ConfigDocument> {
            let text = self
                .0
                .iter()
                .find(|(path, _)| *path == url.path())
                .map(|(_, text)| text.clone())
                .ok_or_else(|| Error::Parse {
                    uri: url.to_string(),
                    message: "not found".to_string(),
                })?;
            ConfigDocument::parse(&text, Some(url.clone()))
        }
    }

    struct DefaultPopulator;

    impl Populator for DefaultPopulator {
        fn name(&self) -> &str {
            "impl-default"
        }

        fn populate(&self, document: &mut ConfigDocument) -> Result<()> {
            let root = document.root();
            document.append_text_element(root, "name", "impl")?;
            let bean = document.append_element(root, "managed-bean")?;
            document.append_text_element(bean, "managed-bean-name", "shared")?;
            document.append_text_element(bean, "managed-bean-class", "impl.Shared")?;
            document.append_text_element(bean, "managed-bean-scope", "application")?;
            Ok(())
        }
    }

    fn library(name: &str, ordering: &str, class: &str) -> String {
        format!(
            "<faces-config version=\"4.0\"><name>{}</name>{}\
             <managed-bean><managed-bean-name>shared</managed-bean-name>\
             <managed-bean-class>{}</managed-bean-class></managed-bean></faces-config>",
            name, ordering, class
        )
    }

    fn fixture() -> Documents {
        let parser = MapParser(vec![
            (
                "/lib/a.xml",
                library("a", "<ordering><after><name>b</name></after></ordering>", "A"),
            ),
            ("/lib/b.xml", library("b", "", "B")),
            (
                "/app/WEB-INF/faces-config.xml",
                "<faces-config version=\"4.0\"/>".to_string(),
            ),
        ]);
        let url = |p: &str| Url::parse(&format!("file://{}", p)).unwrap();
        Documents::new()
            .with_provider(Arc::new(StaticProvider::new(
                "webapp",
                vec![url("/app/WEB-INF/faces-config.xml")],
            )))
            .with_provider(Arc::new(StaticProvider::new(
                "libs",
                vec![url("/lib/a.xml"), url("/lib/b.xml"), url("/lib/a.xml")],
            )))
            .with_parser(Arc::new(parser))
            .with_populator(Arc::new(DefaultPopulator))
    }

    #[test]
    fn test_discover_and_order_anchors() {
        let ordered = fixture().discover_and_order().unwrap();
        let names = ordered.names();
        assert_eq!(names.len(), 4);
        assert_eq!(names[0], "impl");
        assert_eq!(&names[1..3], &["b", "a"]);
        assert!(names[3].ends_with("/WEB-INF/faces-config.xml"));
        assert_eq!(ordered.summary.version, 4.0);
    }

    #[test]
    fn test_load_merges_in_final_order() {
        let loaded = fixture().load().unwrap();
        let bean = loaded.config.managed_bean("shared").unwrap();
        // a sorts after b, so its class wins; the scope comes from the default.
        assert_eq!(bean.managed_bean_class.as_deref(), Some("A"));
        assert_eq!(bean.managed_bean_scope.as_deref(), Some("application"));
    }

    #[test]
    fn test_pool_matches_inline() {
        let inline = fixture().discover_and_order().unwrap();
        let pooled = fixture()
            .with_executor(Executor::pool(4).unwrap())
            .discover_and_order()
            .unwrap();
        let xml = |o: &OrderedDocuments| -> Vec<String> {
            o.documents.iter().map(|d| d.to_xml().unwrap()).collect()
        };
        assert_eq!(xml(&inline), xml(&pooled));
    }

    #[test]
    fn test_parse_failure_aborts_load() {
        let docs = fixture().with_provider(Arc::new(StaticProvider::new(
            "missing",
            vec![Url::parse("file:///lib/missing.xml").unwrap()],
        )));
        assert!(matches!(docs.load(), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_empty_load() {
        let loaded = Documents::new().load().unwrap();
        assert!(loaded.documents.is_empty());
        assert_eq!(loaded.config, FacesConfig::default());
    }
}
