//! # Descriptor Rules
//!
//! Turns parsed descriptor trees into the typed [`FacesConfig`] model.
//!
//! ## Key Components
//!
//! - **`RuleTable`**: Maps record element names such as `managed-bean` or
//!   `navigation-case` to a [`Rule`]. A rule builds the empty record for
//!   its element, validates the completed record and merges it into its
//!   parent.
//!
//! - **`RuleEngine`**: Walks a document depth-first with an explicit work
//!   stack and an explicit stack of open records. Entering a record element pushes a fresh record.
//!   Leaf elements write their text into the record on top of the stack.
//!   Leaving the element validates the record and hands it to its parent,
//!   which inserts it or merges it with the record of the same key.
//!
//! - **`Location`**: The document and element path of a record, used in
//!   validation errors.
//!
//! The root `faces-config` record is only pushed when the stack is empty.
//! Seeding the stack with an existing configuration therefore folds a new
//! document into it, which is how Phase 5 merges documents in order.

pub mod model;

use std::collections::HashMap;
use std::fmt;

use log::{debug, trace};
use xot::Node;

pub use model::{
    Application, EntryValue, FacesConfig, Features, Icon, ListEntries, LocalizedText, ManagedBean,
    ManagedProperty, MapEntries, MapEntry, NavigationCase, NavigationRule, ReferencedBean,
    ResourceBundle, Validator,
};

use crate::document::{ConfigDocument, ROOT_ELEMENT};
use crate::error::{Error, Result};
use model::merge_keyed;

/// Subtrees that describe ordering rather than configuration.
const SKIPPED_ELEMENTS: &[&str] = &["name", "ordering", "absolute-ordering"];

/// Where a record was declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub system_id: String,
    pub path: String,
}

impl Location {
    pub fn new(system_id: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            system_id: system_id.into(),
            path: path.into(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.system_id, self.path)
    }
}

/// A record under construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    FacesConfig(Box<FacesConfig>),
    Application(Application),
    ManagedBean(ManagedBean),
    ManagedProperty(ManagedProperty),
    ListEntries(ListEntries),
    MapEntries(MapEntries),
    MapEntry(MapEntry),
    Validator(Validator),
    ReferencedBean(ReferencedBean),
    ResourceBundle(ResourceBundle),
    NavigationRule(NavigationRule),
    NavigationCase(NavigationCase),
    Icon(Icon),
}

impl Record {
    fn features_mut(&mut self) -> Option<&mut Features> {
        match self {
            Record::ManagedBean(r) => Some(&mut r.features),
            Record::ManagedProperty(r) => Some(&mut r.features),
            Record::Validator(r) => Some(&mut r.features),
            Record::ReferencedBean(r) => Some(&mut r.features),
            Record::ResourceBundle(r) => Some(&mut r.features),
            Record::NavigationRule(r) => Some(&mut r.features),
            Record::NavigationCase(r) => Some(&mut r.features),
            _ => None,
        }
    }

    /// Applies a leaf element. Returns false when the record has no such
    /// field.
    fn set_field(&mut self, element: &str, text: &str, lang: Option<&str>) -> bool {
        if let Some(features) = self.features_mut() {
            if features.set_field(element, text, lang) {
                return true;
            }
        }
        match self {
            Record::FacesConfig(_) => false,
            Record::Application(r) => r.set_field(element, text),
            Record::ManagedBean(r) => r.set_field(element, text),
            Record::ManagedProperty(r) => r.set_field(element, text),
            Record::ListEntries(r) => r.set_field(element, text),
            Record::MapEntries(r) => r.set_field(element, text),
            Record::MapEntry(r) => r.set_field(element, text),
            Record::Validator(r) => r.set_field(element, text),
            Record::ReferencedBean(r) => r.set_field(element, text),
            Record::ResourceBundle(r) => r.set_field(element, text),
            Record::NavigationRule(r) => r.set_field(element, text),
            Record::NavigationCase(r) => r.set_field(element, text),
            Record::Icon(r) => r.set_field(element, text),
        }
    }

    /// Reads the attributes of the record's own element.
    fn begin(&mut self, document: &ConfigDocument, node: Node) {
        match self {
            Record::Icon(icon) => icon.lang = document.lang(node).map(str::to_string),
            Record::ManagedBean(bean) => {
                if let Some(eager) = document.attribute(node, "eager") {
                    bean.set_eager(eager);
                }
            }
            _ => {}
        }
    }

    fn validate(&self, location: &Location) -> Result<()> {
        match self {
            Record::ManagedBean(r) => r.validate(location),
            Record::ManagedProperty(r) => r.validate(location),
            Record::MapEntry(r) => r.validate(location),
            Record::Validator(r) => r.validate(location),
            Record::ReferencedBean(r) => r.validate(location),
            Record::ResourceBundle(r) => r.validate(location),
            Record::NavigationCase(r) => r.validate(location),
            _ => Ok(()),
        }
    }

    /// Inserts a completed child record into `parent`, merging it with an
    /// existing record of the same key. Records with no place in `parent`
    /// are dropped.
    pub fn attach(parent: &mut Record, child: Record, location: &Location) -> Result<()> {
        match (parent, child) {
            (parent, Record::Icon(icon)) => match parent.features_mut() {
                Some(features) => features.add_icon(icon),
                None => debug!("Ignoring icon at {}", location),
            },
            (Record::FacesConfig(config), Record::Application(app)) => {
                model::Merge::merge(&mut config.application, app);
            }
            (Record::FacesConfig(config), Record::ManagedBean(bean)) => {
                merge_keyed(&mut config.managed_beans, bean).check_exclusive(location)?;
            }
            (Record::FacesConfig(config), Record::Validator(validator)) => {
                merge_keyed(&mut config.validators, validator);
            }
            (Record::FacesConfig(config), Record::ReferencedBean(bean)) => {
                merge_keyed(&mut config.referenced_beans, bean);
            }
            (Record::FacesConfig(config), Record::NavigationRule(rule)) => {
                merge_keyed(&mut config.navigation_rules, rule);
            }
            (Record::Application(app), Record::ResourceBundle(bundle)) => {
                merge_keyed(&mut app.resource_bundles, bundle);
            }
            (Record::ManagedBean(bean), Record::ManagedProperty(property)) => {
                merge_keyed(&mut bean.managed_properties, property);
            }
            (Record::ManagedBean(bean), Record::ListEntries(list)) => {
                bean.list_entries = Some(list);
            }
            (Record::ManagedBean(bean), Record::MapEntries(map)) => {
                bean.map_entries = Some(map);
            }
            (Record::ManagedProperty(property), Record::ListEntries(list)) => {
                property.list_entries = Some(list);
            }
            (Record::ManagedProperty(property), Record::MapEntries(map)) => {
                property.map_entries = Some(map);
            }
            (Record::MapEntries(map), Record::MapEntry(entry)) => {
                merge_keyed(&mut map.entries, entry);
            }
            (Record::NavigationRule(rule), Record::NavigationCase(case)) => {
                merge_keyed(&mut rule.navigation_cases, case);
            }
            (_, child) => debug!("Ignoring misplaced record {:?} at {}", child, location),
        }
        Ok(())
    }
}

/// Handler for one record element.
///
/// `construct` builds the empty record, `validate` checks it once its
/// element closes and `attach` merges it into the record below it on the
/// stack.
#[derive(Clone, Copy)]
pub struct Rule {
    pub construct: fn() -> Record,
    pub validate: fn(&Record, &Location) -> Result<()>,
    pub attach: fn(&mut Record, Record, &Location) -> Result<()>,
}

impl Rule {
    pub fn new(construct: fn() -> Record) -> Self {
        Self {
            construct,
            validate: Record::validate,
            attach: Record::attach,
        }
    }

    pub fn with_validate(mut self, validate: fn(&Record, &Location) -> Result<()>) -> Self {
        self.validate = validate;
        self
    }

    pub fn with_attach(mut self, attach: fn(&mut Record, Record, &Location) -> Result<()>) -> Self {
        self.attach = attach;
        self
    }
}

/// Record element names and their rules.
#[derive(Clone)]
pub struct RuleTable {
    rules: HashMap<&'static str, Rule>,
}

impl Default for RuleTable {
    fn default() -> Self {
        let mut rules = HashMap::new();
        rules.insert("application", Rule::new(|| Record::Application(Application::default())));
        rules.insert("managed-bean", Rule::new(|| Record::ManagedBean(ManagedBean::default())));
        rules.insert(
            "managed-property",
            Rule::new(|| Record::ManagedProperty(ManagedProperty::default())),
        );
        rules.insert("list-entries", Rule::new(|| Record::ListEntries(ListEntries::default())));
        rules.insert("map-entries", Rule::new(|| Record::MapEntries(MapEntries::default())));
        rules.insert("map-entry", Rule::new(|| Record::MapEntry(MapEntry::default())));
        rules.insert("validator", Rule::new(|| Record::Validator(Validator::default())));
        rules.insert(
            "referenced-bean",
            Rule::new(|| Record::ReferencedBean(ReferencedBean::default())),
        );
        rules.insert(
            "resource-bundle",
            Rule::new(|| Record::ResourceBundle(ResourceBundle::default())),
        );
        rules.insert(
            "navigation-rule",
            Rule::new(|| Record::NavigationRule(NavigationRule::default())),
        );
        rules.insert(
            "navigation-case",
            Rule::new(|| Record::NavigationCase(NavigationCase::default())),
        );
        rules.insert("icon", Rule::new(|| Record::Icon(Icon::default())));
        Self { rules }
    }
}

impl RuleTable {
    pub fn get(&self, element: &str) -> Option<&Rule> {
        self.rules.get(element)
    }

    /// Registers or replaces the rule for an element.
    pub fn insert(&mut self, element: &'static str, rule: Rule) {
        self.rules.insert(element, rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Applies a [`RuleTable`] to documents.
pub struct RuleEngine<'a> {
    table: &'a RuleTable,
    stack: Vec<Record>,
}

impl<'a> RuleEngine<'a> {
    pub fn new(table: &'a RuleTable) -> Self {
        Self {
            table,
            stack: Vec::new(),
        }
    }

    /// Starts from an existing configuration; documents applied afterwards
    /// merge into it.
    pub fn with_config(table: &'a RuleTable, config: FacesConfig) -> Self {
        Self {
            table,
            stack: vec![Record::FacesConfig(Box::new(config))],
        }
    }

    /// Applies one document.
    pub fn apply(&mut self, document: &ConfigDocument) -> Result<()> {
        let root = document.root();
        let path = format!("/{}", document.local_name(root));
        self.visit(document, root, &path)
    }

    /// Finishes the walk and returns the configuration.
    pub fn finish(mut self) -> Result<FacesConfig> {
        match (self.stack.pop(), self.stack.is_empty()) {
            (Some(Record::FacesConfig(config)), true) => Ok(*config),
            (None, _) => Ok(FacesConfig::default()),
            (Some(other), _) => Err(Error::InvalidDocument {
                uri: "<merged>".to_string(),
                message: format!("unbalanced record stack ending in {:?}", other),
            }),
        }
    }

    fn visit(&mut self, document: &ConfigDocument, root: Node, path: &str) -> Result<()> {
        let mut work = vec![Step::Enter {
            node: root,
            path: path.to_string(),
        }];

        while let Some(step) = work.pop() {
            match step {
                Step::Enter { node, path } => {
                    let name = document.local_name(node);
                    if name == ROOT_ELEMENT {
                        if self.stack.is_empty() {
                            self.stack.push(Record::FacesConfig(Box::default()));
                        }
                    } else if let Some(rule) = self.table.get(name).copied() {
                        let mut record = (rule.construct)();
                        record.begin(document, node);
                        self.stack.push(record);
                        work.push(Step::Exit {
                            rule,
                            path: path.clone(),
                        });
                    } else {
                        let text = document.text(node);
                        if let Some(top) = self.stack.last_mut() {
                            if top.set_field(name, &text, document.lang(node)) {
                                trace!("{} = {:?}", path, text);
                            }
                        }
                    }
                    push_children(document, node, &path, &mut work);
                }
                Step::Exit { rule, path } => {
                    let location = Location::new(document.system_id(), path);
                    let record = self.stack.pop().ok_or_else(|| Error::InvalidDocument {
                        uri: document.system_id(),
                        message: format!("record stack underflow at {}", location.path),
                    })?;
                    (rule.validate)(&record, &location)?;
                    match self.stack.last_mut() {
                        Some(parent) => (rule.attach)(parent, record, &location)?,
                        None => debug!("Dropping record without parent at {}", location),
                    }
                }
            }
        }
        Ok(())
    }
}

/// Pending work for the document walk.
enum Step {
    Enter { node: Node, path: String },
    Exit { rule: Rule, path: String },
}

/// Queues the element children of `node` so they are entered in document
/// order.
fn push_children(document: &ConfigDocument, node: Node, path: &str, work: &mut Vec<Step>) {
    let at_root = path.matches('/').count() == 1;
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut children = Vec::new();
    for child in document.child_elements(node) {
        let name = document.local_name(child);
        let count = counts.entry(name).or_insert(0);
        *count += 1;
        if at_root && SKIPPED_ELEMENTS.contains(&name) {
            continue;
        }
        children.push(Step::Enter {
            node: child,
            path: format!("{}/{}[{}]", path, name, count),
        });
    }
    work.extend(children.into_iter().rev());
}
