//! Typed configuration records and their merge policies.
//!
//! Each record type knows three things:
//!
//! - how to accept the text of its leaf child elements (`set_field`),
//! - which fields it requires (`validate`),
//! - how a newer record with the same key folds into it (`Merge`).
//!
//! The merge policy is the same everywhere: a scalar from the newer record
//! replaces the older value only when the newer one is present; keyed
//! collections merge entry by entry, appending unseen keys.

use serde::Serialize;

use super::Location;
use crate::error::{Error, Result};

/// Folds a newer record with the same key into `self`.
pub trait Merge {
    fn merge(&mut self, newer: Self);
}

/// Records stored in keyed collections.
pub trait Keyed {
    type Key: PartialEq;

    fn key(&self) -> Self::Key;
}

/// Replaces `slot` with `newer` when `newer` is present.
fn overlay<T>(slot: &mut Option<T>, newer: Option<T>) {
    if newer.is_some() {
        *slot = newer;
    }
}

/// Inserts `incoming` or merges it into the entry with the same key.
/// Returns the stored entry.
pub fn merge_keyed<T: Keyed + Merge>(items: &mut Vec<T>, incoming: T) -> &mut T {
    let key = incoming.key();
    match items.iter().position(|item| item.key() == key) {
        Some(index) => {
            items[index].merge(incoming);
            &mut items[index]
        }
        None => {
            items.push(incoming);
            let last = items.len() - 1;
            &mut items[last]
        }
    }
}

fn text_value(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

fn flag_value(text: &str) -> bool {
    text.is_empty() || text.eq_ignore_ascii_case("true")
}

fn require(value: &Option<String>, element: &str, field: &str, location: &Location) -> Result<()> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(Error::MissingField {
            element: element.to_string(),
            field: field.to_string(),
            location: location.to_string(),
        }),
    }
}

/// Text tagged with an optional `xml:lang`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    pub text: String,
}

impl Keyed for LocalizedText {
    type Key = Option<String>;

    fn key(&self) -> Option<String> {
        self.lang.clone()
    }
}

impl Merge for LocalizedText {
    fn merge(&mut self, newer: Self) {
        self.text = newer.text;
    }
}

/// Small and large icon paths for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Icon {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_icon: Option<String>,
}

impl Icon {
    pub(crate) fn set_field(&mut self, element: &str, text: &str) -> bool {
        match element {
            "small-icon" => self.small_icon = text_value(text),
            "large-icon" => self.large_icon = text_value(text),
            _ => return false,
        }
        true
    }
}

impl Keyed for Icon {
    type Key = Option<String>;

    fn key(&self) -> Option<String> {
        self.lang.clone()
    }
}

impl Merge for Icon {
    fn merge(&mut self, newer: Self) {
        overlay(&mut self.small_icon, newer.small_icon);
        overlay(&mut self.large_icon, newer.large_icon);
    }
}

/// Descriptions, display names and icons, keyed by language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Features {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<LocalizedText>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub display_names: Vec<LocalizedText>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub icons: Vec<Icon>,
}

impl Features {
    pub fn description(&self, lang: Option<&str>) -> Option<&str> {
        self.descriptions
            .iter()
            .find(|d| d.lang.as_deref() == lang)
            .map(|d| d.text.as_str())
    }

    pub fn display_name(&self, lang: Option<&str>) -> Option<&str> {
        self.display_names
            .iter()
            .find(|d| d.lang.as_deref() == lang)
            .map(|d| d.text.as_str())
    }

    pub(crate) fn set_field(&mut self, element: &str, text: &str, lang: Option<&str>) -> bool {
        let entry = LocalizedText {
            lang: lang.map(str::to_string),
            text: text.to_string(),
        };
        match element {
            "description" => merge_keyed(&mut self.descriptions, entry),
            "display-name" => merge_keyed(&mut self.display_names, entry),
            _ => return false,
        };
        true
    }

    pub(crate) fn add_icon(&mut self, icon: Icon) {
        merge_keyed(&mut self.icons, icon);
    }
}

impl Merge for Features {
    fn merge(&mut self, newer: Self) {
        for description in newer.descriptions {
            merge_keyed(&mut self.descriptions, description);
        }
        for display_name in newer.display_names {
            merge_keyed(&mut self.display_names, display_name);
        }
        for icon in newer.icons {
            merge_keyed(&mut self.icons, icon);
        }
    }
}

/// Value of a property, list entry or map entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryValue {
    Value(String),
    NullValue,
}

impl EntryValue {
    fn from_field(element: &str, text: &str) -> Option<Self> {
        match element {
            "value" => Some(EntryValue::Value(text.to_string())),
            "null-value" => Some(EntryValue::NullValue),
            _ => None,
        }
    }
}

/// `<list-entries>`: an ordered list of values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ListEntries {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_class: Option<String>,
    pub values: Vec<EntryValue>,
}

impl ListEntries {
    pub(crate) fn set_field(&mut self, element: &str, text: &str) -> bool {
        if element == "value-class" {
            self.value_class = text_value(text);
            return true;
        }
        match EntryValue::from_field(element, text) {
            Some(value) => {
                self.values.push(value);
                true
            }
            None => false,
        }
    }
}

impl Merge for ListEntries {
    /// Values have no identity of their own, so a newer non-empty list
    /// replaces the older one.
    fn merge(&mut self, newer: Self) {
        overlay(&mut self.value_class, newer.value_class);
        if !newer.values.is_empty() {
            self.values = newer.values;
        }
    }
}

/// `<map-entry>`: one keyed value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MapEntry {
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<EntryValue>,
}

impl MapEntry {
    pub(crate) fn set_field(&mut self, element: &str, text: &str) -> bool {
        if element == "key" {
            self.key = text_value(text);
            return true;
        }
        match EntryValue::from_field(element, text) {
            Some(value) => {
                self.value = Some(value);
                true
            }
            None => false,
        }
    }

    pub fn validate(&self, location: &Location) -> Result<()> {
        require(&self.key, "map-entry", "key", location)
    }
}

impl Keyed for MapEntry {
    type Key = Option<String>;

    fn key(&self) -> Option<String> {
        self.key.clone()
    }
}

impl Merge for MapEntry {
    fn merge(&mut self, newer: Self) {
        overlay(&mut self.value, newer.value);
    }
}

/// `<map-entries>`: map entries keyed by `<key>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct MapEntries {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_class: Option<String>,
    pub entries: Vec<MapEntry>,
}

impl MapEntries {
    pub(crate) fn set_field(&mut self, element: &str, text: &str) -> bool {
        match element {
            "key-class" => self.key_class = text_value(text),
            "value-class" => self.value_class = text_value(text),
            _ => return false,
        }
        true
    }

    pub fn get(&self, key: &str) -> Option<&EntryValue> {
        self.entries
            .iter()
            .find(|entry| entry.key.as_deref() == Some(key))
            .and_then(|entry| entry.value.as_ref())
    }
}

impl Merge for MapEntries {
    fn merge(&mut self, newer: Self) {
        overlay(&mut self.key_class, newer.key_class);
        overlay(&mut self.value_class, newer.value_class);
        for entry in newer.entries {
            merge_keyed(&mut self.entries, entry);
        }
    }
}

fn merge_optional<T: Merge>(slot: &mut Option<T>, newer: Option<T>) {
    match (slot.as_mut(), newer) {
        (Some(existing), Some(newer)) => existing.merge(newer),
        (None, Some(newer)) => *slot = Some(newer),
        (_, None) => {}
    }
}

/// `<managed-property>` of a managed bean.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ManagedProperty {
    #[serde(flatten)]
    pub features: Features,
    pub property_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<EntryValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_entries: Option<ListEntries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_entries: Option<MapEntries>,
}

impl ManagedProperty {
    pub(crate) fn set_field(&mut self, element: &str, text: &str) -> bool {
        match element {
            "property-name" => self.property_name = text_value(text),
            "property-class" => self.property_class = text_value(text),
            _ => match EntryValue::from_field(element, text) {
                Some(value) => self.value = Some(value),
                None => return false,
            },
        }
        true
    }

    pub fn validate(&self, location: &Location) -> Result<()> {
        require(&self.property_name, "managed-property", "property-name", location)?;
        let kinds = [
            self.value.is_some(),
            self.list_entries.is_some(),
            self.map_entries.is_some(),
        ];
        if kinds.iter().filter(|&&declared| declared).count() > 1 {
            return Err(Error::ConflictingEntries {
                element: "managed-property".to_string(),
                key: self.property_name.clone().unwrap_or_default(),
                message: "only one of value, null-value, list-entries or map-entries may be declared"
                    .to_string(),
                location: location.to_string(),
            });
        }
        Ok(())
    }
}

impl Keyed for ManagedProperty {
    type Key = Option<String>;

    fn key(&self) -> Option<String> {
        self.property_name.clone()
    }
}

impl Merge for ManagedProperty {
    fn merge(&mut self, newer: Self) {
        self.features.merge(newer.features);
        overlay(&mut self.property_class, newer.property_class);
        // The kind of value is replaced as a whole.
        if newer.value.is_some() || newer.list_entries.is_some() || newer.map_entries.is_some() {
            self.value = None;
            self.list_entries = None;
            self.map_entries = None;
        }
        overlay(&mut self.value, newer.value);
        merge_optional(&mut self.list_entries, newer.list_entries);
        merge_optional(&mut self.map_entries, newer.map_entries);
    }
}

/// `<managed-bean>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ManagedBean {
    #[serde(flatten)]
    pub features: Features,
    pub managed_bean_name: Option<String>,
    pub managed_bean_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_bean_scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eager: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub managed_properties: Vec<ManagedProperty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_entries: Option<ListEntries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_entries: Option<MapEntries>,
}

impl ManagedBean {
    pub(crate) fn set_field(&mut self, element: &str, text: &str) -> bool {
        match element {
            "managed-bean-name" => self.managed_bean_name = text_value(text),
            "managed-bean-class" => self.managed_bean_class = text_value(text),
            "managed-bean-scope" => self.managed_bean_scope = text_value(text),
            _ => return false,
        }
        true
    }

    pub(crate) fn set_eager(&mut self, value: &str) {
        self.eager = Some(value.trim().eq_ignore_ascii_case("true"));
    }

    pub fn property(&self, name: &str) -> Option<&ManagedProperty> {
        self.managed_properties
            .iter()
            .find(|p| p.property_name.as_deref() == Some(name))
    }

    /// Checks the required fields and the exclusivity of list entries,
    /// map entries and managed properties.
    pub fn validate(&self, location: &Location) -> Result<()> {
        require(&self.managed_bean_name, "managed-bean", "managed-bean-name", location)?;
        require(&self.managed_bean_class, "managed-bean", "managed-bean-class", location)?;
        self.check_exclusive(location)
    }

    pub(crate) fn check_exclusive(&self, location: &Location) -> Result<()> {
        let conflict = |message: &str| Error::ConflictingEntries {
            element: "managed-bean".to_string(),
            key: self.managed_bean_name.clone().unwrap_or_default(),
            message: message.to_string(),
            location: location.to_string(),
        };
        if self.list_entries.is_some() {
            if self.map_entries.is_some() {
                return Err(conflict("list-entries cannot be combined with map-entries"));
            }
            if !self.managed_properties.is_empty() {
                return Err(conflict(
                    "list-entries cannot be combined with managed-property",
                ));
            }
        }
        if self.map_entries.is_some() && !self.managed_properties.is_empty() {
            return Err(conflict("map-entries cannot be combined with managed-property"));
        }
        Ok(())
    }
}

impl Keyed for ManagedBean {
    type Key = Option<String>;

    fn key(&self) -> Option<String> {
        self.managed_bean_name.clone()
    }
}

impl Merge for ManagedBean {
    fn merge(&mut self, newer: Self) {
        self.features.merge(newer.features);
        overlay(&mut self.managed_bean_class, newer.managed_bean_class);
        overlay(&mut self.managed_bean_scope, newer.managed_bean_scope);
        overlay(&mut self.eager, newer.eager);
        for property in newer.managed_properties {
            merge_keyed(&mut self.managed_properties, property);
        }
        merge_optional(&mut self.list_entries, newer.list_entries);
        merge_optional(&mut self.map_entries, newer.map_entries);
    }
}

/// `<validator>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Validator {
    #[serde(flatten)]
    pub features: Features,
    pub validator_id: Option<String>,
    pub validator_class: Option<String>,
}

impl Validator {
    pub(crate) fn set_field(&mut self, element: &str, text: &str) -> bool {
        match element {
            "validator-id" => self.validator_id = text_value(text),
            "validator-class" => self.validator_class = text_value(text),
            _ => return false,
        }
        true
    }

    pub fn validate(&self, location: &Location) -> Result<()> {
        require(&self.validator_id, "validator", "validator-id", location)?;
        require(&self.validator_class, "validator", "validator-class", location)
    }
}

impl Keyed for Validator {
    type Key = Option<String>;

    fn key(&self) -> Option<String> {
        self.validator_id.clone()
    }
}

impl Merge for Validator {
    fn merge(&mut self, newer: Self) {
        self.features.merge(newer.features);
        overlay(&mut self.validator_class, newer.validator_class);
    }
}

/// `<referenced-bean>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReferencedBean {
    #[serde(flatten)]
    pub features: Features,
    pub referenced_bean_name: Option<String>,
    pub referenced_bean_class: Option<String>,
}

impl ReferencedBean {
    pub(crate) fn set_field(&mut self, element: &str, text: &str) -> bool {
        match element {
            "referenced-bean-name" => self.referenced_bean_name = text_value(text),
            "referenced-bean-class" => self.referenced_bean_class = text_value(text),
            _ => return false,
        }
        true
    }

    pub fn validate(&self, location: &Location) -> Result<()> {
        require(&self.referenced_bean_name, "referenced-bean", "referenced-bean-name", location)?;
        require(&self.referenced_bean_class, "referenced-bean", "referenced-bean-class", location)
    }
}

impl Keyed for ReferencedBean {
    type Key = Option<String>;

    fn key(&self) -> Option<String> {
        self.referenced_bean_name.clone()
    }
}

impl Merge for ReferencedBean {
    fn merge(&mut self, newer: Self) {
        self.features.merge(newer.features);
        overlay(&mut self.referenced_bean_class, newer.referenced_bean_class);
    }
}

/// `<resource-bundle>`, keyed by its `var`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ResourceBundle {
    #[serde(flatten)]
    pub features: Features,
    pub base_name: Option<String>,
    pub var: Option<String>,
}

impl ResourceBundle {
    pub(crate) fn set_field(&mut self, element: &str, text: &str) -> bool {
        match element {
            "base-name" => self.base_name = text_value(text),
            "var" => self.var = text_value(text),
            _ => return false,
        }
        true
    }

    pub fn validate(&self, location: &Location) -> Result<()> {
        require(&self.base_name, "resource-bundle", "base-name", location)?;
        require(&self.var, "resource-bundle", "var", location)
    }
}

impl Keyed for ResourceBundle {
    type Key = Option<String>;

    fn key(&self) -> Option<String> {
        self.var.clone()
    }
}

impl Merge for ResourceBundle {
    fn merge(&mut self, newer: Self) {
        self.features.merge(newer.features);
        overlay(&mut self.base_name, newer.base_name);
    }
}

/// `<navigation-case>`, keyed by its action, outcome and condition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct NavigationCase {
    #[serde(flatten)]
    pub features: Features,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_outcome: Option<String>,
    #[serde(rename = "if", skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    pub to_view_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<bool>,
}

impl NavigationCase {
    pub(crate) fn set_field(&mut self, element: &str, text: &str) -> bool {
        match element {
            "from-action" => self.from_action = text_value(text),
            "from-outcome" => self.from_outcome = text_value(text),
            "if" => self.condition = text_value(text),
            "to-view-id" => self.to_view_id = text_value(text),
            "redirect" => self.redirect = Some(flag_value(text)),
            _ => return false,
        }
        true
    }

    pub fn validate(&self, location: &Location) -> Result<()> {
        require(&self.to_view_id, "navigation-case", "to-view-id", location)
    }
}

impl Keyed for NavigationCase {
    type Key = (Option<String>, Option<String>, Option<String>);

    fn key(&self) -> Self::Key {
        (
            self.from_action.clone(),
            self.from_outcome.clone(),
            self.condition.clone(),
        )
    }
}

impl Merge for NavigationCase {
    fn merge(&mut self, newer: Self) {
        self.features.merge(newer.features);
        overlay(&mut self.to_view_id, newer.to_view_id);
        overlay(&mut self.redirect, newer.redirect);
    }
}

/// `<navigation-rule>`, keyed by its `from-view-id` (`*` when absent).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct NavigationRule {
    #[serde(flatten)]
    pub features: Features,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_view_id: Option<String>,
    pub navigation_cases: Vec<NavigationCase>,
}

impl NavigationRule {
    pub(crate) fn set_field(&mut self, element: &str, text: &str) -> bool {
        if element == "from-view-id" {
            self.from_view_id = text_value(text);
            return true;
        }
        false
    }

    pub fn view_id(&self) -> &str {
        self.from_view_id.as_deref().unwrap_or("*")
    }
}

impl Keyed for NavigationRule {
    type Key = String;

    fn key(&self) -> String {
        self.view_id().to_string()
    }
}

impl Merge for NavigationRule {
    fn merge(&mut self, newer: Self) {
        self.features.merge(newer.features);
        for case in newer.navigation_cases {
            merge_keyed(&mut self.navigation_cases, case);
        }
    }
}

/// `<application>`: one per configuration, merged across documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Application {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_listener: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation_handler: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_handler: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_manager: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_bundle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_locale: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub supported_locales: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub el_resolvers: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resource_bundles: Vec<ResourceBundle>,
}

impl Application {
    pub(crate) fn set_field(&mut self, element: &str, text: &str) -> bool {
        match element {
            "action-listener" => self.action_listener = text_value(text),
            "navigation-handler" => self.navigation_handler = text_value(text),
            "view-handler" => self.view_handler = text_value(text),
            "state-manager" => self.state_manager = text_value(text),
            "message-bundle" => self.message_bundle = text_value(text),
            "default-locale" => self.default_locale = text_value(text),
            "supported-locale" => push_unique(&mut self.supported_locales, text),
            "el-resolver" => push_unique(&mut self.el_resolvers, text),
            _ => return false,
        }
        true
    }

    pub fn resource_bundle(&self, var: &str) -> Option<&ResourceBundle> {
        self.resource_bundles
            .iter()
            .find(|b| b.var.as_deref() == Some(var))
    }
}

fn push_unique(values: &mut Vec<String>, text: &str) {
    if !text.is_empty() && !values.iter().any(|v| v == text) {
        values.push(text.to_string());
    }
}

impl Merge for Application {
    fn merge(&mut self, newer: Self) {
        overlay(&mut self.action_listener, newer.action_listener);
        overlay(&mut self.navigation_handler, newer.navigation_handler);
        overlay(&mut self.view_handler, newer.view_handler);
        overlay(&mut self.state_manager, newer.state_manager);
        overlay(&mut self.message_bundle, newer.message_bundle);
        overlay(&mut self.default_locale, newer.default_locale);
        for locale in newer.supported_locales {
            push_unique(&mut self.supported_locales, &locale);
        }
        for resolver in newer.el_resolvers {
            push_unique(&mut self.el_resolvers, &resolver);
        }
        for bundle in newer.resource_bundles {
            merge_keyed(&mut self.resource_bundles, bundle);
        }
    }
}

/// The merged configuration of all documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct FacesConfig {
    pub application: Application,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub managed_beans: Vec<ManagedBean>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub referenced_beans: Vec<ReferencedBean>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub navigation_rules: Vec<NavigationRule>,
}

impl FacesConfig {
    pub fn managed_bean(&self, name: &str) -> Option<&ManagedBean> {
        self.managed_beans
            .iter()
            .find(|b| b.managed_bean_name.as_deref() == Some(name))
    }

    pub fn validator(&self, id: &str) -> Option<&Validator> {
        self.validators
            .iter()
            .find(|v| v.validator_id.as_deref() == Some(id))
    }

    pub fn referenced_bean(&self, name: &str) -> Option<&ReferencedBean> {
        self.referenced_beans
            .iter()
            .find(|b| b.referenced_bean_name.as_deref() == Some(name))
    }

    pub fn navigation_rule(&self, from_view_id: &str) -> Option<&NavigationRule> {
        self.navigation_rules
            .iter()
            .find(|r| r.view_id() == from_view_id)
    }
}
