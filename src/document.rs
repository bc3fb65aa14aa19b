//! # Descriptor Documents
//!
//! A `ConfigDocument` is one parsed `faces-config` descriptor: an XML tree
//! held in its own `xot` arena plus the URL it was read from. Documents built
//! by populators have no source URL.
//!
//! Documents are immutable once parsing or population has finished. The
//! pipeline only moves whole documents around inside the result sequence.
//!
//! Element lookups compare local names only, so descriptors declared in any
//! of the historical namespaces (or none) are read the same way.

use std::fmt;

use url::Url;
use xot::{Node, Xot};

use crate::error::{Error, Result};

/// Wildcard entry in ordering lists, standing for every unnamed document.
pub const OTHERS: &str = "others";

/// Namespace of current descriptors.
pub const FACES_NAMESPACE: &str = "https://jakarta.ee/xml/ns/jakartaee";

/// Namespaces a validating parse accepts without a warning.
pub const KNOWN_NAMESPACES: &[&str] = &[
    FACES_NAMESPACE,
    "http://xmlns.jcp.org/xml/ns/javaee",
    "http://java.sun.com/xml/ns/javaee",
    "http://java.sun.com/JSF/Configuration",
];

/// Local name of the descriptor root element.
pub const ROOT_ELEMENT: &str = "faces-config";

const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Version stamped on documents created for populators.
const POPULATED_VERSION: &str = "4.0";

/// A parsed descriptor document.
pub struct ConfigDocument {
    xot: Xot,
    document: Node,
    root: Node,
    source: Option<Url>,
}

impl ConfigDocument {
    /// Parses descriptor text. `source` is recorded as the document's origin.
    pub fn parse(text: &str, source: Option<Url>) -> Result<Self> {
        let uri = describe_source(source.as_ref());
        let mut xot = Xot::new();
        let document = xot.parse(text).map_err(|e| Error::Parse {
            uri: uri.clone(),
            message: e.to_string(),
        })?;
        let root = xot
            .children(document)
            .find(|node| xot.is_element(*node))
            .ok_or_else(|| Error::InvalidDocument {
                uri,
                message: "document has no root element".to_string(),
            })?;

        Ok(Self {
            xot,
            document,
            root,
            source,
        })
    }

    /// Creates the empty descriptor handed to a populator.
    pub fn empty_descriptor() -> Result<Self> {
        let template = format!(
            r#"<{ROOT_ELEMENT} xmlns="{FACES_NAMESPACE}" version="{POPULATED_VERSION}"/>"#
        );
        Self::parse(&template, None)
    }

    /// The URL this document was read from, if any.
    pub fn source(&self) -> Option<&Url> {
        self.source.as_ref()
    }

    /// Identifier used in messages: the source URL, or a marker for
    /// programmatic documents.
    pub fn system_id(&self) -> String {
        describe_source(self.source.as_ref())
    }

    /// The document element.
    pub fn root(&self) -> Node {
        self.root
    }

    /// Logical name used as the ordering key.
    ///
    /// Taken from a non-blank `<name>` child of the root element, falling
    /// back to the system id.
    pub fn name(&self) -> String {
        self.child_named(self.root, "name")
            .map(|node| self.text(node))
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| self.system_id())
    }

    pub fn local_name(&self, node: Node) -> &str {
        match self.xot.element(node) {
            Some(element) => self.xot.local_name_str(element.name()),
            None => "",
        }
    }

    /// Namespace URI of an element; empty when it has none.
    pub fn namespace(&self, node: Node) -> &str {
        match self.xot.element(node) {
            Some(element) => {
                let namespace = self.xot.namespace_for_name(element.name());
                self.xot.namespace_str(namespace)
            }
            None => "",
        }
    }

    /// Element children of `node`, in document order.
    pub fn child_elements(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        self.xot
            .children(node)
            .filter(move |child| self.xot.is_element(*child))
    }

    /// Element children of `node` with the given local name.
    pub fn children_named<'a>(
        &'a self,
        node: Node,
        name: &'a str,
    ) -> impl Iterator<Item = Node> + 'a {
        self.child_elements(node)
            .filter(move |child| self.local_name(*child) == name)
    }

    pub fn child_named(&self, node: Node, name: &str) -> Option<Node> {
        self.children_named(node, name).next()
    }

    /// Trimmed concatenation of the text children of `node`.
    pub fn text(&self, node: Node) -> String {
        let mut text = String::new();
        for child in self.xot.children(node) {
            if let Some(value) = self.xot.text_str(child) {
                text.push_str(value);
            }
        }
        text.trim().to_string()
    }

    /// Value of an attribute without a namespace.
    pub fn attribute(&self, node: Node, local_name: &str) -> Option<&str> {
        let name = self.xot.name(local_name)?;
        self.xot.get_attribute(node, name)
    }

    /// Value of the `xml:lang` attribute.
    pub fn lang(&self, node: Node) -> Option<&str> {
        let namespace = self.xot.namespace(XML_NAMESPACE)?;
        let name = self.xot.name_ns("lang", namespace)?;
        self.xot.get_attribute(node, name)
    }

    /// Appends an empty element in the root's namespace under `parent`.
    pub fn append_element(&mut self, parent: Node, local_name: &str) -> Result<Node> {
        let namespace = match self.xot.element(self.root) {
            Some(element) => self.xot.namespace_for_name(element.name()),
            None => self.xot.add_namespace(FACES_NAMESPACE),
        };
        let name = self.xot.add_name_ns(local_name, namespace);
        let element = self.xot.new_element(name);
        self.xot
            .append(parent, element)
            .map_err(|e| self.mutation_error(e))?;
        Ok(element)
    }

    /// Appends `<local_name>text</local_name>` under `parent`.
    pub fn append_text_element(
        &mut self,
        parent: Node,
        local_name: &str,
        text: &str,
    ) -> Result<Node> {
        let element = self.append_element(parent, local_name)?;
        let text = self.xot.new_text(text);
        self.xot
            .append(element, text)
            .map_err(|e| self.mutation_error(e))?;
        Ok(element)
    }

    /// Serializes the whole document.
    pub fn to_xml(&self) -> Result<String> {
        self.xot
            .to_string(self.document)
            .map_err(|e| Error::InvalidDocument {
                uri: self.system_id(),
                message: e.to_string(),
            })
    }

    fn mutation_error(&self, error: xot::Error) -> Error {
        Error::InvalidDocument {
            uri: self.system_id(),
            message: error.to_string(),
        }
    }
}

impl fmt::Debug for ConfigDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigDocument")
            .field("name", &self.name())
            .field("source", &self.source.as_ref().map(Url::as_str))
            .finish()
    }
}

fn describe_source(source: Option<&Url>) -> String {
    match source {
        Some(url) => url.to_string(),
        None => "<programmatic>".to_string(),
    }
}
