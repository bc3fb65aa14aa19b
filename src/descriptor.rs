//! # Descriptor Summary
//!
//! Reads the header information of the application descriptor
//! (`WEB-INF/faces-config.xml`): the declared version, whether annotation
//! scanning is switched off via `metadata-complete`, and the optional
//! `<absolute-ordering>` that overrides per-document ordering.
//!
//! Ordering information is only honoured in an application descriptor of
//! version 2.0 or later. Libraries may not impose an absolute ordering on
//! the application.

use log::warn;
use serde::Serialize;

use crate::document::{ConfigDocument, OTHERS};
use crate::error::{Error, Result};

/// Version assumed when the root element has no `version` attribute.
pub const DEFAULT_VERSION: f64 = 1.1;

/// First version with ordering and annotation scanning.
const ORDERING_VERSION: f64 = 2.0;

/// Summary of the application descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptorSummary {
    /// Declared descriptor version.
    pub version: f64,
    /// Whether annotation scanning is disabled.
    pub metadata_complete: bool,
    /// Explicit document order, with `others` as a placeholder.
    pub absolute_ordering: Option<Vec<String>>,
    /// Whether the summarised document is the application descriptor.
    pub is_application_descriptor: bool,
}

impl Default for DescriptorSummary {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION,
            metadata_complete: true,
            absolute_ordering: None,
            is_application_descriptor: false,
        }
    }
}

impl DescriptorSummary {
    /// Summarises `document`, which is the application descriptor when its
    /// source URL ends with `application_descriptor`.
    pub fn from_document(
        document: Option<&ConfigDocument>,
        application_descriptor: &str,
    ) -> Result<Self> {
        let Some(document) = document else {
            return Ok(Self::default());
        };

        let is_application_descriptor = is_application_descriptor(document, application_descriptor);
        let version = read_version(document)?;
        let metadata_complete = if version >= ORDERING_VERSION {
            document
                .attribute(document.root(), "metadata-complete")
                .is_some_and(|value| value.trim().eq_ignore_ascii_case("true"))
        } else {
            // Annotation scanning does not exist before 2.0.
            true
        };
        let absolute_ordering = if is_application_descriptor && version >= ORDERING_VERSION {
            read_absolute_ordering(document)?
        } else {
            None
        };

        Ok(Self {
            version,
            metadata_complete,
            absolute_ordering,
            is_application_descriptor,
        })
    }

    pub fn has_absolute_ordering(&self) -> bool {
        self.absolute_ordering.is_some()
    }
}

/// Whether `document` was read from the application descriptor path.
pub fn is_application_descriptor(document: &ConfigDocument, application_descriptor: &str) -> bool {
    let suffix = application_descriptor.trim_start_matches('/');
    document
        .source()
        .is_some_and(|url| url.path().ends_with(&format!("/{}", suffix)))
}

fn read_version(document: &ConfigDocument) -> Result<f64> {
    match document.attribute(document.root(), "version").map(str::trim) {
        Some(value) if !value.is_empty() => {
            value.parse::<f64>().map_err(|_| Error::InvalidVersion {
                value: value.to_string(),
                uri: document.system_id(),
            })
        }
        _ => Ok(DEFAULT_VERSION),
    }
}

fn read_absolute_ordering(document: &ConfigDocument) -> Result<Option<Vec<String>>> {
    let root = document.root();
    let mut elements = document.children_named(root, "absolute-ordering");
    let Some(absolute) = elements.next() else {
        return Ok(None);
    };
    if elements.next().is_some() {
        return Err(Error::MultipleAbsoluteOrdering {
            uri: document.system_id(),
        });
    }

    if document.child_named(root, "ordering").is_some() {
        warn!(
            "{} declares both <ordering> and <absolute-ordering>; <ordering> is ignored",
            document.system_id()
        );
    }

    let mut names = Vec::new();
    let mut others_seen = false;
    for child in document.child_elements(absolute) {
        match document.local_name(child) {
            "name" => {
                let name = document.text(child);
                if !name.is_empty() {
                    names.push(name);
                }
            }
            "others" => {
                if others_seen {
                    return Err(Error::DuplicateOthers {
                        uri: document.system_id(),
                    });
                }
                others_seen = true;
                names.push(OTHERS.to_string());
            }
            _ => {}
        }
    }
    Ok(Some(names))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::APPLICATION_DESCRIPTOR;
    use url::Url;

    fn app_doc(xml: &str) -> ConfigDocument {
        let url = Url::parse("file:///app/WEB-INF/faces-config.xml").unwrap();
        ConfigDocument::parse(xml, Some(url)).unwrap()
    }

    fn summarise(doc: &ConfigDocument) -> Result<DescriptorSummary> {
        DescriptorSummary::from_document(Some(doc), APPLICATION_DESCRIPTOR)
    }

    #[test]
    fn test_missing_version_defaults_and_forces_metadata_complete() {
        let doc = app_doc(r#"<faces-config metadata-complete="false"/>"#);
        let summary = summarise(&doc).unwrap();
        assert_eq!(summary.version, 1.1);
        assert!(summary.metadata_complete);
        assert!(summary.is_application_descriptor);
    }

    #[test]
    fn test_non_numeric_version_is_fatal() {
        let doc = app_doc(r#"<faces-config version="four"/>"#);
        let err = summarise(&doc).unwrap_err();
        assert!(matches!(err, Error::InvalidVersion { ref value, .. } if value == "four"));
    }

    #[test]
    fn test_metadata_complete_read_from_2_0() {
        let doc = app_doc(r#"<faces-config version="2.0" metadata-complete="TRUE"/>"#);
        assert!(summarise(&doc).unwrap().metadata_complete);

        let doc = app_doc(r#"<faces-config version="4.0"/>"#);
        assert!(!summarise(&doc).unwrap().metadata_complete);
    }

    #[test]
    fn test_absolute_ordering_extracted() {
        let doc = app_doc(
            r#"<faces-config version="4.0">
                 <absolute-ordering>
                   <name> C </name>
                   <name>   </name>
                   <others/>
                   <name>A</name>
                 </absolute-ordering>
               </faces-config>"#,
        );
        let summary = summarise(&doc).unwrap();
        assert_eq!(
            summary.absolute_ordering,
            Some(vec!["C".to_string(), "others".to_string(), "A".to_string()])
        );
    }

    #[test]
    fn test_empty_absolute_ordering_is_present() {
        let doc = app_doc(r#"<faces-config version="2.0"><absolute-ordering/></faces-config>"#);
        assert_eq!(summarise(&doc).unwrap().absolute_ordering, Some(vec![]));
    }

    #[test]
    fn test_duplicate_others_rejected() {
        let doc = app_doc(
            r#"<faces-config version="2.2">
                 <absolute-ordering><others/><name>A</name><others/></absolute-ordering>
               </faces-config>"#,
        );
        assert!(matches!(
            summarise(&doc).unwrap_err(),
            Error::DuplicateOthers { .. }
        ));
    }

    #[test]
    fn test_multiple_absolute_ordering_rejected() {
        let doc = app_doc(
            r#"<faces-config version="2.0">
                 <absolute-ordering/><absolute-ordering/>
               </faces-config>"#,
        );
        assert!(matches!(
            summarise(&doc).unwrap_err(),
            Error::MultipleAbsoluteOrdering { .. }
        ));
    }

    #[test]
    fn test_ordering_next_to_absolute_ordering_warns() {
        testing_logger::setup();
        let doc = app_doc(
            r#"<faces-config version="2.0">
                 <ordering><before><others/></before></ordering>
                 <absolute-ordering><name>A</name></absolute-ordering>
               </faces-config>"#,
        );
        assert!(summarise(&doc).unwrap().has_absolute_ordering());
        testing_logger::validate(|logs| {
            assert!(logs
                .iter()
                .any(|entry| entry.level == log::Level::Warn && entry.body.contains("<ordering>")));
        });
    }

    #[test]
    fn test_ordering_ignored_below_2_0() {
        let doc = app_doc(
            r#"<faces-config version="1.2"><absolute-ordering><name>A</name></absolute-ordering></faces-config>"#,
        );
        assert_eq!(summarise(&doc).unwrap().absolute_ordering, None);
    }

    #[test]
    fn test_library_descriptor_ordering_ignored() {
        let url = Url::parse("file:///lib/META-INF/faces-config.xml").unwrap();
        let doc = ConfigDocument::parse(
            r#"<faces-config version="2.0"><absolute-ordering><name>A</name></absolute-ordering></faces-config>"#,
            Some(url),
        )
        .unwrap();
        let summary = summarise(&doc).unwrap();
        assert!(!summary.is_application_descriptor);
        assert_eq!(summary.absolute_ordering, None);
    }

    #[test]
    fn test_no_document_gives_defaults() {
        let summary = DescriptorSummary::from_document(None, APPLICATION_DESCRIPTOR).unwrap();
        assert_eq!(summary, DescriptorSummary::default());
    }
}
