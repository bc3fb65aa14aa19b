//! Shared test utilities for integration and E2E tests.
//!
//! This module provides fixtures for laying out a web application on disk
//! (application descriptor, library `META-INF` descriptors, settings file)
//! and helpers to build descriptor XML.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new()
//!         .with_library("lib-a", &descriptors::named("a", ""))
//!         .with_settings(settings::WEB_APP_AND_LIBS);
//!     // ... test code
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::descriptors;
    #[allow(unused_imports)]
    pub use super::settings;
    pub use super::TestFixture;
}

/// Settings file snippets. Paths are relative to the fixture root.
#[allow(dead_code)]
pub mod settings {
    /// Web application plus library descriptors.
    pub const WEB_APP_AND_LIBS: &str = r#"
web_root: webapp
meta_inf_roots:
  - libs
"#;

    /// Same sources, loaded on a worker pool.
    pub const PARALLEL: &str = r#"
web_root: webapp
meta_inf_roots:
  - libs
parallel: true
threads: 4
"#;

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "web_root: [unterminated";

    /// Settings with a misspelled key.
    pub const TYPO: &str = "web_rot: webapp\n";
}

/// Descriptor XML builders.
#[allow(dead_code)]
pub mod descriptors {
    const NAMESPACE: &str = "https://jakarta.ee/xml/ns/jakartaee";

    /// A 4.0 descriptor with the given body.
    pub fn with_body(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<faces-config xmlns="{}" version="4.0">
{}
</faces-config>
"#,
            NAMESPACE, body
        )
    }

    /// A descriptor with a `<name>` and the given body.
    pub fn named(name: &str, body: &str) -> String {
        with_body(&format!("<name>{}</name>\n{}", name, body))
    }

    /// A named descriptor ordered after the given documents.
    pub fn after(name: &str, after: &[&str], body: &str) -> String {
        let names: String = after
            .iter()
            .map(|n| {
                if *n == "others" {
                    "<others/>".to_string()
                } else {
                    format!("<name>{}</name>", n)
                }
            })
            .collect();
        named(
            name,
            &format!("<ordering><after>{}</after></ordering>\n{}", names, body),
        )
    }

    /// An application descriptor with an absolute ordering.
    pub fn absolute(entries: &[&str], body: &str) -> String {
        let list: String = entries
            .iter()
            .map(|n| {
                if *n == "others" {
                    "<others/>".to_string()
                } else {
                    format!("<name>{}</name>", n)
                }
            })
            .collect();
        with_body(&format!(
            "<absolute-ordering>{}</absolute-ordering>\n{}",
            list, body
        ))
    }

    /// A managed bean declaration.
    pub fn bean(name: &str, class: &str, extra: &str) -> String {
        format!(
            "<managed-bean>{}<managed-bean-name>{}</managed-bean-name>\
             <managed-bean-class>{}</managed-bean-class></managed-bean>",
            extra, name, class
        )
    }
}

/// A temporary directory laid out as a web application.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `.faces-config.yaml` settings file with the given content.
    pub fn with_settings(self, content: &str) -> Self {
        self.with_file(".faces-config.yaml", content)
    }

    /// Add `webapp/WEB-INF/faces-config.xml`.
    pub fn with_app_descriptor(self, content: &str) -> Self {
        self.with_file("webapp/WEB-INF/faces-config.xml", content)
    }

    /// Add `libs/<library>/META-INF/faces-config.xml`.
    pub fn with_library(self, library: &str, content: &str) -> Self {
        self.with_file(
            &format!("libs/{}/META-INF/faces-config.xml", library),
            content,
        )
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the settings file.
    pub fn settings_path(&self) -> PathBuf {
        self.temp_dir.path().join(".faces-config.yaml")
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("faces-config");
        cmd.current_dir(self.path())
            .env_remove("FACES_CONFIG_SETTINGS")
            .env_remove("RUST_LOG")
            .arg("--color")
            .arg("never");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
