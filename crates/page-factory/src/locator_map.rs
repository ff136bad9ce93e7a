// LocatorMap - page object assembled at runtime
//
// For page objects whose fields are not known at compile time: register
// (name, descriptor) pairs, keep the returned LocatorKey, and read the
// resolved locator back through it after initialization. Maps can also be
// loaded from a JSON manifest:
//
//   {
//     "fields": [
//       { "name": "username", "strategy": "label", "value": "Username" },
//       { "name": "submit", "strategy": "role", "role": "button", "value": "Submit" },
//       { "name": "login", "value": "#login-button" }
//     ]
//   }

use crate::error::{Error, Result};
use crate::locate_by::LocateBy;
use crate::page_factory::{LocatorField, PageObject};
use serde::{Deserialize, Serialize};

/// Typed handle to a field registered in a [`LocatorMap`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocatorKey(usize);

#[derive(Debug, Clone)]
struct Entry<L> {
    name: String,
    locate_by: LocateBy,
    locator: Option<L>,
}

/// Ordered set of named locator fields
#[derive(Debug, Clone)]
pub struct LocatorMap<L> {
    entries: Vec<Entry<L>>,
}

/// JSON manifest describing a [`LocatorMap`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatorManifest {
    pub fields: Vec<ManifestField>,
}

/// One field of a [`LocatorManifest`]
///
/// Keys other than `name`, `strategy`, `value`, `pattern` and `role` are
/// rejected, so a misspelled key fails to load instead of being ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawManifestField")]
pub struct ManifestField {
    pub name: String,
    #[serde(flatten)]
    pub locate_by: LocateBy,
}

// Flattened LocateBy takes its own keys first; whatever is left lands in `unknown`
#[derive(Deserialize)]
struct RawManifestField {
    name: String,
    #[serde(flatten)]
    locate_by: LocateBy,
    #[serde(flatten)]
    unknown: serde_json::Map<String, serde_json::Value>,
}

impl TryFrom<RawManifestField> for ManifestField {
    type Error = String;

    fn try_from(raw: RawManifestField) -> std::result::Result<Self, Self::Error> {
        if let Some(key) = raw.unknown.keys().next() {
            return Err(format!(
                "unknown key '{key}' in locator field '{}'",
                raw.name
            ));
        }
        Ok(ManifestField {
            name: raw.name,
            locate_by: raw.locate_by,
        })
    }
}

impl<L> Default for LocatorMap<L> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<L> LocatorMap<L> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a field and returns its key
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `name` is already registered.
    pub fn register(&mut self, name: impl Into<String>, locate_by: LocateBy) -> Result<LocatorKey> {
        let name = name.into();
        if self.position(&name).is_some() {
            return Err(Error::InvalidArgument(format!(
                "locator field '{name}' is already registered"
            )));
        }
        self.entries.push(Entry {
            name,
            locate_by,
            locator: None,
        });
        Ok(LocatorKey(self.entries.len() - 1))
    }

    /// Builds a map from a manifest, preserving field order
    pub fn from_manifest(manifest: LocatorManifest) -> Result<Self> {
        let mut map = Self::new();
        for field in manifest.fields {
            map.register(field.name, field.locate_by)?;
        }
        Ok(map)
    }

    /// Parses a JSON manifest
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] for malformed JSON or unknown field keys and
    /// [`Error::InvalidArgument`] for duplicate field names.
    pub fn from_json(json: &str) -> Result<Self> {
        let manifest: LocatorManifest = serde_json::from_str(json)?;
        Self::from_manifest(manifest).map_err(|e| e.context("Invalid locator manifest"))
    }

    /// Returns the manifest describing this map's fields
    pub fn manifest(&self) -> LocatorManifest {
        LocatorManifest {
            fields: self
                .entries
                .iter()
                .map(|entry| ManifestField {
                    name: entry.name.clone(),
                    locate_by: entry.locate_by.clone(),
                })
                .collect(),
        }
    }

    /// Resolved locator for `key`, if initialized
    pub fn get(&self, key: LocatorKey) -> Option<&L> {
        self.entries.get(key.0)?.locator.as_ref()
    }

    /// Resolved locator for the field called `name`, if initialized
    pub fn get_by_name(&self, name: &str) -> Option<&L> {
        self.get(self.key(name)?)
    }

    /// Key of the field called `name`
    pub fn key(&self, name: &str) -> Option<LocatorKey> {
        self.position(name).map(LocatorKey)
    }

    /// Descriptor registered for `key`
    pub fn locate_by(&self, key: LocatorKey) -> Option<&LocateBy> {
        self.entries.get(key.0).map(|entry| &entry.locate_by)
    }

    /// Field names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name == name)
    }
}

impl<L> PageObject<L> for LocatorMap<L> {
    fn locator_fields<'a>(&'a mut self) -> Vec<LocatorField<'a, L>>
    where
        L: 'a,
    {
        self.entries
            .iter_mut()
            .map(|entry| LocatorField::new(&entry.name, &entry.locate_by, &mut entry.locator))
            .collect()
    }
}
