// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type registry and dispatcher.
//!
//! Two namespaces, never merged:
//!
//! - **names**: schema type name -> factory, for callers that already know the
//!   concrete type.
//! - **groups**: per header family, a `(code, version)` discriminant -> factory
//!   table plus the probe that decodes the family's shared header.
//!
//! A registry is assembled once by generated code through [`RegistryBuilder`]
//! and is read-only afterwards, so lookups need no locking.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::codec::Codec;
use crate::cursor::Cursor;
use crate::error::{CodecResult, DecodeError, DetectError, RegistryError};

/// Produces a fresh, empty codec instance.
pub type Factory = fn() -> Box<dyn Codec>;

/// [`Factory`] for any default-constructible codec: `factory::<MyType>`.
pub fn factory<T: Codec + Default + 'static>() -> Box<dyn Codec> {
    Box::<T>::default()
}

/// Decodes a group's shared header and returns its discriminant.
///
/// Runs on a copy of the caller's cursor; on success the copy sits right after
/// the header.
pub type HeaderProbe = fn(&mut Cursor<'_>) -> CodecResult<Discriminant>;

/// `(type code, version)` pair identifying a concrete codec inside a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Discriminant {
    pub code: u32,
    pub version: u32,
}

impl Discriminant {
    pub const fn new(code: u32, version: u32) -> Self {
        Self { code, version }
    }
}

impl fmt::Display for Discriminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "type=0x{:04X} ({}) version={}",
            self.code, self.code, self.version
        )
    }
}

#[derive(Clone, Copy)]
struct Entry {
    type_name: &'static str,
    factory: Factory,
}

impl Entry {
    fn from_factory(factory: Factory) -> Self {
        Self {
            type_name: factory().type_name(),
            factory,
        }
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name)
    }
}

/// Result of a successful header peek.
#[derive(Debug)]
pub struct Detection<'a> {
    pub discriminant: Discriminant,
    /// Fresh, empty instance of the resolved type.
    pub codec: Box<dyn Codec>,
    /// Copy of the caller's cursor, positioned right after the header.
    pub body: Cursor<'a>,
}

/// One header family and its discriminant table.
pub struct Group {
    name: &'static str,
    probe: HeaderProbe,
    variants: BTreeMap<Discriminant, Entry>,
}

impl fmt::Debug for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("name", &self.name)
            .field("variants", &self.variants)
            .finish_non_exhaustive()
    }
}

impl Group {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fresh instance for an exact `(code, version)` match, or `None`.
    pub fn lookup(&self, discriminant: Discriminant) -> Option<Box<dyn Codec>> {
        self.variants.get(&discriminant).map(|e| (e.factory)())
    }

    pub fn contains(&self, discriminant: Discriminant) -> bool {
        self.variants.contains_key(&discriminant)
    }

    /// Registered discriminants with their type names, in ascending order.
    pub fn variants(&self) -> impl Iterator<Item = (Discriminant, &'static str)> + '_ {
        self.variants.iter().map(|(d, e)| (*d, e.type_name))
    }

    /// Decode the shared header on a copy of `cursor`.
    pub fn probe<'a>(
        &self,
        cursor: &Cursor<'a>,
    ) -> Result<(Discriminant, Cursor<'a>), DetectError> {
        let mut peek = *cursor;
        let discriminant = (self.probe)(&mut peek).map_err(|source| DetectError::Header {
            group: self.name,
            source,
        })?;
        Ok((discriminant, peek))
    }

    /// Resolve the concrete codec for the envelope starting at `cursor`.
    ///
    /// The caller's cursor never moves; [`Detection::body`] is the advanced copy.
    pub fn detect<'a>(&self, cursor: &Cursor<'a>) -> Result<Detection<'a>, DetectError> {
        let (discriminant, body) = self.probe(cursor)?;
        match self.lookup(discriminant) {
            Some(codec) => {
                log::debug!(
                    "[catbuffer] {}: {} resolved to {}",
                    self.name,
                    discriminant,
                    codec.type_name()
                );
                Ok(Detection {
                    discriminant,
                    codec,
                    body,
                })
            }
            None => {
                log::debug!("[catbuffer] {}: {} unresolved", self.name, discriminant);
                Err(DetectError::Unresolved {
                    group: self.name,
                    discriminant,
                })
            }
        }
    }
}

/// Immutable name and discriminant tables.
#[derive(Debug, Default)]
pub struct Registry {
    names: HashMap<&'static str, Entry>,
    groups: HashMap<&'static str, Group>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Fresh instance of the type called `name`, or `None`.
    pub fn create(&self, name: &str) -> Option<Box<dyn Codec>> {
        let codec = self.names.get(name).map(|e| (e.factory)());
        if codec.is_none() {
            log::trace!("[catbuffer] no type named '{}'", name);
        }
        codec
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.get(name)
    }

    /// Registered type names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.names.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Registered groups, sorted by name.
    pub fn groups(&self) -> Vec<&Group> {
        let mut groups: Vec<_> = self.groups.values().collect();
        groups.sort_unstable_by_key(|g| g.name);
        groups
    }

    /// [`Group::detect`] by group name.
    pub fn detect<'a>(
        &self,
        group: &str,
        cursor: &Cursor<'a>,
    ) -> Result<Detection<'a>, DetectError> {
        self.group(group)
            .ok_or_else(|| DetectError::UnknownGroup(group.to_string()))?
            .detect(cursor)
    }

    /// Detect the concrete type, then deserialize it from the envelope start.
    ///
    /// Concrete layouts repeat the shared header, so decoding restarts at
    /// `cursor` rather than at [`Detection::body`]. `cursor` advances by the
    /// bytes consumed; on failure its offset locates the problem.
    pub fn decode(
        &self,
        group: &str,
        cursor: &mut Cursor<'_>,
    ) -> Result<Box<dyn Codec>, DecodeError> {
        let mut codec = self.detect(group, cursor)?.codec;
        let type_name = codec.type_name();
        codec
            .deserialize(cursor)
            .map_err(|source| DecodeError::Codec { type_name, source })?;
        Ok(codec)
    }
}

/// Assembles a [`Registry`], rejecting duplicates in each namespace.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    registry: Registry,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type under the name its instances report.
    pub fn codec(&mut self, factory: Factory) -> Result<&mut Self, RegistryError> {
        let entry = Entry::from_factory(factory);
        if self.registry.names.contains_key(entry.type_name) {
            return Err(RegistryError::DuplicateName(entry.type_name.to_string()));
        }
        self.registry.names.insert(entry.type_name, entry);
        Ok(self)
    }

    /// Open a new header family.
    pub fn group(
        &mut self,
        name: &'static str,
        probe: HeaderProbe,
    ) -> Result<GroupBuilder<'_>, RegistryError> {
        if self.registry.groups.contains_key(name) {
            return Err(RegistryError::DuplicateGroup(name.to_string()));
        }
        let group = self.registry.groups.entry(name).or_insert(Group {
            name,
            probe,
            variants: BTreeMap::new(),
        });
        Ok(GroupBuilder { group })
    }

    pub fn build(self) -> Registry {
        log::debug!(
            "[catbuffer] registry built: {} names, {} groups",
            self.registry.names.len(),
            self.registry.groups.len()
        );
        self.registry
    }
}

/// Adds variants to one group of a [`RegistryBuilder`].
#[derive(Debug)]
pub struct GroupBuilder<'r> {
    group: &'r mut Group,
}

impl GroupBuilder<'_> {
    pub fn variant(
        &mut self,
        discriminant: Discriminant,
        factory: Factory,
    ) -> Result<&mut Self, RegistryError> {
        let entry = Entry::from_factory(factory);
        if let Some(existing) = self.group.variants.get(&discriminant) {
            return Err(RegistryError::DuplicateDiscriminant {
                group: self.group.name,
                discriminant,
                first: existing.type_name,
                second: entry.type_name,
            });
        }
        self.group.variants.insert(discriminant, entry);
        Ok(self)
    }
}
