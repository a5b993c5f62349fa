//! Validated package descriptors.
use crate::error::Error;
use crate::pkg::codec::RawDescriptor;
use ir::package::Package;
use std::path::PathBuf;

/// The metadata that identifies a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub name: String,
    pub description: Option<String>,
    pub author: Option<String>,
    pub website: Option<String>,
    pub license: Option<String>,
    pub dependencies: Vec<String>,

    /// The file the descriptor was loaded from.
    pub path: PathBuf,
}

impl Descriptor {
    /// Validates a decoded descriptor loaded from `path`.
    pub fn from_raw(path: PathBuf, raw: RawDescriptor) -> Result<Self, Error> {
        let name = match raw.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => {
                return Err(Error::DescriptorInvalid {
                    path,
                    reason: "the 'name' field is missing".to_string(),
                })
            }
        };

        Ok(Descriptor {
            name,
            description: raw.description,
            author: raw.author,
            website: raw.website,
            license: raw.license,
            dependencies: raw.dependencies,
            path,
        })
    }

    /// Returns a new package without any modules.
    pub fn into_package(self) -> Package {
        let mut pkg = Package::new(self.name);

        pkg.description = self.description;
        pkg.author = self.author;
        pkg.website = self.website;
        pkg.license = self.license;
        pkg.dependencies = self.dependencies;
        pkg
    }
}
