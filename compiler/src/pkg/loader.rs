//! Locating and loading package descriptors.
use crate::config::Config;
use crate::error::Error;
use crate::pkg::codec::Codecs;
use crate::pkg::descriptor::Descriptor;
use fnv::FnvHashMap;
use log::{debug, trace};
use std::env;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Returns an absolute version of `path` with `.` and `..` components removed,
/// without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .map(|dir| dir.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };
    let mut result = PathBuf::new();

    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                result.pop();
            }
            other => result.push(other),
        }
    }

    result
}

/// A type that finds and loads package descriptors, caching every descriptor
/// it loads.
pub struct Loader {
    codecs: Codecs,
    project_descriptor: String,
    package_descriptor: String,
    cache: FnvHashMap<PathBuf, Descriptor>,
}

impl Loader {
    pub fn new(
        project_descriptor: String,
        package_descriptor: String,
        codecs: Codecs,
    ) -> Loader {
        Loader {
            codecs,
            project_descriptor,
            package_descriptor,
            cache: FnvHashMap::default(),
        }
    }

    /// Returns a loader using the descriptor names and codecs of a `Config`.
    ///
    /// The codecs are moved out of the configuration.
    pub fn from_config(config: &mut Config) -> Loader {
        let codecs = std::mem::replace(&mut config.codecs, Codecs::empty());

        Loader::new(
            config.project_descriptor.clone(),
            config.package_descriptor.clone(),
            codecs,
        )
    }

    /// Loads the descriptor of the project in the directory `root`.
    ///
    /// Only `root` itself is searched.
    pub fn load_project(&mut self, root: &Path) -> Result<Descriptor, Error> {
        let names = [self.project_descriptor.clone()];

        self.load(root, &names, false)
    }

    /// Loads the descriptor of a dependency, starting in `root` and moving up
    /// the directory hierarchy until a descriptor is found.
    pub fn load_dependency(
        &mut self,
        root: &Path,
    ) -> Result<Descriptor, Error> {
        let names = [
            self.package_descriptor.clone(),
            self.project_descriptor.clone(),
        ];

        self.load(root, &names, true)
    }

    fn load(
        &mut self,
        root: &Path,
        names: &[String],
        upwards: bool,
    ) -> Result<Descriptor, Error> {
        let start = normalize(root);
        let mut dir = start.as_path();

        loop {
            if let Some(found) = self.find_in(dir, names)? {
                return Ok(found);
            }

            if !upwards {
                break;
            }

            match dir.parent() {
                Some(parent) => dir = parent,
                None => break,
            }
        }

        Err(Error::DescriptorNotFound { root: root.to_path_buf() })
    }

    fn find_in(
        &mut self,
        dir: &Path,
        names: &[String],
    ) -> Result<Option<Descriptor>, Error> {
        for name in names {
            for (ext, codec) in self.codecs.iter() {
                let path = dir.join(format!("{}{}", name, ext));

                if let Some(found) = self.cache.get(&path) {
                    debug!("using cached descriptor {}", path.display());
                    return Ok(Some(found.clone()));
                }

                trace!("checking {}", path.display());

                // Anything that isn't a regular file (a directory, or a path
                // below a file) means there's no descriptor here.
                match fs::metadata(&path) {
                    Ok(meta) if meta.is_file() => {}
                    _ => continue,
                }

                let bytes = match fs::read(&path) {
                    Ok(bytes) => bytes,
                    Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                    Err(error) => {
                        return Err(Error::DescriptorUnreadable { path, error })
                    }
                };
                let raw = codec.decode(&bytes).map_err(|reason| {
                    Error::DescriptorInvalid { path: path.clone(), reason }
                })?;
                let desc = Descriptor::from_raw(path.clone(), raw)?;

                debug!(
                    "loaded package '{}' from {}",
                    desc.name,
                    path.display()
                );
                self.cache.insert(path, desc.clone());
                return Ok(Some(desc));
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pkg::codec::{Codec, Json, RawDescriptor};
    use similar_asserts::assert_eq;
    use std::cell::Cell;
    use std::rc::Rc;
    use tempfile::{tempdir, TempDir};

    struct Counting {
        calls: Rc<Cell<usize>>,
    }

    impl Codec for Counting {
        fn decode(&self, input: &[u8]) -> Result<RawDescriptor, String> {
            self.calls.set(self.calls.get() + 1);
            Json.decode(input)
        }
    }

    fn loader() -> Loader {
        Loader::new(
            "Coconut".to_string(),
            "Cocopack".to_string(),
            Codecs::new(),
        )
    }

    fn write(dir: &Path, file: &str, contents: &str) -> PathBuf {
        let path = dir.join(file);

        fs::write(&path, contents).unwrap();
        path
    }

    fn nested(root: &TempDir) -> PathBuf {
        let dir = root.path().join("src").join("net");

        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_normalize() {
        assert_eq!(
            normalize(Path::new("/a/b/../c/./d")),
            PathBuf::from("/a/c/d")
        );
        assert!(normalize(Path::new("foo")).is_absolute());
    }

    #[test]
    fn test_load_project_json() {
        let dir = tempdir().unwrap();
        let path = write(
            dir.path(),
            "Coconut.json",
            r#"{"name": "app", "author": "Alice"}"#,
        );
        let desc = loader().load_project(dir.path()).unwrap();

        assert_eq!(desc.name, "app");
        assert_eq!(desc.author, Some("Alice".to_string()));
        assert_eq!(desc.path, normalize(&path));
    }

    #[test]
    fn test_load_project_toml() {
        let dir = tempdir().unwrap();

        write(dir.path(), "Coconut.toml", "name = \"app\"\n");

        assert_eq!(loader().load_project(dir.path()).unwrap().name, "app");
    }

    #[test]
    fn test_extension_order() {
        let dir = tempdir().unwrap();

        write(dir.path(), "Coconut.json", r#"{"name": "json"}"#);
        write(dir.path(), "Coconut.toml", "name = \"toml\"\n");

        assert_eq!(loader().load_project(dir.path()).unwrap().name, "json");
    }

    #[test]
    fn test_load_project_does_not_walk_upwards() {
        let dir = tempdir().unwrap();
        let nested = nested(&dir);

        write(dir.path(), "Coconut.json", r#"{"name": "app"}"#);

        let err = loader().load_project(&nested).unwrap_err();

        assert!(matches!(
            err,
            Error::DescriptorNotFound { ref root } if root == &nested
        ));
    }

    #[test]
    fn test_load_dependency_walks_upwards() {
        let dir = tempdir().unwrap();
        let nested = nested(&dir);

        write(dir.path(), "Coconut.json", r#"{"name": "app"}"#);

        assert_eq!(loader().load_dependency(&nested).unwrap().name, "app");
    }

    #[test]
    fn test_load_dependency_prefers_package_descriptor() {
        let dir = tempdir().unwrap();

        write(dir.path(), "Coconut.json", r#"{"name": "project"}"#);
        write(dir.path(), "Cocopack.toml", "name = \"package\"\n");

        assert_eq!(
            loader().load_dependency(dir.path()).unwrap().name,
            "package"
        );
    }

    #[test]
    fn test_load_dependency_prefers_closest_directory() {
        let dir = tempdir().unwrap();
        let nested = nested(&dir);

        write(dir.path(), "Cocopack.json", r#"{"name": "outer"}"#);
        write(&nested, "Coconut.json", r#"{"name": "inner"}"#);

        assert_eq!(loader().load_dependency(&nested).unwrap().name, "inner");
    }

    #[test]
    fn test_missing_name() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "Coconut.json", r#"{"author": "Alice"}"#);
        let err = loader().load_project(dir.path()).unwrap_err();

        assert!(matches!(
            err,
            Error::DescriptorInvalid { path: ref p, .. }
                if p == &normalize(&path)
        ));
    }

    #[test]
    fn test_malformed_descriptor() {
        let dir = tempdir().unwrap();

        write(dir.path(), "Coconut.json", "{");

        assert!(matches!(
            loader().load_project(dir.path()),
            Err(Error::DescriptorInvalid { .. })
        ));
    }

    #[test]
    fn test_not_found() {
        let dir = tempdir().unwrap();

        assert!(matches!(
            loader().load_project(dir.path()),
            Err(Error::DescriptorNotFound { .. })
        ));
    }

    #[test]
    fn test_load_dependency_skips_directories() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");

        fs::create_dir_all(src.join("Cocopack.json")).unwrap();
        write(dir.path(), "Coconut.json", r#"{"name": "app"}"#);

        assert_eq!(loader().load_dependency(&src).unwrap().name, "app");
    }

    #[test]
    fn test_load_dependency_from_file() {
        let dir = tempdir().unwrap();
        let file = write(dir.path(), "main.py", "");

        write(dir.path(), "Coconut.json", r#"{"name": "app"}"#);

        assert_eq!(loader().load_dependency(&file).unwrap().name, "app");
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_descriptor() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = write(dir.path(), "Coconut.json", r#"{"name": "app"}"#);

        fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).unwrap();

        // Permissions don't apply to the superuser.
        if fs::read(&path).is_ok() {
            return;
        }

        let err = loader().load_dependency(dir.path()).unwrap_err();

        assert!(matches!(
            err,
            Error::DescriptorUnreadable { path: ref p, ref error }
                if p == &normalize(&path)
                    && error.kind() == io::ErrorKind::PermissionDenied
        ));
    }

    #[test]
    fn test_descriptor_is_read_once() {
        let dir = tempdir().unwrap();
        let calls = Rc::new(Cell::new(0));
        let mut codecs = Codecs::empty();

        codecs.register(".json", Box::new(Counting { calls: calls.clone() }));
        write(dir.path(), "Coconut.json", r#"{"name": "app"}"#);

        let mut loader =
            Loader::new("Coconut".to_string(), "Cocopack".to_string(), codecs);

        assert_eq!(loader.load_project(dir.path()).unwrap().name, "app");
        assert_eq!(loader.load_dependency(dir.path()).unwrap().name, "app");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_cache_survives_file_removal() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "Coconut.json", r#"{"name": "app"}"#);
        let mut loader = loader();

        loader.load_project(dir.path()).unwrap();
        fs::remove_file(path).unwrap();

        assert_eq!(loader.load_project(dir.path()).unwrap().name, "app");
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::new();

        config.set_project_descriptor("Project".to_string());

        let dir = tempdir().unwrap();
        let mut loader = Loader::from_config(&mut config);

        write(dir.path(), "Project.toml", "name = \"custom\"\n");

        assert_eq!(loader.load_project(dir.path()).unwrap().name, "custom");
        assert!(config.codecs.iter().next().is_none());
    }
}
