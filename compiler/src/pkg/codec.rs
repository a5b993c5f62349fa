//! Decoding of descriptor files.
use serde::Deserialize;

/// The raw contents of a descriptor, before it's validated.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct RawDescriptor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

/// A type that turns the bytes of a descriptor file into a `RawDescriptor`.
pub trait Codec {
    fn decode(&self, input: &[u8]) -> Result<RawDescriptor, String>;
}

pub struct Json;

impl Codec for Json {
    fn decode(&self, input: &[u8]) -> Result<RawDescriptor, String> {
        serde_json::from_slice(input).map_err(|e| e.to_string())
    }
}

pub struct Toml;

impl Codec for Toml {
    fn decode(&self, input: &[u8]) -> Result<RawDescriptor, String> {
        let text = std::str::from_utf8(input).map_err(|e| e.to_string())?;

        toml::from_str(text).map_err(|e| e.to_string())
    }
}

/// An ordered collection of codecs, keyed by the file extension they handle.
pub struct Codecs {
    entries: Vec<(String, Box<dyn Codec>)>,
}

impl Codecs {
    /// Returns the default codecs: JSON followed by TOML.
    pub fn new() -> Codecs {
        let mut codecs = Codecs::empty();

        codecs.register(".json", Box::new(Json));
        codecs.register(".toml", Box::new(Toml));
        codecs
    }

    pub fn empty() -> Codecs {
        Codecs { entries: Vec::new() }
    }

    /// Registers a codec for an extension.
    ///
    /// If the extension is already registered its codec is replaced, keeping
    /// its position in the search order.
    pub fn register(&mut self, extension: &str, codec: Box<dyn Codec>) {
        if let Some(entry) =
            self.entries.iter_mut().find(|(ext, _)| ext == extension)
        {
            entry.1 = codec;
        } else {
            self.entries.push((extension.to_string(), codec));
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn Codec)> {
        self.entries.iter().map(|(ext, codec)| (ext.as_str(), codec.as_ref()))
    }
}

impl Default for Codecs {
    fn default() -> Codecs {
        Codecs::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    struct Fixed;

    impl Codec for Fixed {
        fn decode(&self, _: &[u8]) -> Result<RawDescriptor, String> {
            Ok(RawDescriptor {
                name: Some("fixed".to_string()),
                ..RawDescriptor::default()
            })
        }
    }

    fn extensions(codecs: &Codecs) -> Vec<&str> {
        codecs.iter().map(|(ext, _)| ext).collect()
    }

    #[test]
    fn test_json() {
        let raw = Json
            .decode(
                br#"{"name": "app", "license": "MIT", "dependencies": ["a"]}"#,
            )
            .unwrap();

        assert_eq!(
            raw,
            RawDescriptor {
                name: Some("app".to_string()),
                license: Some("MIT".to_string()),
                dependencies: vec!["a".to_string()],
                ..RawDescriptor::default()
            }
        );
    }

    #[test]
    fn test_toml() {
        let raw = Toml
            .decode(b"name = \"app\"\nauthor = \"Alice\"\n")
            .unwrap();

        assert_eq!(raw.name, Some("app".to_string()));
        assert_eq!(raw.author, Some("Alice".to_string()));
        assert!(raw.dependencies.is_empty());
    }

    #[test]
    fn test_invalid_input() {
        assert!(Json.decode(b"{").is_err());
        assert!(Toml.decode(b"name = ").is_err());
        assert!(Toml.decode(&[0xff, 0xfe]).is_err());
    }

    #[test]
    fn test_register() {
        let mut codecs = Codecs::new();

        codecs.register(".yaml", Box::new(Fixed));
        codecs.register(".json", Box::new(Fixed));

        assert_eq!(extensions(&codecs), vec![".json", ".toml", ".yaml"]);

        let (_, json) = codecs.iter().next().unwrap();

        assert_eq!(json.decode(b"").unwrap().name, Some("fixed".to_string()));
    }
}
