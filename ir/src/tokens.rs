//! Names and fully qualified tokens used throughout the IR.
use std::fmt;

/// The delimiter between the parts of a fully qualified token.
pub const DELIMITER: &str = "::";

/// The delimiter between the parts of a module name.
pub const NAME_DELIMITER: &str = "/";

/// The name of the method containing a module's top-level statements.
pub const INIT_METHOD: &str = ".init";

/// The name of the method the runtime calls to run a module.
pub const ENTRYPOINT_METHOD: &str = ".main";

/// The type given to every symbol, as no type information is available.
pub const DYNAMIC_TYPE: &str = "dynamic";

/// A fully qualified name, such as `pkg::module::member`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Token(String);

impl Token {
    pub fn new<S: Into<String>>(value: S) -> Token {
        Token(value.into())
    }

    /// Returns the token of a member of a module in a package.
    pub fn member(package: &str, module: &str, member: &str) -> Token {
        Token(format!(
            "{}{}{}{}{}",
            package, DELIMITER, module, DELIMITER, member
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Token({})", self.0)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The name of an imported module, such as `a/b`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleToken(String);

impl ModuleToken {
    /// Turns a dotted import path (`a.b.c`) into a module token (`a/b/c`).
    pub fn from_dotted(path: &str) -> ModuleToken {
        ModuleToken(path.split('.').collect::<Vec<_>>().join(NAME_DELIMITER))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ModuleToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ModuleToken({})", self.0)
    }
}

impl fmt::Display for ModuleToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TypeToken(String);

impl TypeToken {
    pub fn dynamic() -> TypeToken {
        TypeToken(DYNAMIC_TYPE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "TypeToken({})", self.0)
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An unqualified name of a module, member or variable.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    pub fn new<S: Into<String>>(value: S) -> Identifier {
        Identifier(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Identifier({})", self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_token() {
        assert_eq!(
            Token::member("app", "net/http", "get").as_str(),
            "app::net/http::get"
        );
        assert_eq!(
            Token::member("app", "main", INIT_METHOD).to_string(),
            "app::main::.init"
        );
    }

    #[test]
    fn test_module_token_from_dotted() {
        assert_eq!(ModuleToken::from_dotted("os").as_str(), "os");
        assert_eq!(ModuleToken::from_dotted("os.path").as_str(), "os/path");
        assert_eq!(ModuleToken::from_dotted("a.b.c").as_str(), "a/b/c");
    }

    #[test]
    fn test_dynamic_type() {
        assert_eq!(TypeToken::dynamic().as_str(), DYNAMIC_TYPE);
    }
}
