//! Modifier flags for classes and members
//!
//! Bit values follow the JVM access flags so descriptors exported from a
//! class file can be mapped one to one.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Modifier flags for a class or member
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u16 {
        /// Visible everywhere
        const PUBLIC = 0x0001;
        /// Visible only inside the declaring class
        const PRIVATE = 0x0002;
        /// Visible to subclasses
        const PROTECTED = 0x0004;
        /// Type-level rather than instance-level
        const STATIC = 0x0008;
        /// Immutable field, non-overridable method, non-extendable class
        const FINAL = 0x0010;
        /// Capability set rather than a class
        const INTERFACE = 0x0200;
        /// Cannot be instantiated directly / has no body
        const ABSTRACT = 0x0400;
    }
}

impl Modifiers {
    /// Check for `PUBLIC`
    pub fn is_public(&self) -> bool {
        self.contains(Self::PUBLIC)
    }

    /// Check for `STATIC`
    pub fn is_static(&self) -> bool {
        self.contains(Self::STATIC)
    }

    /// Check for `FINAL`
    pub fn is_final(&self) -> bool {
        self.contains(Self::FINAL)
    }

    /// Check for `ABSTRACT`
    pub fn is_abstract(&self) -> bool {
        self.contains(Self::ABSTRACT)
    }

    /// Check for `INTERFACE`
    pub fn is_interface(&self) -> bool {
        self.contains(Self::INTERFACE)
    }
}

impl fmt::Display for Modifiers {
    /// Source-order keywords, e.g. `private static final`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keywords = [
            (Self::PUBLIC, "public"),
            (Self::PROTECTED, "protected"),
            (Self::PRIVATE, "private"),
            (Self::ABSTRACT, "abstract"),
            (Self::STATIC, "static"),
            (Self::FINAL, "final"),
            (Self::INTERFACE, "interface"),
        ];
        let words: Vec<&str> = keywords
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, word)| *word)
            .collect();
        write!(f, "{}", words.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_keywords() {
        let mods = Modifiers::PRIVATE | Modifiers::STATIC | Modifiers::FINAL;
        assert_eq!(mods.to_string(), "private static final");
        assert_eq!(Modifiers::empty().to_string(), "");
        assert!(mods.is_static() && mods.is_final() && !mods.is_public());
    }
}
