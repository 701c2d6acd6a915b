use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Modifier bitmask attached to classes, methods, and fields.
///
/// Bit values follow the Dalvik encoding. Some bits are shared between
/// member kinds (`VOLATILE`/`BRIDGE`, `TRANSIENT`/`VARARGS`); which reading
/// applies depends on the kind of the carrying element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AccessFlags(u32);

impl AccessFlags {
    pub const PUBLIC: AccessFlags = AccessFlags(0x0001);
    pub const PRIVATE: AccessFlags = AccessFlags(0x0002);
    pub const PROTECTED: AccessFlags = AccessFlags(0x0004);
    pub const STATIC: AccessFlags = AccessFlags(0x0008);
    pub const FINAL: AccessFlags = AccessFlags(0x0010);
    pub const SYNCHRONIZED: AccessFlags = AccessFlags(0x0020);
    pub const VOLATILE: AccessFlags = AccessFlags(0x0040);
    pub const BRIDGE: AccessFlags = AccessFlags(0x0040);
    pub const TRANSIENT: AccessFlags = AccessFlags(0x0080);
    pub const VARARGS: AccessFlags = AccessFlags(0x0080);
    pub const NATIVE: AccessFlags = AccessFlags(0x0100);
    pub const INTERFACE: AccessFlags = AccessFlags(0x0200);
    pub const ABSTRACT: AccessFlags = AccessFlags(0x0400);
    pub const STRICT: AccessFlags = AccessFlags(0x0800);
    pub const SYNTHETIC: AccessFlags = AccessFlags(0x1000);
    pub const ANNOTATION: AccessFlags = AccessFlags(0x2000);
    pub const ENUM: AccessFlags = AccessFlags(0x4000);
    pub const CONSTRUCTOR: AccessFlags = AccessFlags(0x10000);
    pub const DECLARED_SYNCHRONIZED: AccessFlags = AccessFlags(0x20000);

    pub const fn empty() -> Self {
        AccessFlags(0)
    }

    pub const fn from_bits(bits: u32) -> Self {
        AccessFlags(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True iff every bit of `other` is set in `self`.
    pub const fn contains(self, other: AccessFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// True iff at least one bit of `other` is set in `self`.
    pub const fn intersects(self, other: AccessFlags) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for AccessFlags {
    type Output = AccessFlags;

    fn bitor(self, rhs: AccessFlags) -> AccessFlags {
        AccessFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for AccessFlags {
    fn bitor_assign(&mut self, rhs: AccessFlags) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for AccessFlags {
    type Output = AccessFlags;

    fn bitand(self, rhs: AccessFlags) -> AccessFlags {
        AccessFlags(self.0 & rhs.0)
    }
}

impl fmt::Display for AccessFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: &[(AccessFlags, &str)] = &[
            (AccessFlags::PUBLIC, "public"),
            (AccessFlags::PRIVATE, "private"),
            (AccessFlags::PROTECTED, "protected"),
            (AccessFlags::STATIC, "static"),
            (AccessFlags::FINAL, "final"),
            (AccessFlags::SYNCHRONIZED, "synchronized"),
            (AccessFlags::VOLATILE, "volatile|bridge"),
            (AccessFlags::TRANSIENT, "transient|varargs"),
            (AccessFlags::NATIVE, "native"),
            (AccessFlags::INTERFACE, "interface"),
            (AccessFlags::ABSTRACT, "abstract"),
            (AccessFlags::STRICT, "strict"),
            (AccessFlags::SYNTHETIC, "synthetic"),
            (AccessFlags::ANNOTATION, "annotation"),
            (AccessFlags::ENUM, "enum"),
            (AccessFlags::CONSTRUCTOR, "constructor"),
            (AccessFlags::DECLARED_SYNCHRONIZED, "declared-synchronized"),
        ];

        let mut first = true;
        for (flag, name) in NAMES {
            if self.contains(*flag) {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{}", name)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let flags = AccessFlags::PUBLIC | AccessFlags::FINAL;
        assert!(flags.contains(AccessFlags::PUBLIC));
        assert!(flags.contains(AccessFlags::FINAL));
        assert!(flags.contains(AccessFlags::PUBLIC | AccessFlags::FINAL));
        assert!(!flags.contains(AccessFlags::STATIC));
        assert!(!flags.contains(AccessFlags::FINAL | AccessFlags::STATIC));
    }

    #[test]
    fn test_raw_bits_round_trip() {
        let flags = AccessFlags::STATIC | AccessFlags::FINAL;
        assert_eq!(flags.bits(), 0x18);
        assert_eq!(AccessFlags::from_bits(0x18), flags);
        assert!(AccessFlags::from_bits(0x18).contains(AccessFlags::STATIC));
        assert!(AccessFlags::empty().is_empty());
        assert!(flags.intersects(AccessFlags::FINAL | AccessFlags::PUBLIC));
        assert!(!flags.intersects(AccessFlags::PUBLIC));
    }

    #[test]
    fn test_empty_contains_nothing_but_empty() {
        assert!(AccessFlags::empty().contains(AccessFlags::empty()));
        assert!(!AccessFlags::empty().contains(AccessFlags::PUBLIC));
        assert!(AccessFlags::PUBLIC.contains(AccessFlags::empty()));
    }

    #[test]
    fn test_display() {
        let flags = AccessFlags::PUBLIC | AccessFlags::STATIC | AccessFlags::FINAL;
        assert_eq!(flags.to_string(), "public static final");
    }
}
