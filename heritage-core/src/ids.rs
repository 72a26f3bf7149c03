//! Identifier newtypes for catalog records.
//!
//! Catalog identifiers are opaque strings issued by the external catalog
//! store. Wrapping them keeps site, guide and preset ids from being mixed up
//! at call sites.

use std::fmt;

macro_rules! catalog_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw identifier.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the raw identifier.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

catalog_id!(
    /// Identifier of a heritage [`Site`](crate::Site).
    ///
    /// # Examples
    /// ```
    /// use heritage_core::SiteId;
    ///
    /// let id = SiteId::new("bateshwar-temples");
    /// assert_eq!(id.as_str(), "bateshwar-temples");
    /// assert_eq!(id.to_string(), "bateshwar-temples");
    /// ```
    SiteId
);

catalog_id!(
    /// Identifier of a local [`Guide`](crate::Guide).
    GuideId
);

catalog_id!(
    /// Identifier of a [`PresetPackage`](crate::PresetPackage).
    PresetId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_compare_by_value() {
        assert_eq!(SiteId::from("a"), SiteId::new(String::from("a")));
        assert!(GuideId::from("a") < GuideId::from("b"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn ids_serialise_as_plain_strings() {
        let json = serde_json::to_string(&PresetId::from("budget")).expect("serialise id");
        assert_eq!(json, "\"budget\"");
    }
}
