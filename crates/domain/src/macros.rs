//! Macro for implementing Display and FromStr for field-name enums
//!
//! Form fields, tabs and sub-entry columns are addressed by name from the
//! front-end. This macro maps each variant to its wire name once and derives
//! both conversions from that mapping.
//!
//! # Example
//!
//! ```rust
//! use roster_domain::impl_field_name_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Column {
//!     FirstName,
//!     Email,
//! }
//!
//! impl_field_name_conversions!(Column {
//!     FirstName => "firstName",
//!     Email => "email",
//! });
//!
//! assert_eq!("FIRSTNAME".parse::<Column>().unwrap(), Column::FirstName);
//! assert_eq!(Column::FirstName.to_string(), "firstName");
//! ```

/// Implements Display and FromStr traits for name-addressed enums
///
/// - Display writes the wire name exactly as given
/// - FromStr matches the wire name ignoring ASCII case
#[macro_export]
macro_rules! impl_field_name_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$enum_name] = &[$(Self::$variant),+];

            /// Wire name of the variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::RosterError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(if s.eq_ignore_ascii_case($str) {
                    return Ok(Self::$variant);
                })+
                Err($crate::RosterError::InvalidInput(format!(
                    "Invalid {}: {}",
                    stringify!($enum_name),
                    s
                )))
            }
        }
    };
}
