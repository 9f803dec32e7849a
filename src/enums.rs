//! Enum metadata: declared human-readable labels and parse-by-name.
//!
//! There is no runtime reflection here. The [`enum_meta!`] macro generates a
//! compile-time variant table (names and optional labels) and implements
//! [`EnumMeta`] from it, so lookups are plain match arms.

/// Metadata access for a fieldless enum.
pub trait EnumMeta: Sized {
    /// The declared variant names, in declaration order.
    fn variant_names() -> &'static [&'static str];

    /// Parse a variant from its name. Unknown names yield `None`, never an
    /// error. Case comparison is ASCII when `ignore_case` is set.
    fn from_name(name: &str, ignore_case: bool) -> Option<Self>;

    /// The human-readable label declared for this variant, if any. A variant
    /// without a label yields `None`; this is indistinguishable from an
    /// undeclared value by design.
    fn description(&self) -> Option<&'static str>;
}

/// Implement [`EnumMeta`] for a fieldless enum from a variant/label table.
///
/// ```
/// use auxide::{enum_meta, EnumMeta};
///
/// #[derive(Debug, PartialEq)]
/// enum Status {
///     Active,
///     Retired,
/// }
///
/// enum_meta!(Status {
///     Active => "Currently in service",
///     Retired,
/// });
///
/// assert_eq!(Status::Active.description(), Some("Currently in service"));
/// assert_eq!(Status::Retired.description(), None);
/// assert_eq!(Status::from_name("active", true), Some(Status::Active));
/// ```
#[macro_export]
macro_rules! enum_meta {
    ($ty:ty { $($variant:ident $(=> $label:literal)?),+ $(,)? }) => {
        impl $crate::enums::EnumMeta for $ty {
            fn variant_names() -> &'static [&'static str] {
                &[$(stringify!($variant)),+]
            }

            fn from_name(name: &str, ignore_case: bool) -> Option<Self> {
                $(
                    if (ignore_case && name.eq_ignore_ascii_case(stringify!($variant)))
                        || (!ignore_case && name == stringify!($variant))
                    {
                        return Some(<$ty>::$variant);
                    }
                )+
                None
            }

            fn description(&self) -> Option<&'static str> {
                match self {
                    $(Self::$variant => $crate::enum_meta!(@label $($label)?)),+
                }
            }
        }
    };
    (@label $label:literal) => { Some($label) };
    (@label) => { None };
}
