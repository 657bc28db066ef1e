//! The closed-value-set contract over real Rust enums.

use serde_json::Value;

use crate::map::VariantMap;
use crate::value::VariantValue;

/// A Rust enum tied to its declared wire-value set.
///
/// The compiler already proves `match` exhaustiveness over the variants;
/// this trait supplies the runtime half of the contract for data crossing a
/// trust boundary: a candidate of unknown provenance is validated against
/// the declared values before being treated as a member of the set.
///
/// Implementations are hand-written and small: list every variant once in
/// [`ClosedVariant::variants`], associate each with its identifier and wire
/// value. Everything else is provided.
///
/// # Example
///
/// ```
/// use casewise::{ClosedVariant, VariantValue};
/// use serde_json::json;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Status {
///     Active,
///     Inactive,
/// }
///
/// impl ClosedVariant for Status {
///     fn variants() -> &'static [Self] {
///         &[Status::Active, Status::Inactive]
///     }
///
///     fn name(self) -> &'static str {
///         match self {
///             Status::Active => "Active",
///             Status::Inactive => "Inactive",
///         }
///     }
///
///     fn value(self) -> VariantValue {
///         match self {
///             Status::Active => VariantValue::from("active"),
///             Status::Inactive => VariantValue::from("inactive"),
///         }
///     }
/// }
///
/// assert_eq!(Status::parse(&json!("active")), Some(Status::Active));
/// assert_eq!(Status::parse(&json!("paused")), None);
/// assert!(Status::is_value(&json!("inactive")));
/// ```
pub trait ClosedVariant: Sized + Copy + PartialEq + 'static {
    /// Every variant, in declaration order.
    fn variants() -> &'static [Self];

    /// The identifier of this variant, as written in the declaration.
    fn name(self) -> &'static str;

    /// The declared wire value of this variant.
    fn value(self) -> VariantValue;

    /// Validate `candidate` against the declared value set and return the
    /// matching variant, or `None` when the candidate is not a member.
    ///
    /// A null candidate yields `None` immediately, before any membership
    /// comparison. Never panics.
    #[must_use]
    fn parse(candidate: &Value) -> Option<Self> {
        if candidate.is_null() {
            return None;
        }
        Self::variants()
            .iter()
            .copied()
            .find(|variant| variant.value().matches(candidate))
    }

    /// True iff `candidate` strictly equals one of the declared values.
    #[must_use]
    fn is_value(candidate: &Value) -> bool {
        Self::variants()
            .iter()
            .any(|variant| variant.value().matches(candidate))
    }

    /// The equivalent dynamic mapping: identifier -> declared value, one
    /// entry per variant, in declaration order.
    #[must_use]
    fn as_map() -> VariantMap {
        Self::variants()
            .iter()
            .map(|variant| (variant.name(), variant.value()))
            .collect()
    }
}
