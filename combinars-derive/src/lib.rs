//! Derive macro for the combinars `Representable` contract.
//!
//! # Available Derive Macros
//!
//! - [`Representable`]: Generates a JSON representation from a type's fields
//!
//! # Example
//!
//! ```rust,ignore
//! use combinars::capability::Representable;
//! use combinars_derive::Representable;
//!
//! #[derive(Representable)]
//! struct Point {
//!     x: i32,
//!     #[representable(rename = "vertical")]
//!     y: i32,
//!     #[representable(skip)]
//!     cache: Vec<u8>,
//! }
//!
//! let point = Point { x: 1, y: 2, cache: Vec::new() };
//! assert_eq!(point.to_representation(), serde_json::json!({ "x": 1, "vertical": 2 }));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod representable;

use proc_macro::TokenStream;

/// Derive macro implementing `combinars::capability::Representable`.
///
/// # Generated Representation
///
/// | Input                         | Representation                     |
/// |-------------------------------|------------------------------------|
/// | struct with named fields      | object of field name to value      |
/// | tuple struct with one field   | the field's representation         |
/// | tuple struct with more fields | array of field representations     |
/// | unit struct                   | `null`                             |
/// | unit enum variant             | the variant name as a string       |
/// | other enum variant            | `{ "Variant": <fields> }`          |
///
/// Every type parameter gets a `Representable` bound.
///
/// # Field and Variant Attributes
///
/// - `#[representable(skip)]`: leave a named field out of the object
/// - `#[representable(rename = "name")]`: use `name` as the field key or
///   variant name
///
/// # Example
///
/// ```rust,ignore
/// use combinars_derive::Representable;
///
/// #[derive(Representable)]
/// enum Shape {
///     Empty,
///     Circle(f64),
///     Rectangle { width: f64, height: f64 },
/// }
///
/// // Shape::Empty                 -> "Empty"
/// // Shape::Circle(1.0)           -> { "Circle": 1.0 }
/// // Shape::Rectangle { .. }      -> { "Rectangle": { "width": .., "height": .. } }
/// ```
#[proc_macro_derive(Representable, attributes(representable))]
pub fn derive_representable(input: TokenStream) -> TokenStream {
    representable::derive_representable_impl(input)
}
