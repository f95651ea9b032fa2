//! `uai-property` — typed agent state values with a uniform `[0, 1]` view.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`property`] | `PropertyKind`, `PropertyValue`, `Property`                  |
//! | [`spec`]     | `PropertySpec`, `StartRange`: declarative creation config    |
//! | [`store`]    | `PropertyStore`: name-keyed registry owned by one agent      |
//!
//! # Normalization contract
//!
//! | Kind    | `normalized_value()`                                  |
//! |---------|-------------------------------------------------------|
//! | `Bool`  | `1.0` if true, else `0.0`                             |
//! | `Int`   | `clamp01((raw - min) / (max - min))`                  |
//! | `Float` | `clamp01((raw - min) / (max - min))`                  |
//!
//! A degenerate range (`min == max`) normalizes to `0.0`.  Out-of-range
//! writes are clamped, never rejected.
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | FxHash for the property-name index.                      |
//! | `serde`   | Derives `Serialize`/`Deserialize` on the spec types.     |

pub mod property;
pub mod spec;
pub mod store;


pub use property::{Property, PropertyKind, PropertyValue};
pub use spec::{PropertySpec, StartRange};
pub use store::PropertyStore;
