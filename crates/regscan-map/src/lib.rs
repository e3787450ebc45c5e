//! Ingredient name normalization, herbal detection and the MFDS → HIRA
//! ingredient bridge.

pub mod bridge;
pub mod error;
pub mod herbal;
pub mod index;
pub mod normalize;

pub use bridge::{BridgeSnapshot, BridgeStats, IngredientBridge, status_from_criteria};
pub use error::{BridgeError, Result};
pub use herbal::{is_herbal, matched_rule};
pub use normalize::{first_ingredient, normalize};
