//! # Domain Types
//!
//! Core domain types used throughout the StuMa client.
//!
//! ## Identity Pattern
//! Every catalog [`Item`] carries a server-assigned integer `id`. Two `Item`
//! values are equal **iff** their ids are equal; every other field is excluded
//! from equality and hashing. Two structurally different snapshots of the same
//! listing (before/after a stock update) therefore keep resolving to the same
//! key in the cart and wishlist containers.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Item
// =============================================================================

/// A catalog listing offered for sale.
///
/// The client only ever holds read snapshots of items obtained from a fetch.
/// Serde renames bind the fields to the backend's existing JSON contract.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    /// Server-assigned identifier. Stable and unique; the sole identity key.
    pub id: i64,

    /// Display name of the listing.
    #[serde(rename = "items_name")]
    pub name: String,

    /// Free-text category label. Matched case-insensitively.
    pub category: String,

    /// Seller-provided description.
    pub description: String,

    /// Units available. The cart never holds more than this per item.
    pub stock: u32,

    /// Unit price in rupiah.
    pub price: f64,

    /// Display name of the seller.
    #[serde(rename = "seller_name")]
    pub seller: String,

    /// Creation timestamp as reported by the server. Opaque, never parsed.
    pub created_at: String,

    /// Last-update timestamp as reported by the server. Opaque, never parsed.
    pub updated_at: String,
}

/// Identity is the id alone. `eq` and `hash` must stay in agreement.
impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Item {}

impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

// =============================================================================
// Item Draft
// =============================================================================

/// A locally-constructed listing for the sell flow.
///
/// Has no id yet (the server assigns one on creation) and is never
/// equality-compared against existing items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemDraft {
    #[serde(rename = "items_name")]
    pub name: String,
    pub category: String,
    pub description: String,
    pub stock: u32,
    pub price: f64,
}

// =============================================================================
// Category
// =============================================================================

/// The fixed category filter set shown on the home screen.
///
/// `All` is the identity filter; every other variant matches item categories
/// by case-insensitive equality on its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    All,
    Clothes,
    Stationery,
    Furniture,
    Electronic,
}

impl Category {
    /// Every selectable filter, in display order.
    pub const FILTERS: [Category; 5] = [
        Category::All,
        Category::Clothes,
        Category::Stationery,
        Category::Furniture,
        Category::Electronic,
    ];

    /// The display label of this filter.
    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Clothes => "Clothes",
            Category::Stationery => "Stationery",
            Category::Furniture => "Furniture",
            Category::Electronic => "Electronic",
        }
    }

    /// Resolves a display label back to a filter, case-insensitively.
    pub fn from_label(label: &str) -> Option<Category> {
        Category::FILTERS
            .iter()
            .copied()
            .find(|category| category.label().eq_ignore_ascii_case(label))
    }

    /// Whether an item's free-text category falls under this filter.
    pub fn matches(&self, raw_category: &str) -> bool {
        match self {
            Category::All => true,
            _ => raw_category.eq_ignore_ascii_case(self.label()),
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::All
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Profile
// =============================================================================

/// The authenticated user's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub email: String,
}

/// Editable subset of the profile sent on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProfileUpdate {
    pub name: String,
    pub phone: String,
    pub address: String,
}

// =============================================================================
// Auth Payloads
// =============================================================================

/// Login credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// New-account registration form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Registration {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub email: String,
    pub password: String,
}

/// Password change request. The backend expects camelCase field names here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub email: String,
    pub old_password: String,
    pub new_password: String,
}

/// Successful login outcome: a server message plus the bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AuthSession {
    pub message: String,
    pub token: String,
}

/// Generic acknowledgement for write operations that return only a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ServerAck {
    pub message: String,
}

// =============================================================================
// Unit Tests
// =============================================================================
