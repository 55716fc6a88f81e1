//! Wishlist Models

/// Result of an idempotent wishlist add.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistAddOutcome {
    Added,
    AlreadyPresent,
}

/// Result of an idempotent wishlist remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistRemoveOutcome {
    Removed,
    NotPresent,
}
