// giftfields/src/model/cart.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// The customer's gift choice for one cart line.
///
/// Presence of this annotation IS the send-as-gift flag: a line that is not
/// a gift carries no annotation at all, so there is no explicit `false`
/// state to keep consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiftChoice {
    /// Sanitized gift message; `None` when the box was left empty.
    pub message: Option<String>,
}

/// Anti-merge token attached to every captured cart line.
///
/// The cart merges lines that compare equal by content; a fresh key per
/// add-to-cart forces each submission onto its own line even when two
/// submissions of the same product would otherwise collide. Derived from
/// wall-clock time and a random value, hashed to a fixed-length opaque hex
/// token. Collisions are tolerated: at worst two submissions merge into one
/// line. This is not an identity or security primitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineKey(String);

impl LineKey {
    pub fn generate() -> Self {
        let mut hasher = Sha256::new();
        hasher.update(Utc::now().timestamp_micros().to_be_bytes());
        hasher.update(rand::random::<u64>().to_be_bytes());
        LineKey(hex::encode(hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One entry in a shopping session: a product plus selected options, prior
/// to checkout.
#[derive(Debug, Clone, Serialize)]
pub struct CartLine {
    pub product_id: Uuid,
    pub quantity: u32,
    pub gift: Option<GiftChoice>,
    pub line_key: Option<LineKey>,
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    pub fn new(product_id: Uuid, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
            gift: None,
            line_key: None,
            added_at: Utc::now(),
        }
    }

    pub fn is_gift(&self) -> bool {
        self.gift.is_some()
    }

    pub fn gift_message(&self) -> Option<&str> {
        self.gift.as_ref()?.message.as_deref()
    }

    /// Content equality as the host's merge rule sees it. `added_at` is
    /// bookkeeping, not content.
    fn merges_with(&self, other: &CartLine) -> bool {
        self.product_id == other.product_id
            && self.gift == other.gift
            && self.line_key == other.line_key
    }
}

/// An ordered collection of cart lines with the host's merge-by-equality
/// add semantics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a line, merging into an existing line of equal content by
    /// summing quantities. A distinct [`LineKey`] defeats the merge.
    pub fn add_line(&mut self, line: CartLine) {
        if let Some(existing) = self.lines.iter_mut().find(|l| l.merges_with(&line)) {
            existing.quantity += line.quantity;
            return;
        }
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_lines_merge_and_sum_quantity() {
        let product = Uuid::new_v4();
        let mut cart = Cart::new();
        cart.add_line(CartLine::new(product, 1));
        cart.add_line(CartLine::new(product, 2));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 3);
    }

    #[test]
    fn distinct_line_keys_defeat_the_merge() {
        let product = Uuid::new_v4();
        let mut cart = Cart::new();
        for _ in 0..2 {
            let mut line = CartLine::new(product, 1);
            line.line_key = Some(LineKey::generate());
            cart.add_line(line);
        }
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn differing_gift_annotations_do_not_merge() {
        let product = Uuid::new_v4();
        let mut cart = Cart::new();
        cart.add_line(CartLine::new(product, 1));
        let mut gift = CartLine::new(product, 1);
        gift.gift = Some(GiftChoice { message: None });
        cart.add_line(gift);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn generated_keys_are_fixed_length_and_distinct() {
        let a = LineKey::generate();
        let b = LineKey::generate();
        assert_eq!(a.as_str().len(), 64);
        assert_eq!(b.as_str().len(), 64);
        assert_ne!(a, b);
    }
}
