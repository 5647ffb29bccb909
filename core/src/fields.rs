// giftfields/src/fields.rs

//! Every attribute key, submitted-field name, metadata label, and column id
//! the extension touches, in one place. The host stores flags as `"yes"` /
//! `"no"` strings; inside the extension a flag is a genuine `bool` and
//! [`YesNo`] translates only at the storage boundary.

use serde::{Deserialize, Serialize};

/// Product attribute holding the free-text "additional information" note.
pub const ADDITIONAL_INFO_ATTR: &str = "_additional_information";
/// Product attribute holding the gift-eligibility flag (`"yes"`/`"no"`).
pub const GIFT_ELIGIBLE_ATTR: &str = "_gift_eligible";
/// Product attribute holding the default gift message shown on the storefront.
pub const GIFT_MESSAGE_DEFAULT_ATTR: &str = "_gift_message_default";

/// Submitted-form field for the send-as-gift checkbox. The host omits
/// unchecked checkboxes from the submission entirely, so presence is the
/// only signal.
pub const GIFT_CHECKBOX_FIELD: &str = "send_as_gift";
/// Submitted-form field for the customer's gift message.
pub const GIFT_MESSAGE_FIELD: &str = "gift_message";

/// Order line metadata label for the gift flag.
pub const GIFT_FLAG_META: &str = "Send as Gift";
/// Order line metadata label for the gift message.
pub const GIFT_MESSAGE_META: &str = "Gift Message";
/// The value stored under [`GIFT_FLAG_META`].
pub const GIFT_FLAG_YES: &str = "Yes";

/// Column id registered on the admin order list.
pub const GIFT_ORDER_COLUMN: &str = "send_as_gift";
/// Label displayed for [`GIFT_ORDER_COLUMN`].
pub const GIFT_ORDER_COLUMN_LABEL: &str = "Send as Gift";

/// Display label for the additional-information block on the storefront.
pub const ADDITIONAL_INFO_LABEL: &str = "Additional Information";
/// Display label for the send-as-gift checkbox.
pub const GIFT_CHECKBOX_LABEL: &str = "Send as Gift";
/// Display label for the gift-message textarea.
pub const GIFT_MESSAGE_LABEL: &str = "Gift Message";

/// The host's string convention for boolean product attributes.
///
/// Exists only at the product-store boundary; everything past
/// [`YesNo::is_yes`] works with `bool`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    /// Checkbox semantics: a present field means checked, an absent field is
    /// indistinguishable from unchecked and maps to `No`.
    pub fn from_present(present: bool) -> Self {
        if present {
            YesNo::Yes
        } else {
            YesNo::No
        }
    }

    /// Parses the stored attribute value. Anything but `"yes"` is `No`,
    /// including the empty-string default for unset reads.
    pub fn from_attr(value: &str) -> Self {
        if value == "yes" {
            YesNo::Yes
        } else {
            YesNo::No
        }
    }

    pub fn as_attr(&self) -> &'static str {
        match self {
            YesNo::Yes => "yes",
            YesNo::No => "no",
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, YesNo::Yes)
    }
}

impl From<bool> for YesNo {
    fn from(b: bool) -> Self {
        YesNo::from_present(b)
    }
}
