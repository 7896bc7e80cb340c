//! WhatsApp contact links shown on the public catalogs.

use crate::core::catalog::Piercing;

/// Piercer's WhatsApp number
pub const PIERCER_PHONE: &str = "+5358622909";
/// Piercer's number as printed on the page
pub const PIERCER_PHONE_LABEL: &str = "+53 58-62-29-09";

/// Tattoo artist's WhatsApp number
pub const TATTOO_ARTIST_PHONE: &str = "+5358228400";
/// Tattoo artist's number as printed on the page
pub const TATTOO_ARTIST_PHONE_LABEL: &str = "+53 58-22-84-00";

/// Community group invite shown on the welcome page
pub const WHATSAPP_GROUP_URL: &str = "https://chat.whatsapp.com/your-group-invite-link";

/// `wa.me` link that opens a chat with `phone` and a prefilled `message`
pub fn whatsapp_link(phone: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", phone, encode_component(message))
}

/// Purchase enquiry for one piercing
pub fn piercing_purchase_link(piercing: &Piercing) -> String {
    let message = format!(
        "Hola, estoy interesado/a en comprar el piercing {} por ${}. ¿Podría darme más información?",
        piercing.name, piercing.price
    );
    whatsapp_link(PIERCER_PHONE, &message)
}

pub fn piercing_appointment_link() -> String {
    whatsapp_link(
        PIERCER_PHONE,
        "Hola, me gustaría agendar una cita para un piercing.",
    )
}

pub fn tattoo_appointment_link() -> String {
    whatsapp_link(TATTOO_ARTIST_PHONE, "Quiero agendar una cita")
}

/// Percent-encode everything except the URI-component unreserved set.
fn encode_component(input: &str) -> String {
    const UNRESERVED: &[u8] = b"-_.!~*'()";

    let mut out = String::with_capacity(input.len() * 3);
    for byte in input.bytes() {
        if byte.is_ascii_alphanumeric() || UNRESERVED.contains(&byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{:02X}", byte));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::ItemId;

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("$12.5?"), "%2412.5%3F");
        assert_eq!(encode_component("ñ"), "%C3%B1");
        assert_eq!(encode_component("(ok)!"), "(ok)!");
    }

    #[test]
    fn test_tattoo_appointment_link() {
        assert_eq!(
            tattoo_appointment_link(),
            "https://wa.me/+5358228400?text=Quiero%20agendar%20una%20cita"
        );
    }

    #[test]
    fn test_purchase_link_names_piercing_and_price() {
        let piercing = Piercing {
            id: ItemId(1),
            name: "Septum".into(),
            description: String::new(),
            price: 12.5,
            image: None,
        };
        let link = piercing_purchase_link(&piercing);

        assert!(link.starts_with("https://wa.me/+5358622909?text=Hola%2C%20estoy"));
        assert!(link.contains("piercing%20Septum%20por%20%2412.5."));

        let whole = Piercing { price: 25.0, ..piercing };
        assert!(piercing_purchase_link(&whole).contains("por%20%2425."));
    }

    #[test]
    fn test_piercing_appointment_link() {
        assert!(piercing_appointment_link().ends_with("agendar%20una%20cita%20para%20un%20piercing."));
    }
}
