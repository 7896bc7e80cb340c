//! Piercing and tattoo records as the backend serves them, and the editable
//! fields sent back as multipart forms.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use super::CatalogResource;
use crate::core::error::ApiError;
use crate::core::http::{FileUpload, FormPart};

/// Numeric id, unique within one resource
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct ItemId(pub u64);

/// A record of one catalog
pub trait CatalogItem: Clone + PartialEq + DeserializeOwned + Send + Sync + 'static {
    type Fields: CatalogFields + for<'a> From<&'a Self>;

    const RESOURCE: CatalogResource;

    fn id(&self) -> ItemId;
    fn name(&self) -> &str;
}

/// Editable attributes of a catalog record
pub trait CatalogFields: Clone + Send + Sync + 'static {
    /// Placeholder record created by the admin "add" button, edited in place afterwards
    fn draft(today: NaiveDate) -> Self;

    /// Local checks run before anything is sent
    fn validate(&self) -> Result<(), ApiError>;
    fn into_parts(self) -> Vec<FormPart>;
}

/// Browser-usable image source: URLs pass through, raw base64 becomes a data URI.
pub fn image_src(image: Option<&str>) -> Option<String> {
    let image = image?.trim();
    if image.is_empty() {
        return None;
    }
    let is_url = ["http://", "https://", "/", "data:"]
        .iter()
        .any(|prefix| image.starts_with(prefix));
    if is_url {
        Some(image.to_string())
    } else {
        Some(format!("data:image/jpeg;base64,{}", image))
    }
}

fn de_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Accepts `2024-03-09` as well as datetime strings such as `2024-03-09T10:00:00Z`
fn de_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();
    let day = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(serde::de::Error::custom)
}

/// Price typed in the admin editor; `12,50` is read as `12.50`.
pub fn parse_price(text: &str) -> Option<f64> {
    let price: f64 = text.trim().replace(',', ".").parse().ok()?;
    (price.is_finite() && price >= 0.0).then_some(price)
}

fn require_name(name: &str) -> Result<(), ApiError> {
    if name.trim().is_empty() {
        return Err(ApiError::Validation("El nombre es obligatorio".to_string()));
    }
    Ok(())
}

fn push_image(parts: &mut Vec<FormPart>, image: Option<FileUpload>) {
    if let Some(upload) = image {
        parts.push(FormPart::File {
            name: "image".to_string(),
            upload,
        });
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Piercing {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "de_price")]
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
}

impl Piercing {
    pub fn image_src(&self) -> Option<String> {
        image_src(self.image.as_deref())
    }

    pub fn price_label(&self) -> String {
        format_price(self.price)
    }
}

impl CatalogItem for Piercing {
    type Fields = PiercingFields;

    const RESOURCE: CatalogResource = CatalogResource::Piercings;

    fn id(&self) -> ItemId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// `$25` for whole amounts, `$25.50` otherwise
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("${:.0}", price)
    } else {
        format!("${:.2}", price)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PiercingFields {
    pub name: String,
    pub description: String,
    /// Price as typed; parsed with [`parse_price`] on validation
    pub price: String,
    pub image: Option<FileUpload>,
}

impl From<&Piercing> for PiercingFields {
    fn from(p: &Piercing) -> Self {
        Self {
            name: p.name.clone(),
            description: p.description.clone(),
            price: p.price.to_string(),
            image: None,
        }
    }
}

impl CatalogFields for PiercingFields {
    fn draft(_today: NaiveDate) -> Self {
        Self {
            name: "Nuevo Piercing".to_string(),
            description: "Descripción del nuevo piercing".to_string(),
            price: "0".to_string(),
            image: None,
        }
    }

    fn validate(&self) -> Result<(), ApiError> {
        require_name(&self.name)?;
        if parse_price(&self.price).is_none() {
            return Err(ApiError::Validation(
                "El precio debe ser un número positivo".to_string(),
            ));
        }
        Ok(())
    }

    fn into_parts(self) -> Vec<FormPart> {
        let price = parse_price(&self.price).unwrap_or_default();
        let mut parts = vec![
            FormPart::text("name", self.name.trim()),
            FormPart::text("description", self.description),
            FormPart::text("price", format!("{:.2}", price)),
        ];
        push_image(&mut parts, self.image);
        parts
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tattoo {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(deserialize_with = "de_date")]
    pub date: NaiveDate,
}

impl Tattoo {
    pub fn image_src(&self) -> Option<String> {
        image_src(self.image.as_deref())
    }

    pub fn date_label(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }
}

impl CatalogItem for Tattoo {
    type Fields = TattooFields;

    const RESOURCE: CatalogResource = CatalogResource::Tattoos;

    fn id(&self) -> ItemId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TattooFields {
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
    pub image: Option<FileUpload>,
}

impl From<&Tattoo> for TattooFields {
    fn from(t: &Tattoo) -> Self {
        Self {
            name: t.name.clone(),
            description: t.description.clone(),
            date: t.date,
            image: None,
        }
    }
}

impl CatalogFields for TattooFields {
    fn draft(today: NaiveDate) -> Self {
        Self {
            name: "Nuevo Tatuaje".to_string(),
            description: "Descripción del nuevo tatuaje".to_string(),
            date: today,
            image: None,
        }
    }

    fn validate(&self) -> Result<(), ApiError> {
        require_name(&self.name)
    }

    fn into_parts(self) -> Vec<FormPart> {
        let mut parts = vec![
            FormPart::text("name", self.name.trim()),
            FormPart::text("description", self.description),
            FormPart::text("date", self.date.format("%Y-%m-%d").to_string()),
        ];
        push_image(&mut parts, self.image);
        parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_piercing_price_accepts_number_and_decimal_string() {
        let a: Piercing = serde_json::from_value(json!({
            "id": 1, "name": "Septum", "description": "Acero", "price": 25, "image": null
        }))
        .unwrap();
        let b: Piercing = serde_json::from_value(json!({
            "id": 2, "name": "Nostril", "price": "12.50"
        }))
        .unwrap();

        assert_eq!(a.price, 25.0);
        assert_eq!(a.id, ItemId(1));
        assert_eq!(b.price, 12.5);
        assert_eq!(b.description, "");
        assert!(
            serde_json::from_value::<Piercing>(json!({ "id": 3, "name": "x", "price": "free" }))
                .is_err()
        );
    }

    #[test]
    fn test_tattoo_date() {
        let t: Tattoo = serde_json::from_value(json!({
            "id": 7, "name": "Rosa", "description": "Blackwork",
            "image": "https://cdn.example.com/rosa.jpg", "date": "2024-03-09"
        }))
        .unwrap();
        assert_eq!(t.date, NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
        assert_eq!(t.date_label(), "09/03/2024");
    }

    #[test]
    fn test_tattoo_date_accepts_datetime() {
        let t: Tattoo = serde_json::from_value(json!({
            "id": 8, "name": "Lobo", "date": "2024-03-09T18:30:00Z"
        }))
        .unwrap();
        assert_eq!(t.date, NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
        assert!(
            serde_json::from_value::<Tattoo>(json!({ "id": 9, "name": "x", "date": "ayer" }))
                .is_err()
        );
    }

    #[test]
    fn test_parse_price_keeps_typed_decimals() {
        assert_eq!(parse_price("12.05"), Some(12.05));
        assert_eq!(parse_price("12."), Some(12.0));
        assert_eq!(parse_price(" 12,50 "), Some(12.5));
        assert_eq!(parse_price("0.0"), Some(0.0));
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("-3"), None);
        assert_eq!(parse_price("NaN"), None);
    }

    #[test]
    fn test_partial_price_text_is_kept_until_sent() {
        let mut fields = PiercingFields::draft(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        for typed in ["1", "12", "12.", "12.0", "12.05"] {
            fields.price = typed.to_string();
            assert_eq!(fields.price, typed);
            assert!(fields.validate().is_ok());
        }
        let parts = fields.into_parts();
        assert_eq!(parts[2], FormPart::text("price", "12.05"));
    }

    #[test]
    fn test_image_src() {
        assert_eq!(image_src(None), None);
        assert_eq!(image_src(Some("  ")), None);
        assert_eq!(
            image_src(Some("https://cdn.example.com/a.jpg")).as_deref(),
            Some("https://cdn.example.com/a.jpg")
        );
        assert_eq!(image_src(Some("/media/a.jpg")).as_deref(), Some("/media/a.jpg"));
        assert_eq!(
            image_src(Some("iVBORw0KGgo=")).as_deref(),
            Some("data:image/jpeg;base64,iVBORw0KGgo=")
        );
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(25.0), "$25");
        assert_eq!(format_price(12.5), "$12.50");
    }

    #[test]
    fn test_piercing_fields_validation() {
        let ok = PiercingFields {
            name: "Helix".into(),
            price: "10".into(),
            ..Default::default()
        };
        assert!(ok.validate().is_ok());

        let blank = PiercingFields {
            name: "   ".into(),
            ..ok.clone()
        };
        assert!(matches!(blank.validate(), Err(ApiError::Validation(_))));

        let negative = PiercingFields {
            price: "-1".into(),
            ..ok.clone()
        };
        assert!(negative.validate().is_err());

        let garbage = PiercingFields {
            price: "diez".into(),
            ..ok
        };
        assert!(garbage.validate().is_err());
    }

    #[test]
    fn test_piercing_fields_parts_include_image_only_when_set() {
        let fields = PiercingFields {
            name: " Helix ".into(),
            description: "Oro".into(),
            price: "30".into(),
            image: None,
        };
        let parts = fields.clone().into_parts();
        let names: Vec<_> = parts.iter().map(FormPart::name).collect();
        assert_eq!(names, ["name", "description", "price"]);
        assert_eq!(parts[0], FormPart::text("name", "Helix"));
        assert_eq!(parts[2], FormPart::text("price", "30.00"));

        let with_image = PiercingFields {
            image: Some(FileUpload {
                file_name: "helix.png".into(),
                content_type: "image/png".into(),
                bytes: vec![0x89, 0x50],
            }),
            ..fields
        };
        let parts = with_image.into_parts();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[3].name(), "image");
    }

    #[test]
    fn test_tattoo_fields_parts_and_draft() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        let draft = TattooFields::draft(today);
        assert!(draft.validate().is_ok());

        let parts = draft.into_parts();
        assert_eq!(parts[0], FormPart::text("name", "Nuevo Tatuaje"));
        assert_eq!(parts[2], FormPart::text("date", "2025-01-31"));

        let piercing = PiercingFields::draft(today);
        assert_eq!(piercing.name, "Nuevo Piercing");
        assert_eq!(piercing.price, "0");
        assert!(piercing.validate().is_ok());
    }

    #[test]
    fn test_fields_from_item() {
        let tattoo = Tattoo {
            id: ItemId(3),
            name: "Ancla".into(),
            description: "Old school".into(),
            image: Some("https://x/y.jpg".into()),
            date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
        };
        let fields = TattooFields::from(&tattoo);
        assert_eq!(fields.name, "Ancla");
        assert_eq!(fields.image, None);
        assert_eq!(fields.date, tattoo.date);

        let piercing = Piercing {
            id: ItemId(4),
            name: "Helix".into(),
            description: String::new(),
            price: 12.5,
            image: None,
        };
        assert_eq!(PiercingFields::from(&piercing).price, "12.5");
    }
}
