use serde::{Deserialize, Serialize};

/// A product as served by `GET /products`.
///
/// The client never edits products; it only renders them and forwards `id`
/// to the feedback form. `price` stays textual because the service stores it
/// that way (for example `"R$ 129,90"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub brand: String,
    pub price: String,
    pub description: String,
    /// Absolute URI of the product picture.
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::Product;

    #[test]
    fn decodes_service_payload() {
        let body = r#"[{
            "id": 1,
            "name": "Fone Bluetooth",
            "brand": "Sonora",
            "price": "199.90",
            "description": "Fone sem fio",
            "image": "https://cdn.example.com/fone.png"
        }]"#;

        let products: Vec<Product> = serde_json::from_str(body).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[0].price, "199.90");
    }
}
