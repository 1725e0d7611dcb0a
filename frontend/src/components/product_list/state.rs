//! State of the product list screen and the render decision derived from it.

use common::model::product::Product;

use crate::api::ApiError;
use crate::navigation::Route;

/// Lifecycle of the single products request.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadPhase {
    Loading,
    Loaded(Vec<Product>),
    /// Terminal; rendered the same way as an empty `Loaded`.
    LoadFailed,
}

/// What the view draws for the current phase.
#[derive(Debug, PartialEq)]
pub enum ListDisplay<'a> {
    Spinner,
    Empty,
    Products(&'a [Product]),
}

pub struct ProductListComponent {
    pub phase: LoadPhase,
}

impl ProductListComponent {
    pub fn new() -> Self {
        Self {
            phase: LoadPhase::Loading,
        }
    }

    pub fn loaded(&mut self, products: Vec<Product>) {
        self.phase = LoadPhase::Loaded(products);
    }

    pub fn load_failed(&mut self) {
        self.phase = LoadPhase::LoadFailed;
    }

    pub fn display(&self) -> ListDisplay<'_> {
        match &self.phase {
            LoadPhase::Loading => ListDisplay::Spinner,
            LoadPhase::Loaded(products) if !products.is_empty() => ListDisplay::Products(products),
            LoadPhase::Loaded(_) | LoadPhase::LoadFailed => ListDisplay::Empty,
        }
    }
}

/// Route opened by a product's "Avaliar" button.
pub fn feedback_route(product: &Product) -> Route {
    Route::FeedbackForm {
        product_id: product.id,
    }
}

/// Alert raised when the products request fails, `None` on success.
pub fn fetch_failure_alert(
    outcome: &Result<Vec<Product>, ApiError>,
) -> Option<(&'static str, &'static str)> {
    match outcome {
        Ok(_) => None,
        Err(_) => Some(("Erro", "Não foi possível carregar os produtos.")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64) -> Product {
        Product {
            id,
            name: format!("Produto {}", id),
            brand: "Marca".to_string(),
            price: "10.00".to_string(),
            description: "Descrição".to_string(),
            image: format!("https://cdn.example.com/{}.png", id),
        }
    }

    #[test]
    fn starts_loading() {
        let list = ProductListComponent::new();
        assert_eq!(list.display(), ListDisplay::Spinner);
    }

    #[test]
    fn loaded_products_render_one_entry_each() {
        let mut list = ProductListComponent::new();
        list.loaded(vec![product(3), product(5), product(8)]);

        let ListDisplay::Products(items) = list.display() else {
            panic!("expected products");
        };
        assert_eq!(items.len(), 3);

        let routes: Vec<Route> = items.iter().map(feedback_route).collect();
        assert_eq!(
            routes,
            vec![
                Route::FeedbackForm { product_id: 3 },
                Route::FeedbackForm { product_id: 5 },
                Route::FeedbackForm { product_id: 8 },
            ]
        );
    }

    #[test]
    fn empty_response_shows_empty_state() {
        let mut list = ProductListComponent::new();
        list.loaded(Vec::new());
        assert_eq!(list.display(), ListDisplay::Empty);
    }

    #[test]
    fn failure_renders_like_empty_response() {
        let mut failed = ProductListComponent::new();
        failed.load_failed();

        let mut empty = ProductListComponent::new();
        empty.loaded(Vec::new());

        assert_eq!(failed.display(), empty.display());
    }

    #[test]
    fn only_failed_fetch_alerts() {
        assert_eq!(fetch_failure_alert(&Ok(Vec::new())), None);
        assert_eq!(fetch_failure_alert(&Ok(vec![product(1)])), None);
        assert_eq!(
            fetch_failure_alert(&Err(ApiError::Status(502))),
            Some(("Erro", "Não foi possível carregar os produtos."))
        );
    }
}
