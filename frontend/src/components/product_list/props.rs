use yew::prelude::*;

use crate::navigation::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct ProductListProps {
    /// Called with `Route::FeedbackForm` when a product's "Avaliar" button is pressed.
    pub on_navigate: Callback<Route>,
}
