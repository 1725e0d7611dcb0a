use yew::prelude::*;

use crate::navigation::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct FeedbackFormProps {
    /// Product being reviewed, taken from `Route::FeedbackForm`.
    pub product_id: i64,

    /// Receives `Route::Home` after a successful submission.
    pub on_navigate: Callback<Route>,
}
