//! Feedback form screen.
//!
//! Holds the five editable fields and the `product_id` received through the
//! route. Submitting validates presence locally; only a complete draft is
//! sent, as one `POST /evaluations`. The form keeps its contents after a
//! failed send so the user can retry.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::FeedbackFormProps;
pub use state::FeedbackFormComponent;

impl Component for FeedbackFormComponent {
    type Message = Msg;
    type Properties = FeedbackFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FeedbackFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
