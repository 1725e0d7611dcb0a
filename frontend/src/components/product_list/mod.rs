//! Product list screen.
//!
//! On first render the component issues a single `GET /products` and moves
//! from `Loading` to either `Loaded` or `LoadFailed`. A failed load alerts the
//! user, logs the error and then renders exactly like an empty list. The alert
//! and the log are raised from the request future, so they are not lost when
//! the screen is left before the request settles.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

use crate::api::fetch_products;
use crate::config::app_config;
use crate::helpers::show_alert;

pub use messages::Msg;
pub use props::ProductListProps;
pub use state::ProductListComponent;

use state::fetch_failure_alert;

impl Component for ProductListComponent {
    type Message = Msg;
    type Properties = ProductListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ProductListComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            let config = app_config(ctx.link());
            spawn_local(async move {
                let outcome = fetch_products(&config).await;
                if let Some((title, message)) = fetch_failure_alert(&outcome) {
                    show_alert(title, message);
                }
                match outcome {
                    Ok(products) => link.send_message(Msg::Loaded(products)),
                    Err(e) => {
                        error!(format!("Error fetching products: {}", e));
                        link.send_message(Msg::LoadFailed);
                    }
                }
            });
        }
    }
}
