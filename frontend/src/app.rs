//! Navigation root.
//!
//! `App` owns the [`Navigator`] and renders every route on the stack, showing
//! only the top one. Screens below the top stay mounted, so going back to the
//! product list does not fetch again.

use yew::prelude::*;

use crate::components::feedback_form::FeedbackFormComponent;
use crate::components::header::Header;
use crate::components::home::HomeComponent;
use crate::components::product_list::ProductListComponent;
use crate::config::AppConfig;
use crate::navigation::{Navigator, Route};

pub enum Msg {
    Navigate(Route),
    Back,
}

pub struct App {
    navigator: Navigator,
    config: AppConfig,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            navigator: Navigator::new(),
            config: AppConfig::load(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let before = self.navigator.clone();
        match msg {
            Msg::Navigate(route) => self.navigator.navigate(route),
            Msg::Back => self.navigator.back(),
        }
        self.navigator != before
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_navigate = ctx.link().callback(Msg::Navigate);
        let on_back = ctx.link().callback(|_: ()| Msg::Back);
        let top = self.navigator.depth() - 1;

        html! {
            <ContextProvider<AppConfig> context={self.config.clone()}>
                <Header
                    route={self.navigator.current()}
                    can_go_back={self.navigator.can_go_back()}
                    {on_back}
                />
                {
                    for self.navigator.routes().iter().enumerate().map(|(index, route)| {
                        html! {
                            <main key={route.name()} class="screen" hidden={index != top}>
                                { screen(*route, &on_navigate) }
                            </main>
                        }
                    })
                }
            </ContextProvider<AppConfig>>
        }
    }
}

fn screen(route: Route, on_navigate: &Callback<Route>) -> Html {
    let on_navigate = on_navigate.clone();
    match route {
        Route::Home => html! { <HomeComponent {on_navigate} /> },
        Route::ProductList => html! { <ProductListComponent {on_navigate} /> },
        Route::FeedbackForm { product_id } => html! {
            <FeedbackFormComponent key={product_id.to_string()} {product_id} {on_navigate} />
        },
    }
}
