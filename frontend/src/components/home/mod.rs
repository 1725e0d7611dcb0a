use yew::prelude::*;

use crate::navigation::Route;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_navigate: Callback<Route>,
}

/// Entry screen: a welcome line and a button to the product list.
pub struct HomeComponent;

impl Component for HomeComponent {
    type Message = ();
    type Properties = HomeProps;

    fn create(_ctx: &Context<Self>) -> Self {
        HomeComponent
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onclick = ctx.props().on_navigate.reform(|_: MouseEvent| Route::ProductList);

        html! {
            <div class="home-container">
                <p>{"Bem-Vindo(a) a Página inicial"}</p>
                <button class="button" {onclick}>{"Go to Products"}</button>
            </div>
        }
    }
}
