use yew::prelude::*;

use crate::navigation::Route;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub route: Route,
    pub can_go_back: bool,
    pub on_back: Callback<()>,
}

/// Stack header: title of the visible route and a back action when one exists.
pub struct Header;

impl Component for Header {
    type Message = ();
    type Properties = HeaderProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Header
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let form = matches!(props.route, Route::FeedbackForm { .. });

        html! {
            <header class={classes!("stack-header", form.then_some("stack-header-form"))}>
                {
                    if props.can_go_back {
                        let onclick = props.on_back.reform(|_: MouseEvent| ());
                        html! {
                            <button class="back-btn" title="Voltar" {onclick}>{"‹"}</button>
                        }
                    } else {
                        html! {}
                    }
                }
                <h1 class="stack-title">{ props.route.title() }</h1>
            </header>
        }
    }
}
