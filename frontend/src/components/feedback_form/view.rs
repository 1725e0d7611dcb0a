use common::model::feedback::Experience;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::messages::Msg;
use super::state::FeedbackFormComponent;

pub fn view(component: &FeedbackFormComponent, ctx: &Context<FeedbackFormComponent>) -> Html {
    let link = ctx.link();
    let draft = &component.draft;

    html! {
        <div class="form-container">
            <h2 class="form-title">{"Nos dê seu Feedback"}</h2>

            { text_input("Seu nome", &draft.name, link.callback(Msg::SetName)) }
            { text_input("Seu e-mail", &draft.email, link.callback(Msg::SetEmail)) }
            { text_input("Descreva sua experiência", &draft.feedback, link.callback(Msg::SetFeedback)) }

            <p class="form-label">{"Como foi sua experiência?"}</p>
            <div class="experience-buttons">
                { for Experience::ALL.iter().map(|&experience| {
                    option_button(
                        experience.label(),
                        draft.experience == Some(experience),
                        link.callback(move |_| Msg::SelectExperience(experience)),
                    )
                }) }
            </div>

            <p class="form-label">{"Recomendaria para outras pessoas?"}</p>
            <div class="recommend-buttons">
                { option_button("Sim", draft.recommend == Some(true), link.callback(|_| Msg::SetRecommend(true))) }
                { option_button("Não", draft.recommend == Some(false), link.callback(|_| Msg::SetRecommend(false))) }
            </div>

            <button class="button" onclick={link.callback(|_| Msg::Submit)}>{"Enviar Feedback"}</button>
        </div>
    }
}

fn text_input(placeholder: &'static str, value: &str, on_change: Callback<String>) -> Html {
    let oninput = on_change.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.value()
    });

    html! {
        <input class="form-input" type="text" {placeholder} value={value.to_string()} {oninput} />
    }
}

fn option_button(label: &'static str, selected: bool, onclick: Callback<MouseEvent>) -> Html {
    html! {
        <button
            class={classes!("option-btn", selected.then_some("selected-option"))}
            {onclick}
        >
            { label }
        </button>
    }
}
