//! Update function for the feedback form.
//!
//! Field messages only mutate the draft. `Submit` asks the state for a
//! [`SubmitEffect`]: a missing field ends in an alert, a complete draft in one
//! spawned POST. The POST's outcome is handled inside the future itself, so the
//! alert and the return to `Home` still happen when the form was closed while
//! the request was in flight. Concurrent submits are not deduplicated.

use gloo_console::{error, log};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::submit_feedback;
use crate::config::app_config;
use crate::helpers::{now_millis, show_alert};

use super::messages::Msg;
use super::state::{resolve_submission, FeedbackFormComponent, SubmitEffect};

pub fn update(
    component: &mut FeedbackFormComponent,
    ctx: &Context<FeedbackFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetName(name) => {
            component.draft.name = name;
            true
        }
        Msg::SetEmail(email) => {
            component.draft.email = email;
            true
        }
        Msg::SetFeedback(feedback) => {
            component.draft.feedback = feedback;
            true
        }
        Msg::SelectExperience(experience) => {
            component.draft.experience = Some(experience);
            true
        }
        Msg::SetRecommend(recommend) => {
            component.draft.recommend = Some(recommend);
            true
        }
        Msg::Submit => {
            match component.submit_effect(ctx.props().product_id, now_millis()) {
                SubmitEffect::Alert(missing) => {
                    log!(format!("Feedback not sent: {}", missing));
                    show_alert("Erro", "Preencha todos os campos.");
                }
                SubmitEffect::Post(record) => {
                    let config = app_config(ctx.link());
                    let on_navigate = ctx.props().on_navigate.clone();
                    spawn_local(async move {
                        let outcome = submit_feedback(&config, &record).await;
                        if let Err(e) = &outcome {
                            error!(format!("Error sending feedback: {}", e));
                        }

                        let resolution = resolve_submission(&outcome);
                        show_alert(resolution.title, resolution.message);
                        if let Some(route) = resolution.route {
                            on_navigate.emit(route);
                        }
                    });
                }
            }
            false
        }
    }
}
