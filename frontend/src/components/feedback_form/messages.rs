use common::model::feedback::Experience;

pub enum Msg {
    SetName(String),
    SetEmail(String),
    SetFeedback(String),
    SelectExperience(Experience),
    SetRecommend(bool),
    Submit,
}
