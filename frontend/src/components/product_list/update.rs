use yew::prelude::*;

use super::messages::Msg;
use super::state::ProductListComponent;

/// Applies the fetch result to the list. User notification already happened in
/// the request future; this only moves the state machine.
pub fn update(
    component: &mut ProductListComponent,
    _ctx: &Context<ProductListComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Loaded(products) => {
            component.loaded(products);
            true
        }
        Msg::LoadFailed => {
            component.load_failed();
            true
        }
    }
}
