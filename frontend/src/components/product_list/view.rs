use common::model::product::Product;
use yew::prelude::*;

use crate::navigation::Route;

use super::state::{feedback_route, ListDisplay, ProductListComponent};

pub fn view(component: &ProductListComponent, ctx: &Context<ProductListComponent>) -> Html {
    let on_navigate = &ctx.props().on_navigate;

    match component.display() {
        ListDisplay::Spinner => html! {
            <div class="loader-container">
                <div class="spinner" role="progressbar" aria-label="Carregando" />
            </div>
        },
        ListDisplay::Empty => html! {
            <div class="product-list">
                <p class="no-products">{"Nenhum produto encontrado"}</p>
            </div>
        },
        ListDisplay::Products(products) => html! {
            <ul class="product-list">
                { for products.iter().map(|product| product_item(product, on_navigate)) }
            </ul>
        },
    }
}

fn product_item(product: &Product, on_navigate: &Callback<Route>) -> Html {
    let route = feedback_route(product);
    let onclick = on_navigate.reform(move |_: MouseEvent| route);

    html! {
        <li key={product.id.to_string()} class="product-item">
            <img class="product-image" src={product.image.clone()} alt={product.name.clone()} />
            <h2 class="product-title">{ &product.name }</h2>
            <p>{ format!("Marca: {}", product.brand) }</p>
            <p>{ format!("Preço: {}", product.price) }</p>
            <p>{ format!("Descrição: {}", product.description) }</p>
            <button class="button" {onclick}>{"Avaliar"}</button>
        </li>
    }
}
