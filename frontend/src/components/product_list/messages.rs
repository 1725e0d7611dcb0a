use common::model::product::Product;

pub enum Msg {
    Loaded(Vec<Product>),
    LoadFailed,
}
