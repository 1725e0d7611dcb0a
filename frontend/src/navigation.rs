//! Navigation root: a stack of typed routes.
//!
//! The stack always holds at least one entry and starts at [`Route::Home`].
//! Route parameters live inside the enum variants, so navigating to a screen
//! without its parameters does not compile.
//!
//! `App` owns the single [`Navigator`] and hands every screen a
//! `Callback<Route>`; screens never touch the stack directly. The flow is
//! Home → ProductList → FeedbackForm { product_id }, and a successful
//! submission navigates to Home, which unwinds the whole stack.

/// Screens of the application and the parameters each one needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    ProductList,
    FeedbackForm { product_id: i64 },
}

impl Route {
    /// Stable screen name, independent of parameters.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::ProductList => "ProductList",
            Route::FeedbackForm { .. } => "FeedbackForm",
        }
    }

    /// Header title shown while the route is on top.
    pub fn title(&self) -> &'static str {
        match self {
            Route::FeedbackForm { .. } => "Formulário de Feedback",
            other => other.name(),
        }
    }
}

/// Stack of visited routes. The last entry is the visible screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new() -> Self {
        Navigator {
            stack: vec![Route::Home],
        }
    }

    pub fn current(&self) -> Route {
        match self.stack.last() {
            Some(route) => *route,
            None => Route::Home, // unreachable: back() never pops the root
        }
    }

    /// Shows `route`.
    ///
    /// If a screen with the same name is already on the stack, everything
    /// above it is popped and its parameters are replaced. Otherwise the route
    /// is pushed.
    ///
    /// # Arguments
    /// * `route` - Destination screen together with its parameters.
    pub fn navigate(&mut self, route: Route) {
        match self.stack.iter().position(|r| r.name() == route.name()) {
            Some(index) => {
                self.stack.truncate(index + 1);
                self.stack[index] = route;
            }
            None => self.stack.push(route),
        }
    }

    /// Pops the top route. Does nothing at the root.
    pub fn back(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Every route on the stack, root first.
    pub fn routes(&self) -> &[Route] {
        &self.stack
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
