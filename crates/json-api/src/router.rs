//! App Router

use salvo::Router;

use crate::{account, auth, books, cart, categories, comments, search, wishlist};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("auth")
                .push(Router::with_path("register").post(auth::handlers::register::handler))
                .push(Router::with_path("login").post(auth::handlers::login::handler))
                .push(
                    Router::with_path("logout")
                        .hoop(auth::middleware::handler)
                        .post(auth::handlers::logout::handler),
                ),
        )
        .push(
            Router::with_path("books").get(books::handlers::index::handler).push(
                Router::with_path("{slug}")
                    .get(books::handlers::get::handler)
                    .push(
                        Router::with_path("comments")
                            .get(comments::handlers::index::handler)
                            .push(
                                Router::new()
                                    .hoop(auth::middleware::handler)
                                    .post(comments::handlers::create::handler),
                            ),
                    ),
            ),
        )
        .push(
            Router::with_path("categories")
                .get(categories::handlers::index::handler)
                .push(Router::with_path("{slug}/books").get(categories::handlers::books::handler)),
        )
        .push(Router::with_path("search").post(search::handlers::handler))
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .push(
                    Router::with_path("account")
                        .get(account::handlers::get::handler)
                        .put(account::handlers::update::handler),
                )
                .push(
                    Router::with_path("wishlist")
                        .get(wishlist::handlers::index::handler)
                        .push(
                            Router::with_path("{slug}")
                                .put(wishlist::handlers::add::handler)
                                .delete(wishlist::handlers::remove::handler),
                        ),
                )
                .push(
                    Router::with_path("cart")
                        .get(cart::handlers::get::handler)
                        .push(
                            Router::with_path("books/{slug}")
                                .post(cart::handlers::add_book::handler),
                        )
                        .push(Router::with_path("recalc").post(cart::handlers::recalc::handler))
                        .push(
                            Router::with_path("items/{uuid}")
                                .delete(cart::handlers::remove_item::handler),
                        )
                        .push(
                            Router::with_path("checkout").post(cart::handlers::checkout::handler),
                        ),
                ),
        )
}
