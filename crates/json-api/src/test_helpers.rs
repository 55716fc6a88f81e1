//! Test helpers.

use std::sync::Arc;

use jiff::{Timestamp, civil::date};
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use bookery_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        accounts::{
            MockAccountsService,
            models::{Account, AccountUuid},
        },
        carts::{
            MockCartsService,
            models::{Cart, CartItem, CartItemUuid, CartUuid},
        },
        catalog::{
            MockCatalogService,
            models::{Book, BookPage, BookUuid, Category, CategoryKind, CategoryUuid},
        },
        checkouts::{
            MockCheckoutsService,
            models::{Checkout, CheckoutUuid},
        },
        comments::{
            MockCommentsService,
            models::{BookComment, CommentUuid},
        },
        search::MockSearchService,
        wishlists::MockWishlistsService,
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_ACCOUNT_UUID: AccountUuid = AccountUuid::from_uuid(Uuid::nil());

/// One mock per app service. Unconfigured mocks panic on any call, so a
/// test only wires up the services its route actually touches.
pub(crate) struct Mocks {
    pub accounts: MockAccountsService,
    pub auth: MockAuthService,
    pub carts: MockCartsService,
    pub catalog: MockCatalogService,
    pub checkouts: MockCheckoutsService,
    pub comments: MockCommentsService,
    pub search: MockSearchService,
    pub wishlists: MockWishlistsService,
}

impl Mocks {
    pub(crate) fn new() -> Self {
        Self {
            accounts: MockAccountsService::new(),
            auth: MockAuthService::new(),
            carts: MockCartsService::new(),
            catalog: MockCatalogService::new(),
            checkouts: MockCheckoutsService::new(),
            comments: MockCommentsService::new(),
            search: MockSearchService::new(),
            wishlists: MockWishlistsService::new(),
        }
    }

    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            accounts: Arc::new(self.accounts),
            auth: Arc::new(self.auth),
            carts: Arc::new(self.carts),
            catalog: Arc::new(self.catalog),
            checkouts: Arc::new(self.checkouts),
            comments: Arc::new(self.comments),
            search: Arc::new(self.search),
            wishlists: Arc::new(self.wishlists),
        })
    }
}

pub(crate) fn state_with_accounts(accounts: MockAccountsService) -> Arc<State> {
    Mocks {
        accounts,
        ..Mocks::new()
    }
    .into_state()
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    Mocks {
        auth,
        ..Mocks::new()
    }
    .into_state()
}

pub(crate) fn state_with_carts(carts: MockCartsService) -> Arc<State> {
    Mocks {
        carts,
        ..Mocks::new()
    }
    .into_state()
}

pub(crate) fn state_with_catalog(catalog: MockCatalogService) -> Arc<State> {
    Mocks {
        catalog,
        ..Mocks::new()
    }
    .into_state()
}

pub(crate) fn state_with_comments(comments: MockCommentsService) -> Arc<State> {
    Mocks {
        comments,
        ..Mocks::new()
    }
    .into_state()
}

pub(crate) fn state_with_search(search: MockSearchService) -> Arc<State> {
    Mocks {
        search,
        ..Mocks::new()
    }
    .into_state()
}

pub(crate) fn state_with_wishlists(wishlists: MockWishlistsService) -> Arc<State> {
    Mocks {
        wishlists,
        ..Mocks::new()
    }
    .into_state()
}

/// Stands in for the auth middleware on protected routes.
#[salvo::handler]
pub(crate) async fn inject_account(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_account_uuid(TEST_ACCOUNT_UUID);
    ctrl.call_next(req, depot, res).await;
}

pub(crate) fn public_service(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}

pub(crate) fn authed_service(state: Arc<State>, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state))
            .hoop(inject_account)
            .push(route),
    )
}

pub(crate) fn make_account(username: &str) -> Account {
    Account {
        uuid: AccountUuid::new(),
        username: username.to_string(),
        email: format!("{username}@email.com"),
        first_name: None,
        last_name: None,
        image: "default_avatar.jpg".to_string(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_book(slug: &str, price: u64) -> Book {
    Book {
        uuid: BookUuid::new(),
        title: slug.replace('-', " "),
        slug: slug.to_string(),
        image: "default_book_image.jpg".to_string(),
        info: String::new(),
        price,
        mark: 0.0,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_book_page(page: u32) -> BookPage {
    BookPage {
        books: vec![make_book("dead-souls", 50_00)],
        page,
        per_page: 4,
        total: 1,
    }
}

pub(crate) fn make_category(slug: &str) -> Category {
    Category {
        uuid: CategoryUuid::new(),
        kind: CategoryKind::Main,
        title: slug.replace('-', " "),
        slug: slug.to_string(),
        main_category_uuid: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_cart() -> Cart {
    Cart {
        uuid: CartUuid::new(),
        account_uuid: TEST_ACCOUNT_UUID,
        is_used: false,
        items: Vec::new(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_cart_item(book_slug: &str, qty: u64, unit_price: u64) -> CartItem {
    CartItem {
        uuid: CartItemUuid::new(),
        book_uuid: BookUuid::new(),
        book_title: book_slug.replace('-', " "),
        book_slug: book_slug.to_string(),
        unit_price,
        qty,
        final_price: unit_price * qty,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_comment(username: &str, mark: i16) -> BookComment {
    BookComment {
        uuid: CommentUuid::new(),
        text: "test".to_string(),
        mark,
        created_at: Timestamp::UNIX_EPOCH,
        author_username: username.to_string(),
        author_image: "default_avatar.jpg".to_string(),
    }
}

pub(crate) fn make_checkout(cart: CartUuid, total_price: u64) -> Checkout {
    Checkout {
        uuid: CheckoutUuid::new(),
        cart_uuid: cart,
        account_uuid: TEST_ACCOUNT_UUID,
        first_name: "test".to_string(),
        last_name: "test".to_string(),
        email: "test@test.com".to_string(),
        address: "test address".to_string(),
        comment: None,
        delivery_date: date(2027, 1, 15),
        total_price,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
