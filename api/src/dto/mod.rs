//! Request and response bodies. Field names are camelCase on the wire.

pub mod cart;
pub mod member;
pub mod product;

pub use cart::{CartItemRequest, CartResponse};
pub use member::{
    EmailCheckQuery, EmailCheckResponse, LoginRequest, LoginResponse, MemberResponse,
    PasswordCheckRequest, SignUpRequest, UpdatePasswordRequest, UpdateProfileRequest,
};
pub use product::{ProductPageQuery, ProductResponse};
