use crate::{
    model::user::Role,
    server::{
        error::{auth::AuthError, AppError},
        middleware::{auth::AuthGuard, session::AuthSession},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod require;
