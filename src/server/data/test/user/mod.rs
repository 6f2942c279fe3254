use crate::{
    model::user::Role,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::UpsertUserParam,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod count;
mod find_by_id;
mod upsert;
