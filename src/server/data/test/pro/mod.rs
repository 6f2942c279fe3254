use crate::server::data::pro::ProRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod counts;
mod find_by_user_id;
mod get_all;
mod get_published;
