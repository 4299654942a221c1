use crate::{
    data::stat_channel::StatChannelRepository,
    error::AppError,
    model::stat_channel::{StatKind, UpsertStatChannelParam},
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory::stat_channel::StatChannelFactory};

mod find_by_guild;
mod get_all_by_kind;
mod upsert;
