use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StatChannel::Table)
                    .if_not_exists()
                    .col(pk_auto(StatChannel::Id))
                    .col(string(StatChannel::GuildId))
                    .col(string(StatChannel::Kind))
                    .col(string(StatChannel::ChannelId))
                    .col(timestamp(StatChannel::CreatedAt))
                    .col(timestamp(StatChannel::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // One display channel per statistic kind per guild
        manager
            .create_index(
                Index::create()
                    .name("idx_stat_channel_guild_id_kind")
                    .table(StatChannel::Table)
                    .col(StatChannel::GuildId)
                    .col(StatChannel::Kind)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_stat_channel_guild_id_kind")
                    .table(StatChannel::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(StatChannel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum StatChannel {
    Table,
    Id,
    GuildId,
    Kind,
    ChannelId,
    CreatedAt,
    UpdatedAt,
}
