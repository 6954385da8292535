//! Create `bookmarks` table.
//! The store assigns the integer id; the rating range is enforced at the
//! application layer, not with a database check constraint.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bookmarks::Table)
                    .if_not_exists()
                    .col(pk_auto(Bookmarks::Id))
                    .col(text(Bookmarks::Title).not_null())
                    .col(text(Bookmarks::Url).not_null())
                    .col(text(Bookmarks::Description).not_null())
                    .col(integer(Bookmarks::Rating).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Bookmarks::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Bookmarks {
    Table,
    Id,
    Title,
    Url,
    Description,
    Rating,
}
