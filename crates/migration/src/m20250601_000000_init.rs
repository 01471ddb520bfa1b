//! Initial schema.
//!
//! - `users`: credentials and the balance every forecast starts from
//! - `transactions`: one-off and recurring cash movement rules
//! - `goals`: savings targets, optionally nested one level under a parent goal

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Users {
    Table,
    Username,
    PasswordHash,
    InitialBalanceMinor,
}

#[derive(Iden)]
enum Transactions {
    Table,
    Id,
    UserId,
    Title,
    AmountMinor,
    IsIncome,
    Frequency,
    StartDate,
    EndDate,
}

#[derive(Iden)]
enum Goals {
    Table,
    Id,
    UserId,
    Title,
    TargetAmountMinor,
    ParentGoalId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(Users::InitialBalanceMinor)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Transactions::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Transactions::UserId).string().not_null())
                    .col(ColumnDef::new(Transactions::Title).string().not_null())
                    .col(
                        ColumnDef::new(Transactions::AmountMinor)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Transactions::IsIncome).boolean().not_null())
                    .col(ColumnDef::new(Transactions::Frequency).string().not_null())
                    .col(ColumnDef::new(Transactions::StartDate).date().not_null())
                    .col(ColumnDef::new(Transactions::EndDate).date())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-transactions-user_id")
                            .from(Transactions::Table, Transactions::UserId)
                            .to(Users::Table, Users::Username)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-transactions-user_id-start_date")
                    .table(Transactions::Table)
                    .col(Transactions::UserId)
                    .col(Transactions::StartDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Goals::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Goals::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Goals::UserId).string().not_null())
                    .col(ColumnDef::new(Goals::Title).string().not_null())
                    .col(
                        ColumnDef::new(Goals::TargetAmountMinor)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Goals::ParentGoalId).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-goals-user_id")
                            .from(Goals::Table, Goals::UserId)
                            .to(Users::Table, Users::Username)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-goals-parent_goal_id")
                            .from(Goals::Table, Goals::ParentGoalId)
                            .to(Goals::Table, Goals::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-goals-user_id")
                    .table(Goals::Table)
                    .col(Goals::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Goals::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}
