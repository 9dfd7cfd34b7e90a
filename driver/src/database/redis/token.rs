use std::time::Duration;

use deadpool_redis::redis::AsyncCommands;
use error_stack::Report;
use uuid::Uuid;

use kernel::interface::query::{AccessTokenQuery, DependOnAccessTokenQuery};
use kernel::interface::update::{AccessTokenModifier, DependOnAccessTokenModifier};
use kernel::prelude::entity::{AccessToken, UserId};
use kernel::KernelError;

use crate::database::redis::{RedisDatabase, RedisTransaction};
use crate::error::ConvertError;

pub struct RedisTokenRepository;

fn session_key(token: &AccessToken) -> String {
    format!("session:{}", token.as_ref())
}

#[async_trait::async_trait]
impl AccessTokenQuery<RedisTransaction> for RedisTokenRepository {
    async fn find_user_id(
        &self,
        con: &mut RedisTransaction,
        token: &AccessToken,
    ) -> error_stack::Result<Option<UserId>, KernelError> {
        let value: Option<String> = con.get(session_key(token)).await.convert_error()?;
        value
            .map(|raw| {
                Uuid::parse_str(&raw)
                    .map(UserId::new)
                    .map_err(|error| Report::new(error).change_context(KernelError::Internal))
            })
            .transpose()
    }
}

#[async_trait::async_trait]
impl AccessTokenModifier<RedisTransaction> for RedisTokenRepository {
    async fn store(
        &self,
        con: &mut RedisTransaction,
        token: &AccessToken,
        user_id: &UserId,
        ttl: Duration,
    ) -> error_stack::Result<(), KernelError> {
        let _: () = deadpool_redis::redis::cmd("SET")
            .arg(session_key(token))
            .arg(user_id.as_ref().to_string())
            .arg("EX")
            .arg(ttl.as_secs())
            .query_async(&mut **con)
            .await
            .convert_error()?;
        Ok(())
    }

    async fn revoke(
        &self,
        con: &mut RedisTransaction,
        token: &AccessToken,
    ) -> error_stack::Result<(), KernelError> {
        let _: i64 = con.del(session_key(token)).await.convert_error()?;
        Ok(())
    }
}

impl DependOnAccessTokenQuery<RedisTransaction> for RedisDatabase {
    type AccessTokenQuery = RedisTokenRepository;
    fn access_token_query(&self) -> &Self::AccessTokenQuery {
        &RedisTokenRepository
    }
}

impl DependOnAccessTokenModifier<RedisTransaction> for RedisDatabase {
    type AccessTokenModifier = RedisTokenRepository;
    fn access_token_modifier(&self) -> &Self::AccessTokenModifier {
        &RedisTokenRepository
    }
}
