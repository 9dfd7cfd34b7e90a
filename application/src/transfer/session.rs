use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct IssueTokenDto {
    pub user_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct ResolveTokenDto {
    pub token: Uuid,
}

#[derive(Debug, Clone)]
pub struct RevokeTokenDto {
    pub token: Uuid,
}
