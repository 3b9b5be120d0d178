use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxUserRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxAchievementRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxResumeRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxIntegrationRepo {
    pub pool: PgPool,
}
