//! The remote data gateway contract.
//!
//! Every call the client makes to the backend goes through [`RemoteGateway`].
//! Implementations never sort or filter results; callers receive server order.

use async_trait::async_trait;

use crate::auth::AuthResponse;
use crate::error::Result;
use crate::matchmaking::{MatchQuery, MatchResult};
use crate::profile::{CreatedRecord, InvestorProfile, NewInvestor, NewStartup, StartupProfile};

#[async_trait]
pub trait RemoteGateway: Send + Sync {
    /// `GET /api/startups`
    async fn list_startups(&self) -> Result<Vec<StartupProfile>>;

    /// `GET /api/investors`
    async fn list_investors(&self) -> Result<Vec<InvestorProfile>>;

    /// `POST /api/startups`
    async fn create_startup(&self, payload: &NewStartup) -> Result<CreatedRecord>;

    /// `POST /api/investors`
    async fn create_investor(&self, payload: &NewInvestor) -> Result<CreatedRecord>;

    /// `POST /api/matchmaking`
    async fn run_match_query(&self, query: &MatchQuery) -> Result<Vec<MatchResult>>;

    /// `POST /api/auth/google`
    ///
    /// A refused exchange is still `Ok`; branch on [`AuthResponse::ok`].
    async fn exchange_identity(&self, id_token: &str) -> Result<AuthResponse>;
}
