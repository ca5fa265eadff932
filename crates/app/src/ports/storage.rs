//! Storage port — repository traits for persistence.

use std::future::Future;

use tradehub_domain::account::ProfessionalAccount;
use tradehub_domain::error::TradeHubError;
use tradehub_domain::id::AccountId;

/// CRUD port for professional accounts.
///
/// `update` must persist the category set and the `monthly_fee` snapshot in a
/// single write — a reader must never observe one without the other.
pub trait AccountRepository {
    fn create(
        &self,
        account: ProfessionalAccount,
    ) -> impl Future<Output = Result<ProfessionalAccount, TradeHubError>> + Send;

    fn get_by_id(
        &self,
        id: AccountId,
    ) -> impl Future<Output = Result<Option<ProfessionalAccount>, TradeHubError>> + Send;

    fn get_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<ProfessionalAccount>, TradeHubError>> + Send;

    fn get_all(
        &self,
    ) -> impl Future<Output = Result<Vec<ProfessionalAccount>, TradeHubError>> + Send;

    fn update(
        &self,
        account: ProfessionalAccount,
    ) -> impl Future<Output = Result<ProfessionalAccount, TradeHubError>> + Send;

    fn delete(&self, id: AccountId) -> impl Future<Output = Result<(), TradeHubError>> + Send;
}
